use crate::capture::image::ImagePayload;
use crate::engine::descriptor::ErrorDescriptor;
use crate::report::report_model::AccessibilityReport;

// ============================================================================
// UI-facing analysis state machine
// ============================================================================

/// Derived view of the state record: Idle → Analyzing → one terminal phase,
/// then back to Analyzing on the next capture (or Idle after `clear_error`).
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisPhase {
    Idle,
    Analyzing,
    Success,
    NoContent,
    Failure,
}

/// The one authoritative state value behind the capture/report UI.
///
/// Invariants: at most one of `report`/`error` is set; `is_analyzing` is true
/// only while a model call is in flight and is cleared on every terminal
/// transition. All mutation goes through the transition methods below.
#[derive(Debug, Clone, Default)]
pub struct AnalysisState {
    pub is_analyzing: bool,
    pub report: Option<AccessibilityReport>,
    pub error: Option<ErrorDescriptor>,
    pub image_data: Option<ImagePayload>,
}

impl AnalysisState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A new capture starts: prior report and error are dropped, the frame is
    /// held for preview, and the in-flight flag goes up.
    pub fn begin(&mut self, image: ImagePayload) {
        self.is_analyzing = true;
        self.report = None;
        self.error = None;
        self.image_data = Some(image);
    }

    /// Terminal: a usable report. Fully replaces any prior report.
    pub fn complete(&mut self, report: AccessibilityReport) {
        self.is_analyzing = false;
        self.error = None;
        self.report = Some(report);
    }

    /// Terminal: the in-flight analysis failed or found no content.
    pub fn fail(&mut self, error: ErrorDescriptor) {
        self.is_analyzing = false;
        self.report = None;
        self.error = Some(error);
    }

    /// Pre-flight rejection (upload validation, camera permission): the
    /// capture never starts, so the in-flight flag is never raised.
    pub fn reject(&mut self, error: ErrorDescriptor) {
        self.report = None;
        self.error = Some(error);
    }

    /// Explicit "clear error" action: back to Idle.
    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn phase(&self) -> AnalysisPhase {
        if self.is_analyzing {
            AnalysisPhase::Analyzing
        } else if self.report.is_some() {
            AnalysisPhase::Success
        } else if let Some(error) = &self.error {
            if error.is_no_content() {
                AnalysisPhase::NoContent
            } else {
                AnalysisPhase::Failure
            }
        } else {
            AnalysisPhase::Idle
        }
    }
}

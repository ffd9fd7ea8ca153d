use std::time::Instant;

use crate::capture::image::ImagePayload;
use crate::engine::descriptor::ErrorDescriptor;
use crate::engine::prompt::ANALYSIS_PROMPT;
use crate::engine::vision::VisionBackend;
use crate::report::parser::parse_report;
use crate::report::validator::{AnalysisOutcome, validate_report};
use crate::state::analysis::AnalysisState;
use crate::trace::audit::AuditEvent;
use crate::trace::logger::TraceLogger;

// ============================================================================
// Analysis orchestrator — capture → model call → parse → validate → state
// ============================================================================

/// Drives one capture through the model call, parse, validate, and the
/// matching state transition.
///
/// One analysis is in flight per engine instance: the caller must not start a
/// second capture while `state.is_analyzing` is true. The engine does not
/// enforce mutual exclusion; overlapping calls are last-writer-wins.
pub struct AuditEngine {
    backend: Box<dyn VisionBackend>,
    tracer: TraceLogger,
}

impl AuditEngine {
    pub fn new(backend: Box<dyn VisionBackend>, tracer: TraceLogger) -> Self {
        Self { backend, tracer }
    }

    /// Analyze a captured frame, leaving `state` in exactly one terminal
    /// shape: report set, or error descriptor set. `is_analyzing` is cleared
    /// on every terminal transition, no exception.
    pub fn analyze(&self, state: &mut AnalysisState, image: ImagePayload) {
        self.tracer
            .log(&AuditEvent::now("analysis_started").with_frame(&image));
        state.begin(image.clone());

        let started = Instant::now();
        match self.backend.describe(&image, ANALYSIS_PROMPT) {
            Ok(raw) => {
                let report = parse_report(&raw);
                match validate_report(report) {
                    AnalysisOutcome::Accepted(report) => {
                        self.tracer.log(
                            &AuditEvent::now("report_accepted")
                                .with_narration_chars(report.narration.chars().count())
                                .with_duration(started.elapsed().as_millis()),
                        );
                        state.complete(report);
                    }
                    AnalysisOutcome::NoContent => {
                        self.tracer.log(
                            &AuditEvent::now("no_content")
                                .with_duration(started.elapsed().as_millis()),
                        );
                        state.fail(ErrorDescriptor::no_content());
                    }
                }
            }
            Err(err) => {
                // The concrete cause goes to the trace only; the user sees
                // the same generic descriptor whether the key was missing,
                // the network dropped, or the provider answered garbage.
                self.tracer.log(
                    &AuditEvent::now("model_failure")
                        .with_cause(&err)
                        .with_duration(started.elapsed().as_millis()),
                );
                state.fail(ErrorDescriptor::analysis_failure());
            }
        }
    }
}

use serde::Serialize;

use crate::engine::error::EngineError;

// ============================================================================
// User-facing error descriptors — a fixed, closed set
// ============================================================================

pub const NO_CONTENT_TITLE: &str = "No elements found";

/// Human-readable classification of a failure, shown in place of a report.
///
/// The wording here, including the "encounterd" misspelling in the generic
/// descriptor, is frozen user-facing copy. Changing it is a product decision,
/// not a code fix.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorDescriptor {
    pub title: String,
    pub message: String,
    pub action: String,
}

impl ErrorDescriptor {
    fn new(title: &str, message: &str, action: &str) -> Self {
        Self {
            title: title.to_string(),
            message: message.to_string(),
            action: action.to_string(),
        }
    }

    /// Narration below the minimum length: the model found nothing usable.
    pub fn no_content() -> Self {
        Self::new(
            NO_CONTENT_TITLE,
            "We couldn't identify any clear web elements or text in this image.",
            "Try a clearer screenshot or point the camera directly at the screen.",
        )
    }

    /// Any failure during model invocation or downstream processing.
    pub fn analysis_failure() -> Self {
        Self::new(
            "Analysis encounterd an issue",
            "Our engine hit a temporary snag while processing this view.",
            "Please try capturing the screen again.",
        )
    }

    /// Upload rejected: not a PNG, JPG, or WEBP.
    pub fn unsupported_format() -> Self {
        Self::new(
            "Format not supported",
            "We only support PNG, JPG, and WEBP images at this time.",
            "Please convert your file and try again.",
        )
    }

    /// Upload rejected: above the 4 MiB limit.
    pub fn oversized_file() -> Self {
        Self::new(
            "File exceeds size limit",
            "This image is larger than 4MB, which is the maximum allowed for a fast audit.",
            "Please try a smaller file or compress your image.",
        )
    }

    /// Capture device refused permission.
    pub fn camera_access() -> Self {
        Self::new(
            "Camera access needed",
            "We can't start the live scan without permission to use your webcam.",
            "Please enable camera access in your browser settings and try again.",
        )
    }

    pub fn is_no_content(&self) -> bool {
        self.title == NO_CONTENT_TITLE
    }
}

/// Map an engine error to its user-facing descriptor.
///
/// Upload and camera failures get dedicated descriptors. Every other cause
/// (credentials, transport, provider status, malformed body) collapses into
/// the generic one; the distinction survives only in the trace log.
pub fn descriptor_for(error: &EngineError) -> ErrorDescriptor {
    match error {
        EngineError::UnsupportedFormat { .. } => ErrorDescriptor::unsupported_format(),
        EngineError::FileTooLarge { .. } => ErrorDescriptor::oversized_file(),
        EngineError::CameraAccess(_) => ErrorDescriptor::camera_access(),
        _ => ErrorDescriptor::analysis_failure(),
    }
}

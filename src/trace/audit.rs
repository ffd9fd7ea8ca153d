use serde::Serialize;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::capture::image::ImagePayload;
use crate::engine::error::EngineError;

/// One diagnostic record in the audit trace.
///
/// This is the internal channel that keeps failure causes the user never
/// sees. Frames appear as fingerprints only; image bytes never reach the
/// trace file.
#[derive(Debug, Serialize)]
pub struct AuditEvent {
    pub timestamp_ms: u128,
    pub stage: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub frame_fingerprint: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mime: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narration_chars: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u128>,
}

impl AuditEvent {
    pub fn now(stage: &str) -> Self {
        Self {
            timestamp_ms: SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.as_millis())
                .unwrap_or(0),
            stage: stage.to_string(),
            frame_fingerprint: None,
            mime: None,
            cause: None,
            narration_chars: None,
            duration_ms: None,
        }
    }

    pub fn with_frame(mut self, image: &ImagePayload) -> Self {
        self.frame_fingerprint = Some(image.fingerprint());
        self.mime = Some(image.mime.clone());
        self
    }

    pub fn with_cause(mut self, error: &EngineError) -> Self {
        self.cause = Some(error.to_string());
        self
    }

    pub fn with_narration_chars(mut self, chars: usize) -> Self {
        self.narration_chars = Some(chars);
        self
    }

    pub fn with_duration(mut self, duration_ms: u128) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }
}

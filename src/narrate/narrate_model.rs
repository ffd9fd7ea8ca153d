use serde::{Deserialize, Serialize};

// ============================================================================
// Narration service wire models
// ============================================================================

/// Body of POST /narrate.
#[derive(Debug, Clone, Serialize)]
pub struct NarrationRequest {
    pub text: String,

    #[serde(rename = "voiceId", skip_serializing_if = "Option::is_none")]
    pub voice_id: Option<String>,
}

/// A stored narration, as the service returns it (camelCase JSON).
///
/// POST /narrate answers a subset of these fields; GET /narrations answers
/// all of them, so everything past `text` is optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NarrationRecord {
    pub id: String,
    pub user_id: String,
    pub text: String,

    #[serde(default)]
    pub voice_id: Option<String>,
    #[serde(default)]
    pub audio_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub word_count: Option<u32>,
}

/// GET /health payload.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    pub timestamp: String,
    pub service: String,
}

/// DELETE /narrations/:id acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteAck {
    pub success: bool,
    pub id: String,
}

use serde::{Deserialize, Serialize};

// ============================================================================
// Structured analysis report — what the renderer consumes
// ============================================================================

/// The single most critical barrier found in one analysis pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriorityIssue {
    /// Barrier name, e.g. "Low contrast"
    pub issue: String,

    /// WCAG reference code and name
    pub wcag: String,

    /// Remediation description
    pub fix: String,
}

/// Structured result of one analysis pass.
///
/// Built by `parse_report()` from the model's raw text and fully replaced on
/// every new capture. Subfields other than `narration` may be empty; the
/// validator only gates on narration length.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AccessibilityReport {
    /// Prose paragraph intended for screen-reader playback
    pub narration: String,

    /// Recommended alt-text entries, order-preserving
    pub alt_text: Vec<String>,

    /// The most critical barrier with its WCAG reference and fix
    pub priority_issue: PriorityIssue,

    /// Optional machine-readable style-adjustment directive
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<String>,
}

use crate::report::report_model::{AccessibilityReport, PriorityIssue};

// ============================================================================
// Line-prefix protocol
// ============================================================================

// Wire tokens shared with the prompt template. `NARATION:` is misspelled on
// the wire; the prompt instructs the model to emit exactly this token, so the
// parser must match it verbatim.
pub const NARRATION_PREFIX: &str = "NARATION:";
pub const ALT_TEXT_PREFIX: &str = "ALT_TEXT:";
pub const ISSUE_PREFIX: &str = "ISSUE:";
pub const WCAG_PREFIX: &str = "WCAG:";
pub const FIX_PREFIX: &str = "FIX:";
pub const COMMAND_PREFIX: &str = "COMMAND:";

/// Parse a raw model response into a structurally complete report.
///
/// Each field is taken from the first line that starts with its prefix, with
/// the prefix stripped and surrounding whitespace trimmed. A missing prefix
/// yields an empty value, so partial or reordered model output degrades to
/// empty fields instead of an error; line order and duplicate field lines do
/// not matter. This never fails, for any input including the empty string.
pub fn parse_report(raw: &str) -> AccessibilityReport {
    let lines: Vec<&str> = raw.lines().collect();
    let field = |prefix: &str| -> String {
        lines
            .iter()
            .find(|line| line.starts_with(prefix))
            .map(|line| line[prefix.len()..].trim().to_string())
            .unwrap_or_default()
    };

    let alt_text = field(ALT_TEXT_PREFIX)
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| entry.to_string())
        .collect();

    // An empty command means the model emitted none; downstream rendering
    // tests presence, so it is exposed as absent rather than "".
    let command = field(COMMAND_PREFIX);

    AccessibilityReport {
        narration: field(NARRATION_PREFIX),
        alt_text,
        priority_issue: PriorityIssue {
            issue: field(ISSUE_PREFIX),
            wcag: field(WCAG_PREFIX),
            fix: field(FIX_PREFIX),
        },
        command: if command.is_empty() { None } else { Some(command) },
    }
}

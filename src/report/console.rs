use crate::engine::descriptor::ErrorDescriptor;
use crate::report::report_model::AccessibilityReport;

// ============================================================================
// Console renderer — formatted terminal output
// ============================================================================

/// Format an accessibility report for terminal output.
///
/// Produces output like:
/// ```text
/// === Accessibility Report ===
///
/// Narration script:
///   "A login form with two fields and a submit button."
///
/// Alt text suggestions:
///   - logo: site logo
///
/// Priority issue:
///   Low contrast
///   WCAG: 1.4.3
///   Fix: Increase foreground/background ratio
/// ```
pub fn format_report(report: &AccessibilityReport) -> String {
    let mut out = String::new();

    out.push_str("=== Accessibility Report ===\n\n");

    out.push_str("Narration script:\n");
    out.push_str(&format!("  \"{}\"\n", report.narration));

    if !report.alt_text.is_empty() {
        out.push_str("\nAlt text suggestions:\n");
        for entry in &report.alt_text {
            out.push_str(&format!("  - {}\n", entry));
        }
    }

    out.push_str("\nPriority issue:\n");
    out.push_str(&format!("  {}\n", report.priority_issue.issue));
    out.push_str(&format!("  WCAG: {}\n", report.priority_issue.wcag));
    out.push_str(&format!("  Fix: {}\n", report.priority_issue.fix));

    if let Some(command) = &report.command {
        out.push_str("\nAdjustment command:\n");
        out.push_str(&format!("  {}\n", command));
    }

    out
}

/// Format an error descriptor the way the report pane presents it: title,
/// message, then the suggested action.
pub fn format_error(error: &ErrorDescriptor) -> String {
    format!(
        "=== {} ===\n\n{}\n\nAction: {}\n",
        error.title, error.message, error.action
    )
}

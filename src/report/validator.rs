use crate::report::report_model::AccessibilityReport;

/// Minimum narration length, in characters, for a report to count as content.
pub const MIN_NARRATION_CHARS: usize = 10;

/// Outcome of validating a parsed report.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisOutcome {
    Accepted(AccessibilityReport),
    NoContent,
}

/// Classify a parsed report as usable or empty.
///
/// Narration length is the single gate between "model found nothing" and
/// "model produced a usable report". Alt text, priority issue, and command
/// are not inspected; an accepted report may carry empty subfields.
pub fn validate_report(report: AccessibilityReport) -> AnalysisOutcome {
    if report.narration.chars().count() < MIN_NARRATION_CHARS {
        AnalysisOutcome::NoContent
    } else {
        AnalysisOutcome::Accepted(report)
    }
}

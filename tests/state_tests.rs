use accessipilot::engine::descriptor::ErrorDescriptor;
use accessipilot::report::parser::parse_report;
use accessipilot::state::analysis::{AnalysisPhase, AnalysisState};

use crate::common::{FULL_RESPONSE, sample_frame};

mod common;

// =========================================================================
// 1. Initial state
// =========================================================================

#[test]
fn fresh_state_is_idle() {
    let state = AnalysisState::new();

    assert_eq!(state.phase(), AnalysisPhase::Idle);
    assert!(!state.is_analyzing);
    assert!(state.report.is_none());
    assert!(state.error.is_none());
    assert!(state.image_data.is_none());
}

// =========================================================================
// 2. begin
// =========================================================================

#[test]
fn begin_raises_the_flag_and_clears_outcomes() {
    let mut state = AnalysisState::new();
    state.fail(ErrorDescriptor::analysis_failure());

    let frame = sample_frame();
    state.begin(frame.clone());

    assert_eq!(state.phase(), AnalysisPhase::Analyzing);
    assert!(state.is_analyzing);
    assert!(state.report.is_none());
    assert!(state.error.is_none());
    assert_eq!(state.image_data, Some(frame));
}

// =========================================================================
// 3. Terminal transitions clear the flag
// =========================================================================

#[test]
fn complete_clears_the_flag_and_sets_the_report() {
    let mut state = AnalysisState::new();
    state.begin(sample_frame());
    state.complete(parse_report(FULL_RESPONSE));

    assert_eq!(state.phase(), AnalysisPhase::Success);
    assert!(!state.is_analyzing);
    assert!(state.report.is_some());
    assert!(state.error.is_none());
}

#[test]
fn fail_clears_the_flag_and_sets_the_error() {
    let mut state = AnalysisState::new();
    state.begin(sample_frame());
    state.fail(ErrorDescriptor::analysis_failure());

    assert_eq!(state.phase(), AnalysisPhase::Failure);
    assert!(!state.is_analyzing);
    assert!(state.report.is_none());
    assert!(state.error.is_some());
}

#[test]
fn no_content_failure_has_its_own_phase() {
    let mut state = AnalysisState::new();
    state.begin(sample_frame());
    state.fail(ErrorDescriptor::no_content());

    assert_eq!(state.phase(), AnalysisPhase::NoContent);
}

// =========================================================================
// 4. Pre-flight rejection
// =========================================================================

#[test]
fn reject_never_raises_the_flag() {
    let mut state = AnalysisState::new();
    state.reject(ErrorDescriptor::oversized_file());

    assert!(!state.is_analyzing);
    assert_eq!(state.phase(), AnalysisPhase::Failure);
    assert!(state.error.is_some());
}

#[test]
fn reject_clears_a_prior_report() {
    let mut state = AnalysisState::new();
    state.complete(parse_report(FULL_RESPONSE));
    state.reject(ErrorDescriptor::unsupported_format());

    assert!(state.report.is_none());
    assert!(state.error.is_some());
}

// =========================================================================
// 5. clear_error
// =========================================================================

#[test]
fn clear_error_returns_to_idle() {
    let mut state = AnalysisState::new();
    state.fail(ErrorDescriptor::analysis_failure());
    state.clear_error();

    assert_eq!(state.phase(), AnalysisPhase::Idle);
    assert!(state.error.is_none());
}

// =========================================================================
// 6. Re-entry from terminal states
// =========================================================================

#[test]
fn a_new_capture_reenters_analyzing_from_any_terminal_state() {
    let mut state = AnalysisState::new();

    state.fail(ErrorDescriptor::no_content());
    state.begin(sample_frame());
    assert_eq!(state.phase(), AnalysisPhase::Analyzing);

    state.complete(parse_report(FULL_RESPONSE));
    state.begin(sample_frame());
    assert_eq!(state.phase(), AnalysisPhase::Analyzing);
    assert!(state.report.is_none());
}

// =========================================================================
// 7. At most one outcome
// =========================================================================

#[test]
fn report_and_error_are_never_both_set() {
    let mut state = AnalysisState::new();

    state.complete(parse_report(FULL_RESPONSE));
    state.fail(ErrorDescriptor::analysis_failure());
    assert!(state.report.is_none() || state.error.is_none());

    state.complete(parse_report(FULL_RESPONSE));
    assert!(state.error.is_none());
    assert!(state.report.is_some());
}

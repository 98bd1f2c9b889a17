//! Result normalization tests.
//!
//! Handler return shapes all collapse into `CommandResult`.

use gale_foundation::{CommandResult, Outcome, Value};

#[test]
fn unit_means_silent_success() {
    let result = CommandResult::from_outcome(Outcome::from(()));
    assert!(result.is_success());
    assert_eq!(result.message(), "");
    assert!(result.payload().is_none());
}

#[test]
fn flag_sets_success() {
    assert!(CommandResult::from_outcome(Outcome::from(true)).is_success());
    assert!(!CommandResult::from_outcome(Outcome::from(false)).is_success());
}

#[test]
fn payload_rides_along() {
    let result = CommandResult::from_outcome(Outcome::from(Value::Int(4)));
    assert!(result.is_success());
    assert_eq!(result.payload(), Some(&Value::Int(4)));
}

#[test]
fn full_result_passes_through() {
    let full = CommandResult::fail_with("no permission");
    let result = CommandResult::from_outcome(Outcome::from(full));
    assert!(!result.is_success());
    assert_eq!(result.message(), "no permission");
}

#[test]
fn display_reports_status() {
    assert_eq!(CommandResult::success().to_string(), "ok");
    assert_eq!(
        CommandResult::fail_with("denied").to_string(),
        "failed: denied"
    );
}

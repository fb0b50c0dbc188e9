use std::error::Error;
use guardias_core::errors::{ShiftError, ShiftResult};
use guardias_core::models::schedule::ScheduleStatus;

#[test]
fn test_shift_error_display() {
    let not_found = ShiftError::NotFound("Schedule 7 not found".to_string());
    let validation = ShiftError::Validation("Invalid time of day".to_string());
    let transition = ShiftError::InvalidTransition {
        from: ScheduleStatus::Draft,
        to: ScheduleStatus::Published,
    };
    let denied = ShiftError::RevertDenied("schedule has past shifts".to_string());
    let source = ShiftError::Source(eyre::eyre!("Backend unreachable"));
    let internal = ShiftError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(not_found.to_string(), "Resource not found: Schedule 7 not found");
    assert_eq!(validation.to_string(), "Validation error: Invalid time of day");
    assert_eq!(
        transition.to_string(),
        "Invalid schedule transition: draft -> published"
    );
    assert_eq!(
        denied.to_string(),
        "Revert to draft denied: schedule has past shifts"
    );
    assert!(source.to_string().contains("Shift source error:"));
    assert!(internal.to_string().contains("Internal error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let shift_error = ShiftError::Internal(Box::new(io_error));

    assert!(shift_error.source().is_some());
}

#[test]
fn test_shift_result() {
    let result: ShiftResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: ShiftResult<i32> = Err(ShiftError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_eyre_report() {
    let shift_error: ShiftError = eyre::eyre!("connection reset").into();

    assert!(matches!(shift_error, ShiftError::Source(_)));
    assert!(shift_error.to_string().contains("connection reset"));
}

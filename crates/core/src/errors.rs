use thiserror::Error;

use crate::models::schedule::ScheduleStatus;

#[derive(Error, Debug)]
pub enum ShiftError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid schedule transition: {from} -> {to}")]
    InvalidTransition {
        from: ScheduleStatus,
        to: ScheduleStatus,
    },

    #[error("Revert to draft denied: {0}")]
    RevertDenied(String),

    #[error("Shift source error: {0}")]
    Source(#[from] eyre::Report),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type ShiftResult<T> = Result<T, ShiftError>;

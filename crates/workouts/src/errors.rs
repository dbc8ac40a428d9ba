use thiserror::Error;

use crate::models::ActivityKind;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum WorkoutError {
    #[error("Unknown activity code: {0:?}")]
    UnknownActivityCode(String),

    #[error("{kind} expects {expected} fields, got {actual}")]
    ArityMismatch {
        kind: ActivityKind,
        expected: usize,
        actual: usize,
    },

    #[error("Invalid input: {0}")]
    InvalidNumericInput(String),
}

impl WorkoutError {
    pub(crate) fn invalid(field: &str, value: f64, requirement: &str) -> Self {
        WorkoutError::InvalidNumericInput(format!("{field} must be {requirement}, got {value}"))
    }
}

//! Error types for the motion operators.

use motionmaker_spec::{BackendError, Channel, TargetError, ValidationError};
use thiserror::Error;

/// Result type for motion operator calls.
pub type MotionResult<T> = Result<T, MotionError>;

/// Errors that can occur while adding or removing motion.
#[derive(Debug, Error)]
pub enum MotionError {
    /// The operator has no object to act on.
    #[error("{0}")]
    NoTargetObject(#[from] TargetError),

    /// Settings failed validation.
    #[error("invalid motion settings: {}", summarize(.errors))]
    InvalidSettings { errors: Vec<ValidationError> },

    /// A cycles modifier was requested on a curve that was never keyed.
    #[error("no F-curve for {channel}; cannot attach cycles modifier")]
    MissingCurve { channel: Channel },
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

impl MotionError {
    /// Creates an invalid settings error.
    pub fn invalid_settings(errors: Vec<ValidationError>) -> Self {
        Self::InvalidSettings { errors }
    }
}

impl BackendError for MotionError {
    fn code(&self) -> &'static str {
        match self {
            MotionError::NoTargetObject(_) => "MOTION_001",
            MotionError::InvalidSettings { .. } => "MOTION_002",
            MotionError::MissingCurve { .. } => "MOTION_003",
        }
    }

    fn category(&self) -> &'static str {
        "motion"
    }
}

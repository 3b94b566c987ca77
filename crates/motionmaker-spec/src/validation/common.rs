//! Common numeric validation helpers.

use std::fmt;

use crate::settings::PropertyDescriptor;

/// Error type for common validation failures.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonValidationError {
    /// Human-readable error message.
    pub message: String,
}

impl CommonValidationError {
    /// Creates a new validation error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for CommonValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CommonValidationError {}

/// Validate that a value is finite and in `[min, max]`.
///
/// # Example
/// ```
/// use motionmaker_spec::validation::common::validate_range;
///
/// assert!(validate_range("translation_speed", 1.0, 0.01, 10.0).is_ok());
/// assert!(validate_range("translation_speed", 0.0, 0.01, 10.0).is_err());
/// ```
pub fn validate_range(
    name: &str,
    value: f64,
    min: f64,
    max: f64,
) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value < min || value > max {
        return Err(CommonValidationError::new(format!(
            "{} must be in [{}, {}], got {}",
            name, min, max, value
        )));
    }
    Ok(())
}

/// Validate that a value is finite and `>= min`.
pub fn validate_at_least(name: &str, value: f64, min: f64) -> Result<(), CommonValidationError> {
    if !value.is_finite() {
        return Err(CommonValidationError::new(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    if value < min {
        return Err(CommonValidationError::new(format!(
            "{} must be >= {}, got {}",
            name, min, value
        )));
    }
    Ok(())
}

/// Validate a value against a panel descriptor's bounds.
pub fn validate_property(
    prop: &PropertyDescriptor,
    value: f64,
) -> Result<(), CommonValidationError> {
    match prop.max {
        Some(max) => validate_range(prop.id, value, prop.min, max),
        None => validate_at_least(prop.id, value, prop.min),
    }
}

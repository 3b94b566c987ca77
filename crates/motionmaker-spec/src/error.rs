//! Error types for scene validation and processing.

use thiserror::Error;

/// Error codes for scene validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Document errors (E001-E009)
    /// E001: Unsupported spec_version
    UnsupportedSpecVersion,
    /// E002: Invalid object name
    InvalidObjectName,
    /// E003: Two objects share a name
    DuplicateObjectName,
    /// E004: active_object names an object that is not in the scene
    UnknownActiveObject,
    /// E005: Object transform contains NaN or infinity
    NonFiniteTransform,

    // Settings errors (E010-E019)
    /// E010: Motion setting outside its allowed range
    SettingOutOfRange,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnsupportedSpecVersion => "E001",
            ErrorCode::InvalidObjectName => "E002",
            ErrorCode::DuplicateObjectName => "E003",
            ErrorCode::UnknownActiveObject => "E004",
            ErrorCode::NonFiniteTransform => "E005",
            ErrorCode::SettingOutOfRange => "E010",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for scene validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Rotation motion on an object that is not in XYZ Euler mode
    NonXyzRotationMode,
    /// W002: Noise settings changed from defaults (they are not applied)
    UnusedNoiseSettings,
    /// W003: Object already has animation data that add-motion will replace
    ExistingAnimationData,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::NonXyzRotationMode => "W001",
            WarningCode::UnusedNoiseSettings => "W002",
            WarningCode::ExistingAnimationData => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "objects\[0\].name").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for scene document operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Result of scene validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Folds another result into this one.
    pub fn merge(&mut self, other: ValidationResult) {
        for error in other.errors {
            self.add_error(error);
        }
        self.warnings.extend(other.warnings);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Gives every operator failure a stable code and category so the CLI
/// and reports can surface them uniformly.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "MOTION_001". Codes are stable and can
    /// be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ErrorCode::UnsupportedSpecVersion.code(), "E001");
        assert_eq!(ErrorCode::UnknownActiveObject.code(), "E004");
        assert_eq!(ErrorCode::SettingOutOfRange.code(), "E010");
        assert_eq!(WarningCode::NonXyzRotationMode.code(), "W001");
        assert_eq!(WarningCode::ExistingAnimationData.code(), "W003");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::with_path(
            ErrorCode::SettingOutOfRange,
            "translation_range must be in [0, 10], got 12",
            "settings.translation_range",
        );
        assert_eq!(
            err.to_string(),
            "E010: translation_range must be in [0, 10], got 12 (at settings.translation_range)"
        );

        let err = ValidationError::new(ErrorCode::UnsupportedSpecVersion, "bad version");
        assert_eq!(err.to_string(), "E001: bad version");
    }

    #[test]
    fn test_validation_result_merge() {
        let mut a = ValidationResult::success();
        let mut b = ValidationResult::success();
        b.add_error(ValidationError::new(ErrorCode::InvalidObjectName, "empty"));
        b.add_warning(ValidationWarning::new(
            WarningCode::UnusedNoiseSettings,
            "noise",
        ));

        a.merge(b);
        assert!(!a.is_ok());
        assert_eq!(a.errors.len(), 1);
        assert_eq!(a.warnings.len(), 1);
        assert!(a.into_result().is_err());
    }
}

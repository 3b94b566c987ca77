//! JSON output types for machine-readable CLI output.
//!
//! These types back the `--json` flag on `add`, `remove`, `validate`, and
//! `panel`, so scripts can drive the tool without scraping colored text.

use serde::{Deserialize, Serialize};

use crate::input::InputError;

/// Error codes for CLI operations.
///
/// These codes are stable. Validation and operator errors pass their own
/// codes through (`E0xx`, `MOTION_0xx`).
pub mod error_codes {
    /// File could not be read
    pub const FILE_READ: &str = "CLI_001";
    /// JSON parse error
    pub const JSON_PARSE: &str = "CLI_002";
    /// File could not be written
    pub const FILE_WRITE: &str = "CLI_003";
    /// Scene serialization error
    pub const JSON_SERIALIZE: &str = "CLI_004";
}

/// A structured error in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonError {
    /// Stable error code (e.g., "CLI_001", "E010", "MOTION_001")
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    /// Source file path (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
}

impl JsonError {
    /// Creates a new error with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
            file: None,
        }
    }

    /// Sets the JSON path for this error.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Sets the file path for this error.
    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }
}

/// A structured warning in JSON output.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JsonWarning {
    /// Stable warning code (e.g., "W001")
    pub code: String,
    /// Human-readable warning message
    pub message: String,
    /// JSON path to the problematic field (if applicable)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

impl JsonWarning {
    /// Creates a new warning with code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            path: None,
        }
    }

    /// Sets the JSON path for this warning.
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }
}

/// Converts an InputError to a JsonError.
pub fn input_error_to_json(err: &InputError, file: Option<&str>) -> JsonError {
    let code = match err {
        InputError::FileRead { .. } => error_codes::FILE_READ,
        InputError::FileWrite { .. } => error_codes::FILE_WRITE,
        InputError::JsonParse { .. } => error_codes::JSON_PARSE,
        InputError::Serialize { .. } => error_codes::JSON_SERIALIZE,
    };

    let mut error = JsonError::new(code, err.to_string());
    if let Some(f) = file {
        error = error.with_file(f);
    }
    error
}

/// Converts a ValidationError to a JsonError.
pub fn validation_error_to_json(err: &motionmaker_spec::ValidationError) -> JsonError {
    let mut error = JsonError::new(err.code.to_string(), &err.message);
    if let Some(ref path) = err.path {
        error = error.with_path(path);
    }
    error
}

/// Converts a ValidationWarning to a JsonWarning.
pub fn validation_warning_to_json(warn: &motionmaker_spec::ValidationWarning) -> JsonWarning {
    let mut warning = JsonWarning::new(warn.code.to_string(), &warn.message);
    if let Some(ref path) = warn.path {
        warning = warning.with_path(path);
    }
    warning
}

/// Converts every message of a validation result.
pub fn validation_to_json(
    result: &motionmaker_spec::ValidationResult,
) -> (Vec<JsonError>, Vec<JsonWarning>) {
    (
        result.errors.iter().map(validation_error_to_json).collect(),
        result.warnings.iter().map(validation_warning_to_json).collect(),
    )
}

/// JSON output for the `add` and `remove` commands.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorOutput {
    /// Whether the operator succeeded
    pub success: bool,
    /// Errors encountered
    pub errors: Vec<JsonError>,
    /// Warnings from validation
    pub warnings: Vec<JsonWarning>,
    /// Operator result details (on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<OperatorResult>,
    /// Canonical hash of the input scene
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_hash: Option<String>,
    /// BLAKE3 hash of the input file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
    /// Path to the written report
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_path: Option<String>,
}

/// Operator result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorResult {
    /// "add_motion" or "remove_motion"
    pub operation: String,
    /// Object the operator acted on
    pub object: String,
    /// Path the updated scene was written to
    pub scene_path: String,
    /// Effective seed (add only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Number of keys inserted (add only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub keyframe_count: Option<usize>,
    /// Whether earlier animation was discarded (add only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleared_existing: Option<bool>,
    /// Whether animation was removed (remove only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub removed: Option<bool>,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

impl OperatorOutput {
    /// Creates a successful operator output.
    pub fn success(
        result: OperatorResult,
        scene_hash: String,
        source_hash: String,
        warnings: Vec<JsonWarning>,
        report_path: String,
    ) -> Self {
        Self {
            success: true,
            errors: Vec::new(),
            warnings,
            result: Some(result),
            scene_hash: Some(scene_hash),
            source_hash: Some(source_hash),
            report_path: Some(report_path),
        }
    }

    /// Creates a failed operator output.
    pub fn failure(
        errors: Vec<JsonError>,
        warnings: Vec<JsonWarning>,
        scene_hash: Option<String>,
        source_hash: Option<String>,
        report_path: Option<String>,
    ) -> Self {
        Self {
            success: false,
            errors,
            warnings,
            result: None,
            scene_hash,
            source_hash,
            report_path,
        }
    }
}

/// JSON output for the `validate` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateOutput {
    /// Whether validation succeeded (no errors)
    pub success: bool,
    /// Validation errors
    pub errors: Vec<JsonError>,
    /// Validation warnings
    pub warnings: Vec<JsonWarning>,
    /// Validation details (when the scene could be loaded)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<ValidateResult>,
    /// Canonical scene hash
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene_hash: Option<String>,
    /// BLAKE3 hash of the source file
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_hash: Option<String>,
}

/// Validation result details.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidateResult {
    /// Number of objects in the scene
    pub object_count: usize,
    /// Active object, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_object: Option<String>,
    /// Path to the written report
    pub report_path: String,
    /// Duration in milliseconds
    pub duration_ms: u64,
}

/// JSON output for the `panel` command.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelOutput {
    /// Scene the values were read from, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    /// Active object, if set
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_object: Option<String>,
    /// Sections in panel order
    pub groups: Vec<PanelGroup>,
}

/// One panel section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelGroup {
    pub heading: String,
    pub properties: Vec<PanelProperty>,
}

/// One panel field with its current value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PanelProperty {
    pub id: String,
    pub label: String,
    pub value: f64,
    pub default: f64,
    pub bounds: String,
    pub description: String,
}

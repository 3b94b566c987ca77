//! Builder pattern for creating reports.

use super::{ChannelSummary, Report, ReportError, ReportOperation, ReportWarning, REPORT_VERSION};
use crate::error::ValidationResult;

/// Builder for creating reports ergonomically.
pub struct ReportBuilder {
    operation: ReportOperation,
    scene_hash: String,
    settings_hash: Option<String>,
    object: Option<String>,
    seed: Option<u32>,
    ok: bool,
    errors: Vec<ReportError>,
    warnings: Vec<ReportWarning>,
    channels: Vec<ChannelSummary>,
    duration_ms: u64,
    backend_version: String,
    target_triple: String,
}

impl ReportBuilder {
    /// Creates a new report builder.
    ///
    /// # Example
    ///
    /// ```
    /// use motionmaker_spec::report::{ReportBuilder, ReportOperation};
    ///
    /// let report = ReportBuilder::new(
    ///     ReportOperation::RemoveMotion,
    ///     "a1b2c3d4...".to_string(),
    ///     "motionmaker-cli v0.1.0".to_string(),
    /// )
    /// .object("Cube")
    /// .duration_ms(3)
    /// .build();
    /// assert!(report.ok);
    /// ```
    pub fn new(operation: ReportOperation, scene_hash: String, backend_version: String) -> Self {
        Self {
            operation,
            scene_hash,
            settings_hash: None,
            object: None,
            seed: None,
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
            channels: Vec::new(),
            duration_ms: 0,
            backend_version,
            target_triple: format!("{}-{}", std::env::consts::ARCH, std::env::consts::OS),
        }
    }

    /// Sets the ok status.
    pub fn ok(mut self, ok: bool) -> Self {
        self.ok = ok;
        self
    }

    /// Sets the object name.
    pub fn object(mut self, name: impl Into<String>) -> Self {
        self.object = Some(name.into());
        self
    }

    /// Records the seed and settings hash used for generation.
    pub fn generation(mut self, seed: u32, settings_hash: impl Into<String>) -> Self {
        self.seed = Some(seed);
        self.settings_hash = Some(settings_hash.into());
        self
    }

    /// Adds an error (marks the report as failed).
    pub fn error(mut self, error: ReportError) -> Self {
        self.errors.push(error);
        self.ok = false;
        self
    }

    /// Adds a warning.
    pub fn warning(mut self, warning: ReportWarning) -> Self {
        self.warnings.push(warning);
        self
    }

    /// Copies every error and warning from a validation result.
    pub fn validation(mut self, result: &ValidationResult) -> Self {
        for err in &result.errors {
            self = self.error(ReportError::from_validation_error(err));
        }
        for warn in &result.warnings {
            self = self.warning(ReportWarning::from_validation_warning(warn));
        }
        self
    }

    /// Adds a channel summary.
    pub fn channel(mut self, summary: ChannelSummary) -> Self {
        self.channels.push(summary);
        self
    }

    /// Sets the execution duration.
    pub fn duration_ms(mut self, ms: u64) -> Self {
        self.duration_ms = ms;
        self
    }

    /// Builds the final report.
    pub fn build(self) -> Report {
        Report {
            report_version: REPORT_VERSION,
            operation: self.operation,
            scene_hash: self.scene_hash,
            settings_hash: self.settings_hash,
            object: self.object,
            seed: self.seed,
            ok: self.ok,
            errors: self.errors,
            warnings: self.warnings,
            channels: self.channels,
            duration_ms: self.duration_ms,
            backend_version: self.backend_version,
            target_triple: self.target_triple,
        }
    }
}

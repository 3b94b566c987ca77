//! Report types for add-motion, remove-motion, and validate runs.
//!
//! Reports are written next to the output scene as
//! `<object>.report.json` and record what the operator did, the hashes of
//! its inputs, and any errors or warnings.

mod builder;
mod channel;
mod error;

#[cfg(test)]
mod tests;

pub use builder::ReportBuilder;
pub use channel::ChannelSummary;
pub use error::{ReportError, ReportWarning};

use serde::{Deserialize, Serialize};

/// Report schema version.
pub const REPORT_VERSION: u32 = 1;

/// Operator a report was produced by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportOperation {
    AddMotion,
    RemoveMotion,
    Validate,
}

impl ReportOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportOperation::AddMotion => "add_motion",
            ReportOperation::RemoveMotion => "remove_motion",
            ReportOperation::Validate => "validate",
        }
    }
}

/// A complete report for one operator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Report schema version (always 1).
    pub report_version: u32,
    /// Which operator ran.
    pub operation: ReportOperation,
    /// Hex-encoded BLAKE3 hash of the canonicalized input scene.
    pub scene_hash: String,
    /// Hash of the effective settings (after overrides), if motion was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_hash: Option<String>,
    /// Object the operator acted on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Effective seed, if motion was generated.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u32>,
    /// Whether the operation succeeded without errors.
    pub ok: bool,
    pub errors: Vec<ReportError>,
    pub warnings: Vec<ReportWarning>,
    /// One entry per generated curve.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub channels: Vec<ChannelSummary>,
    /// Total execution time in milliseconds.
    pub duration_ms: u64,
    /// Tool identifier and version (e.g., "motionmaker-cli v0.1.0").
    pub backend_version: String,
    /// Architecture and OS the tool was built for.
    pub target_triple: String,
}

impl Report {
    /// Creates a new report builder.
    pub fn builder(
        operation: ReportOperation,
        scene_hash: String,
        backend_version: String,
    ) -> ReportBuilder {
        ReportBuilder::new(operation, scene_hash, backend_version)
    }

    /// Serializes the report to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Parses a report from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Standard report filename for an object.
    ///
    /// Object names may contain any character, so path separators, drive
    /// colons, control characters, and `..` runs are replaced with `_` to
    /// keep the report in the directory it is joined onto.
    ///
    /// ```
    /// use motionmaker_spec::report::Report;
    ///
    /// assert_eq!(Report::filename("Cube"), "Cube.report.json");
    /// assert_eq!(Report::filename("Rig/Head"), "Rig_Head.report.json");
    /// ```
    pub fn filename(object: &str) -> String {
        let stem: String = object
            .chars()
            .map(|c| match c {
                '/' | '\\' | ':' => '_',
                c if c.is_control() => '_',
                c => c,
            })
            .collect();
        format!("{}.report.json", stem.replace("..", "_"))
    }

    /// Total number of keys across all summarized channels.
    pub fn keyframe_count(&self) -> usize {
        self.channels.iter().map(|c| c.keyframe_count).sum()
    }
}

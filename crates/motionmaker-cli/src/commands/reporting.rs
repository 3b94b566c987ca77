use anyhow::{Context, Result};
use colored::Colorize;
use motionmaker_spec::{Report, ValidationResult};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Tool identifier recorded in reports, including the backend that
/// generated the curves.
pub(crate) fn cli_version() -> String {
    format!(
        "motionmaker-cli v{} ({})",
        env!("CARGO_PKG_VERSION"),
        motionmaker_backend::BACKEND_VERSION
    )
}

/// Report path next to `scene_path`: `<object>.report.json`, or
/// `<scene stem>.report.json` when no object was resolved.
pub(crate) fn report_path(scene_path: &str, object: Option<&str>) -> String {
    let path = Path::new(scene_path);
    let dir = path.parent().unwrap_or(Path::new("."));
    let stem = match object {
        Some(name) => name.to_string(),
        None => path
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "scene".to_string()),
    };
    dir.join(Report::filename(&stem))
        .to_string_lossy()
        .to_string()
}

pub(crate) fn write_report(report: &Report, path: &str) -> Result<()> {
    let json = report.to_json_pretty().context("Failed to serialize report")?;
    fs::write(path, json).with_context(|| format!("Failed to write report to: {}", path))?;
    debug!(path, ok = report.ok, "wrote report");
    Ok(())
}

/// Prints validation errors and warnings in the CLI's colored style.
pub(crate) fn print_validation_messages(result: &ValidationResult) {
    if !result.errors.is_empty() {
        println!("\n{}", "Errors:".red().bold());
        for error in &result.errors {
            let path_info = error
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "x".red(),
                error.code.to_string().red(),
                path_info.dimmed(),
                error.message
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", "Warnings:".yellow().bold());
        for warning in &result.warnings {
            let path_info = warning
                .path
                .as_ref()
                .map(|p| format!(" at {}", p))
                .unwrap_or_default();
            println!(
                "  {} [{}]{}: {}",
                "!".yellow(),
                warning.code.to_string().yellow(),
                path_info.dimmed(),
                warning.message
            );
        }
    }
}

/// Prints a JSON document to stdout.
pub(crate) fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value).context("Failed to serialize JSON output")?;
    println!("{}", json);
    Ok(())
}

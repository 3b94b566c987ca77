//! Validate command implementation
//!
//! Validates a scene file and writes a report.

use anyhow::{Context, Result};
use colored::Colorize;
use motionmaker_spec::{
    canonical_scene_hash, validate_for_add, validate_scene, ReportBuilder, ReportOperation, Scene,
    ValidationResult,
};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;

use super::json_output::{
    input_error_to_json, validation_to_json, ValidateOutput, ValidateResult,
};
use super::reporting;
use crate::input::{load_scene, LoadResult};

/// Run the validate command
///
/// # Arguments
/// * `scene_path` - Path to the scene file
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 if valid, 1 if invalid
pub fn run(scene_path: &str, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(scene_path)
    } else {
        run_human(scene_path)
    }
}

/// Validates the scene, including target checks for the active object.
fn validate(scene: &Scene) -> ValidationResult {
    match scene.active_object.as_deref() {
        Some(active) => validate_for_add(scene, active),
        None => validate_scene(scene),
    }
}

fn write_validation_report(
    scene_path: &str,
    scene: &Scene,
    scene_hash: &str,
    result: &ValidationResult,
    duration_ms: u64,
) -> Result<String> {
    let mut builder = ReportBuilder::new(
        ReportOperation::Validate,
        scene_hash.to_string(),
        reporting::cli_version(),
    )
    .validation(result)
    .duration_ms(duration_ms);
    if let Some(ref active) = scene.active_object {
        builder = builder.object(active);
    }

    let report_path = reporting::report_path(scene_path, None);
    reporting::write_report(&builder.build(), &report_path)?;
    Ok(report_path)
}

/// Run validate with human-readable (colored) output
fn run_human(scene_path: &str) -> Result<ExitCode> {
    let start = Instant::now();

    println!("{} {}", "Validating:".cyan().bold(), scene_path);

    let LoadResult { scene, source_hash } = load_scene(Path::new(scene_path))
        .with_context(|| format!("Failed to load scene file: {}", scene_path))?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let scene_hash = canonical_scene_hash(&scene).unwrap_or_else(|_| "unknown".to_string());
    let result = validate(&scene);
    let duration_ms = start.elapsed().as_millis() as u64;

    let report_path = write_validation_report(scene_path, &scene, &scene_hash, &result, duration_ms)?;

    reporting::print_validation_messages(&result);
    println!("\n{} {}", "Report written to:".dimmed(), report_path);

    if result.is_ok() {
        println!(
            "\n{} Scene is valid: {} object(s) ({}ms)",
            "SUCCESS".green().bold(),
            scene.objects.len(),
            duration_ms
        );
        Ok(ExitCode::SUCCESS)
    } else {
        println!(
            "\n{} Scene has {} error(s) ({}ms)",
            "FAILED".red().bold(),
            result.errors.len(),
            duration_ms
        );
        Ok(ExitCode::from(1))
    }
}

/// Run validate with machine-readable JSON output
fn run_json(scene_path: &str) -> Result<ExitCode> {
    let start = Instant::now();

    let LoadResult { scene, source_hash } = match load_scene(Path::new(scene_path)) {
        Ok(result) => result,
        Err(e) => {
            let error = input_error_to_json(&e, Some(scene_path));
            let output = ValidateOutput {
                success: false,
                errors: vec![error],
                warnings: Vec::new(),
                result: None,
                scene_hash: None,
                source_hash: None,
            };
            reporting::print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let scene_hash = canonical_scene_hash(&scene).unwrap_or_else(|_| "unknown".to_string());
    let result = validate(&scene);
    let duration_ms = start.elapsed().as_millis() as u64;

    let report_path = write_validation_report(scene_path, &scene, &scene_hash, &result, duration_ms)?;

    let (errors, warnings) = validation_to_json(&result);
    let output = ValidateOutput {
        success: result.is_ok(),
        errors,
        warnings,
        result: Some(ValidateResult {
            object_count: scene.objects.len(),
            active_object: scene.active_object.clone(),
            report_path,
            duration_ms,
        }),
        scene_hash: Some(scene_hash),
        source_hash: Some(source_hash),
    };
    reporting::print_json(&output)?;

    if result.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}

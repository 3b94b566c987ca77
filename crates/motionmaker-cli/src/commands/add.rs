//! Add command implementation
//!
//! Adds subtle motion to one object, writes the updated scene, and writes a
//! report next to it.

use anyhow::{Context, Result};
use colored::Colorize;
use motionmaker_backend::{add_motion_to_scene, AddMotionOutcome, AnimationHost, MotionError};
use motionmaker_spec::{
    canonical_scene_hash, canonical_settings_hash, validate_for_add, validate_scene, BackendError,
    Channel, ChannelSummary, ReportBuilder, ReportError, ReportOperation, Scene, SettingsOverrides,
    ValidationResult,
};
use std::path::Path;
use std::process::ExitCode;
use std::time::Instant;
use tracing::info;

use super::json_output::{
    input_error_to_json, validation_to_json, JsonError, OperatorOutput, OperatorResult,
};
use super::reporting;
use crate::input::{load_scene, save_scene, LoadResult};

/// Options for one `add` run.
#[derive(Debug, Clone, Default)]
pub struct AddOptions<'a> {
    /// Object to animate; the active object if None.
    pub object: Option<&'a str>,
    /// Seed override; the scene seed if None.
    pub seed: Option<u32>,
    /// Where to write the updated scene; the input path if None.
    pub out_path: Option<&'a str>,
    /// Per-run settings overrides.
    pub overrides: SettingsOverrides,
}

enum AddStatus {
    Added(AddMotionOutcome),
    Invalid,
    Failed(MotionError),
}

struct AddRun {
    scene_hash: String,
    object: Option<String>,
    seed: u32,
    out_path: String,
    validation: ValidationResult,
    status: AddStatus,
    report_path: String,
    duration_ms: u64,
}

impl AddRun {
    fn exit_code(&self) -> ExitCode {
        match self.status {
            AddStatus::Added(_) => ExitCode::SUCCESS,
            AddStatus::Invalid => ExitCode::from(1),
            AddStatus::Failed(_) => ExitCode::from(2),
        }
    }
}

/// Run the add command
///
/// # Returns
/// Exit code: 0 success, 1 invalid scene or settings, 2 operator failure
pub fn run(scene_path: &str, options: &AddOptions<'_>, json_output: bool) -> Result<ExitCode> {
    if json_output {
        run_json(scene_path, options)
    } else {
        run_human(scene_path, options)
    }
}

fn execute(scene_path: &str, mut scene: Scene, options: &AddOptions<'_>) -> Result<AddRun> {
    let start = Instant::now();

    let scene_hash = canonical_scene_hash(&scene).unwrap_or_else(|_| "unknown".to_string());
    let settings = scene.settings.with_overrides(&options.overrides);
    let settings_hash =
        canonical_settings_hash(&settings).unwrap_or_else(|_| "unknown".to_string());
    let seed = options.seed.unwrap_or(scene.seed);
    let out_path = options.out_path.unwrap_or(scene_path).to_string();

    // Overrides are persisted like panel edits
    scene.settings = settings.clone();

    let target = scene.target_name(options.object).map(str::to_string);
    let validation = match &target {
        Ok(name) => validate_for_add(&scene, name),
        Err(_) => validate_scene(&scene),
    };

    let status = if !validation.is_ok() {
        AddStatus::Invalid
    } else {
        match &target {
            Err(e) => AddStatus::Failed(MotionError::from(e.clone())),
            Ok(name) => match add_motion_to_scene(&mut scene, Some(name), &settings, seed) {
                Ok(outcome) => {
                    save_scene(Path::new(&out_path), &scene)
                        .with_context(|| format!("Failed to write scene: {}", out_path))?;
                    info!(
                        object = %outcome.object,
                        seed,
                        keyframes = outcome.clip.keyframe_count(),
                        path = %out_path,
                        "added motion"
                    );
                    AddStatus::Added(outcome)
                }
                Err(e) => AddStatus::Failed(e),
            },
        }
    };

    let object = target.ok();
    let report_path = reporting::report_path(&out_path, object.as_deref());
    let duration_ms = start.elapsed().as_millis() as u64;

    let mut builder = ReportBuilder::new(
        ReportOperation::AddMotion,
        scene_hash.clone(),
        reporting::cli_version(),
    )
    .generation(seed, settings_hash)
    .validation(&validation)
    .duration_ms(duration_ms);
    if let Some(ref name) = object {
        builder = builder.object(name);
    }

    match &status {
        AddStatus::Added(outcome) => {
            if let Some(obj) = scene.object(&outcome.object) {
                for channel in Channel::ALL {
                    if let Some(summary) = obj.fcurve(channel).and_then(ChannelSummary::from_fcurve)
                    {
                        builder = builder.channel(summary);
                    }
                }
            }
        }
        AddStatus::Failed(e) => {
            builder = builder.error(ReportError::new(e.code(), e.message()));
        }
        AddStatus::Invalid => {}
    }

    let report = builder.build();
    reporting::write_report(&report, &report_path)?;

    Ok(AddRun {
        scene_hash,
        object,
        seed,
        out_path,
        validation,
        status,
        report_path,
        duration_ms,
    })
}

/// Run add with human-readable (colored) output
fn run_human(scene_path: &str, options: &AddOptions<'_>) -> Result<ExitCode> {
    println!("{} {}", "Adding motion:".cyan().bold(), scene_path);

    let LoadResult { scene, source_hash } = load_scene(Path::new(scene_path))
        .with_context(|| format!("Failed to load scene file: {}", scene_path))?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let run = execute(scene_path, scene, options)?;

    if let Some(ref name) = run.object {
        println!("{} {}", "Object:".dimmed(), name);
    }
    println!("{} {}", "Seed:".dimmed(), run.seed);

    reporting::print_validation_messages(&run.validation);

    match &run.status {
        AddStatus::Added(outcome) => {
            if outcome.cleared_existing {
                println!(
                    "\n{} replaced existing animation on '{}'",
                    "!".yellow(),
                    outcome.object
                );
            }
            println!(
                "\n{} Added {} keyframe(s) to '{}' ({}ms)",
                "SUCCESS".green().bold(),
                outcome.clip.keyframe_count(),
                outcome.object,
                run.duration_ms
            );
            println!("{} {}", "Scene written to:".dimmed(), run.out_path);
        }
        AddStatus::Invalid => {
            println!(
                "\n{} Scene has {} error(s) ({}ms)",
                "FAILED".red().bold(),
                run.validation.errors.len(),
                run.duration_ms
            );
        }
        AddStatus::Failed(e) => {
            println!("\n{} {}", "ADD MOTION FAILED".red().bold(), e);
        }
    }
    println!("{} {}", "Report written to:".dimmed(), run.report_path);

    Ok(run.exit_code())
}

/// Run add with machine-readable JSON output
fn run_json(scene_path: &str, options: &AddOptions<'_>) -> Result<ExitCode> {
    let LoadResult { scene, source_hash } = match load_scene(Path::new(scene_path)) {
        Ok(result) => result,
        Err(e) => {
            let error = input_error_to_json(&e, Some(scene_path));
            let output = OperatorOutput::failure(vec![error], vec![], None, None, None);
            reporting::print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let run = execute(scene_path, scene, options)?;
    let (mut errors, warnings) = validation_to_json(&run.validation);

    let output = match &run.status {
        AddStatus::Added(outcome) => {
            let result = OperatorResult {
                operation: ReportOperation::AddMotion.as_str().to_string(),
                object: outcome.object.clone(),
                scene_path: run.out_path.clone(),
                seed: Some(run.seed),
                keyframe_count: Some(outcome.clip.keyframe_count()),
                cleared_existing: Some(outcome.cleared_existing),
                removed: None,
                duration_ms: run.duration_ms,
            };
            OperatorOutput::success(
                result,
                run.scene_hash.clone(),
                source_hash,
                warnings,
                run.report_path.clone(),
            )
        }
        AddStatus::Invalid => OperatorOutput::failure(
            errors,
            warnings,
            Some(run.scene_hash.clone()),
            Some(source_hash),
            Some(run.report_path.clone()),
        ),
        AddStatus::Failed(e) => {
            errors.push(JsonError::new(e.code(), e.message()));
            OperatorOutput::failure(
                errors,
                warnings,
                Some(run.scene_hash.clone()),
                Some(source_hash),
                Some(run.report_path.clone()),
            )
        }
    };

    reporting::print_json(&output)?;
    Ok(run.exit_code())
}

//! Remove command implementation
//!
//! Removes motion from one object and restores its stored initial transform.

use anyhow::{Context, Result};
use colored::Colorize;
use motionmaker_backend::{remove_motion_from_scene, MotionError, RemoveMotionOutcome};
use motionmaker_spec::{
    canonical_scene_hash, validate_document, BackendError, ReportBuilder, ReportError,
    ReportOperation, Scene, ValidationResult,
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

enum RemoveStatus {
    Done(RemoveMotionOutcome),
    Invalid,
    Failed(MotionError),
}

struct RemoveRun {
    scene_hash: String,
    out_path: String,
    validation: ValidationResult,
    status: RemoveStatus,
    report_path: String,
    duration_ms: u64,
}

impl RemoveRun {
    fn exit_code(&self) -> ExitCode {
        match self.status {
            RemoveStatus::Done(_) => ExitCode::SUCCESS,
            RemoveStatus::Invalid => ExitCode::from(1),
            RemoveStatus::Failed(_) => ExitCode::from(2),
        }
    }
}

/// Run the remove command
///
/// # Arguments
/// * `scene_path` - Path to the scene file
/// * `object` - Object to clear; the active object if None
/// * `out_path` - Where to write the updated scene; the input path if None
/// * `json_output` - Whether to output machine-readable JSON diagnostics
///
/// # Returns
/// Exit code: 0 success (including nothing to remove), 1 invalid scene,
/// 2 operator failure
pub fn run(
    scene_path: &str,
    object: Option<&str>,
    out_path: Option<&str>,
    json_output: bool,
) -> Result<ExitCode> {
    if json_output {
        run_json(scene_path, object, out_path)
    } else {
        run_human(scene_path, object, out_path)
    }
}

fn execute(
    scene_path: &str,
    mut scene: Scene,
    object: Option<&str>,
    out_path: Option<&str>,
) -> Result<RemoveRun> {
    let start = Instant::now();

    let scene_hash = canonical_scene_hash(&scene).unwrap_or_else(|_| "unknown".to_string());
    let out_path = out_path.unwrap_or(scene_path).to_string();
    // Settings are not read when removing motion
    let validation = validate_document(&scene);

    let status = if !validation.is_ok() {
        RemoveStatus::Invalid
    } else {
        match remove_motion_from_scene(&mut scene, object) {
            Ok(outcome) => {
                save_scene(Path::new(&out_path), &scene)
                    .with_context(|| format!("Failed to write scene: {}", out_path))?;
                info!(
                    object = outcome.object(),
                    removed = outcome.removed(),
                    path = %out_path,
                    "removed motion"
                );
                RemoveStatus::Done(outcome)
            }
            Err(e) => RemoveStatus::Failed(e),
        }
    };

    let target = match &status {
        RemoveStatus::Done(outcome) => Some(outcome.object().to_string()),
        _ => scene.target_name(object).ok().map(str::to_string),
    };
    let report_path = reporting::report_path(&out_path, target.as_deref());
    let duration_ms = start.elapsed().as_millis() as u64;

    let mut builder = ReportBuilder::new(
        ReportOperation::RemoveMotion,
        scene_hash.clone(),
        reporting::cli_version(),
    )
    .validation(&validation)
    .duration_ms(duration_ms);
    if let Some(ref name) = target {
        builder = builder.object(name);
    }
    if let RemoveStatus::Failed(e) = &status {
        builder = builder.error(ReportError::new(e.code(), e.message()));
    }

    let report = builder.build();
    reporting::write_report(&report, &report_path)?;

    Ok(RemoveRun {
        scene_hash,
        out_path,
        validation,
        status,
        report_path,
        duration_ms,
    })
}

fn format_vector(v: &[f64; 3]) -> String {
    format!("({:.4}, {:.4}, {:.4})", v[0], v[1], v[2])
}

/// Run remove with human-readable (colored) output
fn run_human(scene_path: &str, object: Option<&str>, out_path: Option<&str>) -> Result<ExitCode> {
    println!("{} {}", "Removing motion:".cyan().bold(), scene_path);

    let LoadResult { scene, source_hash } = load_scene(Path::new(scene_path))
        .with_context(|| format!("Failed to load scene file: {}", scene_path))?;
    println!("{} {}", "Source:".dimmed(), &source_hash[..16]);

    let run = execute(scene_path, scene, object, out_path)?;

    reporting::print_validation_messages(&run.validation);

    match &run.status {
        RemoveStatus::Done(RemoveMotionOutcome::Removed {
            object,
            restored_location,
            restored_rotation,
        }) => {
            if let Some(location) = restored_location {
                println!("{} {}", "Location:".dimmed(), format_vector(location));
            }
            if let Some(rotation) = restored_rotation {
                println!("{} {}", "Rotation:".dimmed(), format_vector(rotation));
            }
            if restored_location.is_none() && restored_rotation.is_none() {
                println!(
                    "  {} no stored initial transform; '{}' keeps its current transform",
                    "!".yellow(),
                    object
                );
            }
            println!(
                "\n{} Removed motion from '{}' ({}ms)",
                "SUCCESS".green().bold(),
                object,
                run.duration_ms
            );
            println!("{} {}", "Scene written to:".dimmed(), run.out_path);
        }
        RemoveStatus::Done(RemoveMotionOutcome::NothingToRemove { object }) => {
            println!(
                "\n{} '{}' has no animation data; nothing to remove",
                "SUCCESS".green().bold(),
                object
            );
        }
        RemoveStatus::Invalid => {
            println!(
                "\n{} Scene has {} error(s) ({}ms)",
                "FAILED".red().bold(),
                run.validation.errors.len(),
                run.duration_ms
            );
        }
        RemoveStatus::Failed(e) => {
            println!("\n{} {}", "REMOVE MOTION FAILED".red().bold(), e);
        }
    }
    println!("{} {}", "Report written to:".dimmed(), run.report_path);

    Ok(run.exit_code())
}

/// Run remove with machine-readable JSON output
fn run_json(scene_path: &str, object: Option<&str>, out_path: Option<&str>) -> Result<ExitCode> {
    let LoadResult { scene, source_hash } = match load_scene(Path::new(scene_path)) {
        Ok(result) => result,
        Err(e) => {
            let error = input_error_to_json(&e, Some(scene_path));
            let output = OperatorOutput::failure(vec![error], vec![], None, None, None);
            reporting::print_json(&output)?;
            return Ok(ExitCode::from(1));
        }
    };

    let run = execute(scene_path, scene, object, out_path)?;
    let (mut errors, warnings) = validation_to_json(&run.validation);

    let output = match &run.status {
        RemoveStatus::Done(outcome) => {
            let result = OperatorResult {
                operation: ReportOperation::RemoveMotion.as_str().to_string(),
                object: outcome.object().to_string(),
                scene_path: run.out_path.clone(),
                seed: None,
                keyframe_count: None,
                cleared_existing: None,
                removed: Some(outcome.removed()),
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
        RemoveStatus::Invalid => OperatorOutput::failure(
            errors,
            warnings,
            Some(run.scene_hash.clone()),
            Some(source_hash),
            Some(run.report_path.clone()),
        ),
        RemoveStatus::Failed(e) => {
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::add::{self, AddOptions};
    use motionmaker_spec::{Report, SceneObject};

    fn write_scene(dir: &tempfile::TempDir, scene: &Scene) -> String {
        let path = dir.path().join("scene.json");
        save_scene(&path, scene).unwrap();
        path.to_string_lossy().to_string()
    }

    #[test]
    fn remove_restores_after_add() {
        let tmp = tempfile::tempdir().unwrap();
        let scene = Scene::new()
            .with_object(SceneObject::new("Cube").at([1.0, 2.0, 3.0]))
            .with_active("Cube");
        let scene_path = write_scene(&tmp, &scene);

        let code = add::run(&scene_path, &AddOptions::default(), true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let code = run(&scene_path, None, None, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let restored = load_scene(Path::new(&scene_path)).unwrap().scene;
        let cube = restored.object("Cube").unwrap();
        assert!(!cube.has_animation_data());
        assert_eq!(cube.location, [1.0, 2.0, 3.0]);

        let report_path = reporting::report_path(&scene_path, Some("Cube"));
        let report = Report::from_json(&std::fs::read_to_string(report_path).unwrap()).unwrap();
        assert_eq!(report.operation, ReportOperation::RemoveMotion);
        assert!(report.ok);
    }

    #[test]
    fn remove_ignores_out_of_range_settings() {
        let tmp = tempfile::tempdir().unwrap();
        let scene = Scene::new()
            .with_object(SceneObject::new("Cube").at([1.0, 2.0, 3.0]))
            .with_active("Cube");
        let scene_path = write_scene(&tmp, &scene);
        add::run(&scene_path, &AddOptions::default(), true).unwrap();

        let mut animated = load_scene(Path::new(&scene_path)).unwrap().scene;
        animated.settings.translation_speed = 0.0;
        save_scene(Path::new(&scene_path), &animated).unwrap();

        let code = run(&scene_path, None, None, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let restored = load_scene(Path::new(&scene_path)).unwrap().scene;
        let cube = restored.object("Cube").unwrap();
        assert!(!cube.has_animation_data());
        assert_eq!(cube.location, [1.0, 2.0, 3.0]);
        assert_eq!(restored.settings.translation_speed, 0.0);
    }

    #[test]
    fn remove_on_unanimated_object_is_success() {
        let tmp = tempfile::tempdir().unwrap();
        let scene = Scene::new().with_object(SceneObject::new("Lamp"));
        let scene_path = write_scene(&tmp, &scene);

        let code = run(&scene_path, Some("Lamp"), None, true).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);
    }

    #[test]
    fn remove_unknown_object_is_operator_failure() {
        let tmp = tempfile::tempdir().unwrap();
        let scene = Scene::new().with_object(SceneObject::new("Lamp"));
        let scene_path = write_scene(&tmp, &scene);

        let code = run(&scene_path, Some("Camera"), None, true).unwrap();
        assert_eq!(code, ExitCode::from(2));

        let report_path = reporting::report_path(&scene_path, None);
        let report = Report::from_json(&std::fs::read_to_string(report_path).unwrap()).unwrap();
        assert!(report.errors.iter().any(|e| e.code == "MOTION_001"));
    }
}

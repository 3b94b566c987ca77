//! Init command implementation
//!
//! Writes a starter scene with one unanimated object at the origin.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use motionmaker_spec::{validate_scene, Scene, SceneObject};
use std::path::Path;
use std::process::ExitCode;

use crate::input::save_scene;

/// Builds the starter scene.
pub fn starter_scene(object: &str) -> Scene {
    Scene::new()
        .with_object(SceneObject::new(object))
        .with_active(object)
}

/// Run the init command
///
/// # Arguments
/// * `out_path` - Path for the new scene file
/// * `object` - Name of the object to create
/// * `force` - Overwrite an existing file
pub fn run(out_path: &str, object: &str, force: bool) -> Result<ExitCode> {
    let path = Path::new(out_path);
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", out_path);
    }

    let scene = starter_scene(object);
    let validation = validate_scene(&scene);
    if let Some(err) = validation.errors.first() {
        bail!("cannot create scene: {}", err);
    }

    save_scene(path, &scene).with_context(|| format!("Failed to write scene: {}", out_path))?;

    println!(
        "{} Created {} with object '{}'",
        "SUCCESS".green().bold(),
        out_path,
        object
    );
    Ok(ExitCode::SUCCESS)
}

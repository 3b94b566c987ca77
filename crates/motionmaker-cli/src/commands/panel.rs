//! Panel command implementation
//!
//! Prints the motion settings panel: every setting grouped under its panel
//! heading, with the scene's current value, default, and bounds.

use anyhow::{Context, Result};
use colored::Colorize;
use motionmaker_spec::{MotionSettings, PropertyDescriptor, PropertyGroup};
use std::path::Path;
use std::process::ExitCode;

use super::json_output::{PanelGroup, PanelOutput, PanelProperty};
use super::reporting;
use crate::input::load_scene;

/// Run the panel command
///
/// Without a scene the defaults are shown.
pub fn run(scene_path: Option<&str>, json_output: bool) -> Result<ExitCode> {
    let (settings, active_object) = match scene_path {
        Some(path) => {
            let loaded = load_scene(Path::new(path))
                .with_context(|| format!("Failed to load scene file: {}", path))?;
            (loaded.scene.settings, loaded.scene.active_object)
        }
        None => (MotionSettings::default(), None),
    };

    let output = build_panel(&settings, scene_path, active_object);

    if json_output {
        reporting::print_json(&output)?;
    } else {
        print_panel(&output);
    }
    Ok(ExitCode::SUCCESS)
}

/// Builds the panel layout for a settings block.
pub fn build_panel(
    settings: &MotionSettings,
    scene_path: Option<&str>,
    active_object: Option<String>,
) -> PanelOutput {
    let groups = PropertyGroup::all()
        .iter()
        .map(|group| PanelGroup {
            heading: group.heading().to_string(),
            properties: MotionSettings::properties()
                .iter()
                .filter(|p| p.group == *group)
                .map(|p| panel_property(p, settings))
                .collect(),
        })
        .collect();

    PanelOutput {
        scene: scene_path.map(|s| s.to_string()),
        active_object,
        groups,
    }
}

fn panel_property(prop: &PropertyDescriptor, settings: &MotionSettings) -> PanelProperty {
    PanelProperty {
        id: prop.id.to_string(),
        label: prop.label.to_string(),
        value: settings.get(prop.id).unwrap_or(prop.default),
        default: prop.default,
        bounds: prop.bounds(),
        description: prop.description.to_string(),
    }
}

fn print_panel(panel: &PanelOutput) {
    println!("{}", "Motion Maker".cyan().bold());
    if let Some(ref scene) = panel.scene {
        println!("{} {}", "Scene:".dimmed(), scene);
    }
    if let Some(ref active) = panel.active_object {
        println!("{} {}", "Active object:".dimmed(), active);
    }

    for group in &panel.groups {
        println!("\n{}", group.heading.bold());
        for prop in &group.properties {
            let value = format!("{}", prop.value);
            let value = if prop.value == prop.default {
                value.normal()
            } else {
                value.green()
            };
            println!(
                "  {:<20} {:>10}  {}",
                prop.label,
                value,
                prop.bounds.dimmed()
            );
        }
    }

    println!(
        "\n{} {}",
        "Buttons:".dimmed(),
        "motionmaker add | motionmaker remove"
    );
}

//! Scene validation logic.

pub mod common;


use std::collections::HashSet;

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::scene::{RotationMode, Scene, SceneObject, SPEC_VERSION};
use crate::settings::MotionSettings;

pub use common::{validate_at_least, validate_property, validate_range, CommonValidationError};

/// Longest object name the host accepts.
pub const MAX_OBJECT_NAME_LEN: usize = 63;

/// Validates a scene document and returns a validation result.
///
/// Checks the document version, object names and transforms, the active
/// object reference, and the motion settings.
///
/// # Example
/// ```
/// use motionmaker_spec::scene::{Scene, SceneObject};
/// use motionmaker_spec::validation::validate_scene;
///
/// let scene = Scene::new()
///     .with_object(SceneObject::new("Cube"))
///     .with_active("Cube");
///
/// let result = validate_scene(&scene);
/// assert!(result.is_ok());
/// ```
pub fn validate_scene(scene: &Scene) -> ValidationResult {
    let mut result = validate_document(scene);
    result.merge(validate_settings(&scene.settings));
    result
}

/// Validates the document structure only: version, objects, and the active
/// object reference. Motion settings are not checked.
///
/// Removing motion never reads the settings, so it is gated on this rather
/// than on [`validate_scene`].
pub fn validate_document(scene: &Scene) -> ValidationResult {
    let mut result = ValidationResult::default();

    validate_spec_version(scene, &mut result);
    validate_objects(scene, &mut result);
    validate_active_object(scene, &mut result);

    result
}

/// Validates a scene for adding motion to `target`.
///
/// Runs [`validate_scene`] and adds warnings specific to the target object.
/// A missing target is reported by the operator, not here.
pub fn validate_for_add(scene: &Scene, target: &str) -> ValidationResult {
    let mut result = validate_scene(scene);
    if let Some((index, object)) = scene
        .objects
        .iter()
        .enumerate()
        .find(|(_, o)| o.name == target)
    {
        check_target_warnings(object, index, &mut result);
    }
    result
}

/// Validates motion settings against their panel bounds.
pub fn validate_settings(settings: &MotionSettings) -> ValidationResult {
    let mut result = ValidationResult::default();

    for prop in MotionSettings::properties() {
        let Some(value) = settings.get(prop.id) else {
            continue;
        };
        if let Err(e) = validate_property(prop, value) {
            result.add_error(ValidationError::with_path(
                ErrorCode::SettingOutOfRange,
                e.message,
                format!("settings.{}", prop.id),
            ));
        }
    }

    if settings.noise_customized() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::UnusedNoiseSettings,
            "noise_factor and noise_size are stored but not applied to generated motion",
            "settings",
        ));
    }

    result
}

fn validate_spec_version(scene: &Scene, result: &mut ValidationResult) {
    if scene.spec_version != SPEC_VERSION {
        result.add_error(ValidationError::with_path(
            ErrorCode::UnsupportedSpecVersion,
            format!(
                "spec_version must be {}, got {}",
                SPEC_VERSION, scene.spec_version
            ),
            "spec_version",
        ));
    }
}

fn validate_objects(scene: &Scene, result: &mut ValidationResult) {
    let mut seen: HashSet<&str> = HashSet::new();

    for (i, object) in scene.objects.iter().enumerate() {
        let name_len = object.name.chars().count();
        if name_len == 0 || name_len > MAX_OBJECT_NAME_LEN {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidObjectName,
                format!(
                    "object name must be 1-{} characters, got {}",
                    MAX_OBJECT_NAME_LEN, name_len
                ),
                format!("objects[{}].name", i),
            ));
        }

        if !seen.insert(&object.name) {
            result.add_error(ValidationError::with_path(
                ErrorCode::DuplicateObjectName,
                format!("duplicate object name: '{}'", object.name),
                format!("objects[{}].name", i),
            ));
        }

        if !object.transform().is_finite() {
            result.add_error(ValidationError::with_path(
                ErrorCode::NonFiniteTransform,
                format!("object '{}' has a non-finite location or rotation", object.name),
                format!("objects[{}]", i),
            ));
        }
    }
}

fn validate_active_object(scene: &Scene, result: &mut ValidationResult) {
    if let Some(ref active) = scene.active_object {
        if scene.object(active).is_none() {
            result.add_error(ValidationError::with_path(
                ErrorCode::UnknownActiveObject,
                format!("active_object '{}' is not in the scene", active),
                "active_object",
            ));
        }
    }
}

fn check_target_warnings(object: &SceneObject, index: usize, result: &mut ValidationResult) {
    if object.rotation_mode != RotationMode::Xyz {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::NonXyzRotationMode,
            format!(
                "object '{}' uses {} rotation; rotation motion is keyed on rotation_euler and assumes XYZ Euler",
                object.name,
                object.rotation_mode.as_str()
            ),
            format!("objects[{}].rotation_mode", index),
        ));
    }

    if object.has_animation_data() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ExistingAnimationData,
            format!(
                "object '{}' already has animation data; it will be cleared",
                object.name
            ),
            format!("objects[{}].animation_data", index),
        ));
    }
}

//! Scene document types.
//!
//! A scene is the JSON stand-in for the host application's data: a flat list
//! of objects (with transforms, custom properties, and animation data), the
//! name of the active object, and the scene-level motion settings.

mod animation;
mod object;

pub use animation::*;
pub use object::*;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::settings::MotionSettings;

/// Current scene document version.
pub const SPEC_VERSION: u32 = 1;

/// Failure to pick the object an operator should act on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    /// No object was named and the scene has no active object.
    #[error("no object given and the scene has no active object")]
    NoActiveObject,

    /// The named object does not exist.
    #[error("object '{0}' not found in scene")]
    ObjectNotFound(String),
}

/// A scene document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Scene {
    /// Schema version; must be 1.
    pub spec_version: u32,

    /// Base seed for motion generation.
    #[serde(default)]
    pub seed: u32,

    /// Object operators act on when none is named.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active_object: Option<String>,

    /// Motion parameters shared by every object in the scene.
    #[serde(default)]
    pub settings: MotionSettings,

    #[serde(default)]
    pub objects: Vec<SceneObject>,
}

impl Default for Scene {
    fn default() -> Self {
        Self {
            spec_version: SPEC_VERSION,
            seed: 0,
            active_object: None,
            settings: MotionSettings::default(),
            objects: Vec::new(),
        }
    }
}

impl Scene {
    /// Creates an empty scene with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object and returns the scene.
    pub fn with_object(mut self, object: SceneObject) -> Self {
        self.objects.push(object);
        self
    }

    /// Sets the active object name.
    pub fn with_active(mut self, name: impl Into<String>) -> Self {
        self.active_object = Some(name.into());
        self
    }

    /// Sets the seed.
    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Replaces the settings.
    pub fn with_settings(mut self, settings: MotionSettings) -> Self {
        self.settings = settings;
        self
    }

    /// Parses a scene from JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serializes the scene to pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Serializes the scene to a JSON value.
    pub fn to_value(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Looks up an object by name.
    pub fn object(&self, name: &str) -> Option<&SceneObject> {
        self.objects.iter().find(|o| o.name == name)
    }

    /// Looks up an object by name for mutation.
    pub fn object_mut(&mut self, name: &str) -> Option<&mut SceneObject> {
        self.objects.iter_mut().find(|o| o.name == name)
    }

    /// Name of the object an operator should act on: `name` if given,
    /// otherwise the active object.
    pub fn target_name<'a>(&'a self, name: Option<&'a str>) -> Result<&'a str, TargetError> {
        let name = name
            .or(self.active_object.as_deref())
            .ok_or(TargetError::NoActiveObject)?;
        if self.object(name).is_none() {
            return Err(TargetError::ObjectNotFound(name.to_string()));
        }
        Ok(name)
    }

    /// Resolves the target object for mutation.
    pub fn resolve_target(&mut self, name: Option<&str>) -> Result<&mut SceneObject, TargetError> {
        let name = self.target_name(name)?.to_string();
        self.object_mut(&name)
            .ok_or(TargetError::ObjectNotFound(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn two_object_scene() -> Scene {
        Scene::new()
            .with_object(SceneObject::new("Cube"))
            .with_object(SceneObject::new("Lamp").at([0.0, 0.0, 3.0]))
            .with_active("Cube")
    }

    #[test]
    fn test_resolve_target_prefers_explicit_name() {
        let mut scene = two_object_scene();
        let obj = scene.resolve_target(Some("Lamp")).unwrap();
        assert_eq!(obj.name, "Lamp");
    }

    #[test]
    fn test_resolve_target_falls_back_to_active() {
        let mut scene = two_object_scene();
        let obj = scene.resolve_target(None).unwrap();
        assert_eq!(obj.name, "Cube");
    }

    #[test]
    fn test_resolve_target_errors() {
        let mut scene = two_object_scene();
        assert_eq!(
            scene.resolve_target(Some("Camera")).unwrap_err(),
            TargetError::ObjectNotFound("Camera".to_string())
        );

        scene.active_object = None;
        assert_eq!(
            scene.resolve_target(None).unwrap_err(),
            TargetError::NoActiveObject
        );
    }

    #[test]
    fn test_minimal_json() {
        let scene = Scene::from_json(r#"{"spec_version": 1}"#).unwrap();
        assert_eq!(scene.seed, 0);
        assert!(scene.objects.is_empty());
        assert_eq!(scene.settings, MotionSettings::default());
    }

    #[test]
    fn test_json_round_trip() {
        let mut scene = two_object_scene().with_seed(7);
        scene.settings.total_frames = 120;
        let json = scene.to_json_pretty().unwrap();
        let parsed = Scene::from_json(&json).unwrap();
        assert_eq!(parsed, scene);
    }
}

//! Motion Maker Scene Library
//!
//! This crate provides the data model the motion operators work on: a JSON
//! scene document standing in for the host application's objects, their
//! transforms and animation data, and the scene-level motion settings.
//!
//! # Example
//!
//! ```
//! use motionmaker_spec::scene::{Scene, SceneObject};
//! use motionmaker_spec::validation::validate_scene;
//! use motionmaker_spec::hash::canonical_scene_hash;
//!
//! let scene = Scene::new()
//!     .with_object(SceneObject::new("Cube").at([0.0, 0.0, 1.0]))
//!     .with_active("Cube")
//!     .with_seed(42);
//!
//! let result = validate_scene(&scene);
//! assert!(result.is_ok());
//!
//! let hash = canonical_scene_hash(&scene).unwrap();
//! assert_eq!(hash.len(), 64);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`scene`]: Scene, object, and animation data types
//! - [`settings`]: Motion settings and their panel descriptors
//! - [`report`]: Report types and builder for operator runs
//! - [`validation`]: Scene and settings validation
//! - [`hash`]: Canonical hashing and seed derivation

pub mod error;
pub mod hash;
pub mod report;
pub mod scene;
pub mod settings;
pub mod validation;

// Re-export commonly used types at the crate root
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use hash::{
    canonical_scene_hash, canonical_settings_hash, canonical_value_hash, derive_channel_seed,
};
pub use report::{
    ChannelSummary, Report, ReportBuilder, ReportError, ReportOperation, ReportWarning,
    REPORT_VERSION,
};
pub use scene::{
    Action, AnimationData, Channel, ChannelPath, CurveModifier, CycleMode, FCurve, Keyframe,
    RotationMode, Scene, SceneObject, TargetError, Transform, SPEC_VERSION,
};
pub use settings::{MotionSettings, PropertyDescriptor, PropertyGroup, SettingsOverrides};
pub use validation::{validate_document, validate_for_add, validate_scene, validate_settings};

#[cfg(test)]
mod integration_tests {
    use super::*;

    /// A scene as a user would write it by hand.
    #[test]
    fn test_parse_hand_written_scene() {
        let json = r#"{
            "spec_version": 1,
            "seed": 1234,
            "active_object": "Cube",
            "settings": {
                "translation_range": 0.2,
                "rotation_speed": 2.0,
                "total_frames": 120
            },
            "objects": [
                {
                    "name": "Cube",
                    "location": [0.0, 0.0, 1.0],
                    "rotation_euler": [0.0, 0.0, 0.785]
                },
                {
                    "name": "Lamp",
                    "location": [4.0, 1.0, 6.0],
                    "rotation_mode": "QUATERNION"
                }
            ]
        }"#;

        let scene = Scene::from_json(json).expect("should parse");

        assert_eq!(scene.seed, 1234);
        assert_eq!(scene.settings.translation_range, 0.2);
        assert_eq!(scene.settings.rotation_stride(), 5);
        assert_eq!(scene.settings.translation_stride(), 10);
        assert_eq!(scene.objects.len(), 2);
        assert_eq!(scene.objects[1].rotation_mode, RotationMode::Quaternion);

        let result = validate_scene(&scene);
        assert!(result.is_ok(), "errors: {:?}", result.errors);

        let result = validate_for_add(&scene, "Lamp");
        assert!(result.is_ok());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].code, WarningCode::NonXyzRotationMode);
    }

    #[test]
    fn test_unknown_scene_field_rejected() {
        let json = r#"{"spec_version": 1, "frames": 10}"#;
        assert!(Scene::from_json(json).is_err());
    }
}

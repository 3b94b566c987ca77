//! Scene objects and their transforms.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::animation::{AnimationData, ChannelPath};

/// Custom property holding the location captured before motion was added.
pub const INITIAL_LOCATION_KEY: &str = "initial_location";

/// Custom property holding the rotation captured before motion was added.
pub const INITIAL_ROTATION_KEY: &str = "initial_rotation";

/// Location and Euler rotation of an object.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub location: [f64; 3],
    pub rotation_euler: [f64; 3],
}

impl Transform {
    pub fn new(location: [f64; 3], rotation_euler: [f64; 3]) -> Self {
        Self {
            location,
            rotation_euler,
        }
    }

    /// Reads one channel value.
    pub fn get(&self, path: ChannelPath, index: usize) -> f64 {
        match path {
            ChannelPath::Location => self.location[index],
            ChannelPath::RotationEuler => self.rotation_euler[index],
        }
    }

    /// Writes one channel value.
    pub fn set(&mut self, path: ChannelPath, index: usize, value: f64) {
        match path {
            ChannelPath::Location => self.location[index] = value,
            ChannelPath::RotationEuler => self.rotation_euler[index] = value,
        }
    }

    /// Returns true if every component is finite.
    pub fn is_finite(&self) -> bool {
        self.location
            .iter()
            .chain(self.rotation_euler.iter())
            .all(|v| v.is_finite())
    }
}

/// How an object's rotation is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RotationMode {
    #[default]
    Xyz,
    Xzy,
    Yxz,
    Yzx,
    Zxy,
    Zyx,
    Quaternion,
    AxisAngle,
}

impl RotationMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationMode::Xyz => "XYZ",
            RotationMode::Xzy => "XZY",
            RotationMode::Yxz => "YXZ",
            RotationMode::Yzx => "YZX",
            RotationMode::Zxy => "ZXY",
            RotationMode::Zyx => "ZYX",
            RotationMode::Quaternion => "QUATERNION",
            RotationMode::AxisAngle => "AXIS_ANGLE",
        }
    }
}

/// An object in the scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SceneObject {
    /// Unique object name.
    pub name: String,
    #[serde(default)]
    pub location: [f64; 3],
    #[serde(default)]
    pub rotation_euler: [f64; 3],
    #[serde(default)]
    pub rotation_mode: RotationMode,
    /// Free-form metadata. Motion stores the pre-motion transform here.
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_properties: BTreeMap<String, serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_data: Option<AnimationData>,
}

impl SceneObject {
    /// Creates an unanimated object at the origin.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            location: [0.0; 3],
            rotation_euler: [0.0; 3],
            rotation_mode: RotationMode::Xyz,
            custom_properties: BTreeMap::new(),
            animation_data: None,
        }
    }

    /// Sets the location.
    pub fn at(mut self, location: [f64; 3]) -> Self {
        self.location = location;
        self
    }

    /// Sets the Euler rotation.
    pub fn rotated(mut self, rotation_euler: [f64; 3]) -> Self {
        self.rotation_euler = rotation_euler;
        self
    }

    /// Current transform.
    pub fn transform(&self) -> Transform {
        Transform::new(self.location, self.rotation_euler)
    }

    /// Overwrites location and rotation.
    pub fn set_transform(&mut self, transform: Transform) {
        self.location = transform.location;
        self.rotation_euler = transform.rotation_euler;
    }

    /// Returns true if the object carries animation data.
    pub fn has_animation_data(&self) -> bool {
        self.animation_data.is_some()
    }

    /// Records the current transform as the object's initial transform,
    /// overwriting any earlier record.
    pub fn store_initial_transform(&mut self) {
        self.custom_properties.insert(
            INITIAL_LOCATION_KEY.to_string(),
            serde_json::json!(self.location),
        );
        self.custom_properties.insert(
            INITIAL_ROTATION_KEY.to_string(),
            serde_json::json!(self.rotation_euler),
        );
    }

    /// Stored initial location, if present and well-formed.
    pub fn initial_location(&self) -> Option<[f64; 3]> {
        self.vector_property(INITIAL_LOCATION_KEY)
    }

    /// Stored initial rotation, if present and well-formed.
    pub fn initial_rotation(&self) -> Option<[f64; 3]> {
        self.vector_property(INITIAL_ROTATION_KEY)
    }

    fn vector_property(&self, key: &str) -> Option<[f64; 3]> {
        let value = self.custom_properties.get(key)?;
        serde_json::from_value(value.clone()).ok()
    }
}

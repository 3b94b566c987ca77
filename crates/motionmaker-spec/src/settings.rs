//! Scene-level motion settings and their panel descriptors.

use serde::{Deserialize, Serialize};

/// Highest frame number the host timeline accepts.
pub const MAX_FRAME: u32 = 1_048_574;

/// Numerator of the speed-to-stride conversion (`stride = 10 / speed`).
const STRIDE_SCALE: f64 = 10.0;

/// Parameters of the subtle motion generator.
///
/// Stored on the scene, so every object animated from the same scene shares
/// them. Noise parameters are carried and validated but the generator does
/// not read them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MotionSettings {
    /// Max range of translation in scene units.
    #[serde(default = "default_range")]
    pub translation_range: f64,
    /// Max range of rotation in radians.
    #[serde(default = "default_range")]
    pub rotation_range: f64,
    /// Randomness factor for translation.
    #[serde(default = "default_random")]
    pub translation_random: f64,
    /// Randomness factor for rotation.
    #[serde(default = "default_random")]
    pub rotation_random: f64,
    /// Speed factor for translation keyframe insertion.
    #[serde(default = "default_speed")]
    pub translation_speed: f64,
    /// Speed factor for rotation keyframe insertion.
    #[serde(default = "default_speed")]
    pub rotation_speed: f64,
    /// Total number of frames for generating motion.
    #[serde(default = "default_total_frames")]
    pub total_frames: u32,
    /// Noise factor for faster shaking.
    #[serde(default = "default_noise")]
    pub noise_factor: f64,
    /// Size factor for noise.
    #[serde(default = "default_noise")]
    pub noise_size: f64,
}

fn default_range() -> f64 {
    0.1
}

fn default_random() -> f64 {
    0.1
}

fn default_speed() -> f64 {
    1.0
}

fn default_total_frames() -> u32 {
    250
}

fn default_noise() -> f64 {
    1.0
}

impl Default for MotionSettings {
    fn default() -> Self {
        Self {
            translation_range: default_range(),
            rotation_range: default_range(),
            translation_random: default_random(),
            rotation_random: default_random(),
            translation_speed: default_speed(),
            rotation_speed: default_speed(),
            total_frames: default_total_frames(),
            noise_factor: default_noise(),
            noise_size: default_noise(),
        }
    }
}

/// Converts a speed factor into a keyframe stride in frames.
///
/// Truncates like the host's integer conversion and never returns less than 1.
/// Non-positive or NaN speeds collapse to a single keyframe per curve.
pub fn stride_for_speed(speed: f64) -> u32 {
    // float -> int casts saturate; NaN becomes 0
    ((STRIDE_SCALE / speed) as u32).max(1)
}

impl MotionSettings {
    /// Frames between consecutive location keyframes.
    pub fn translation_stride(&self) -> u32 {
        stride_for_speed(self.translation_speed)
    }

    /// Frames between consecutive rotation keyframes.
    pub fn rotation_stride(&self) -> u32 {
        stride_for_speed(self.rotation_speed)
    }

    /// Bound of the per-keyframe location offset.
    pub fn translation_amplitude(&self) -> f64 {
        self.translation_random * self.translation_range
    }

    /// Bound of the per-keyframe rotation offset, in radians.
    pub fn rotation_amplitude(&self) -> f64 {
        self.rotation_random * self.rotation_range
    }

    /// Returns true if either noise parameter differs from its default.
    pub fn noise_customized(&self) -> bool {
        self.noise_factor != default_noise() || self.noise_size != default_noise()
    }

    /// Returns the panel descriptors for every setting.
    pub fn properties() -> &'static [PropertyDescriptor] {
        PROPERTIES
    }

    /// Reads a setting by its property id.
    pub fn get(&self, id: &str) -> Option<f64> {
        let value = match id {
            "translation_range" => self.translation_range,
            "rotation_range" => self.rotation_range,
            "translation_random" => self.translation_random,
            "rotation_random" => self.rotation_random,
            "translation_speed" => self.translation_speed,
            "rotation_speed" => self.rotation_speed,
            "total_frames" => self.total_frames as f64,
            "noise_factor" => self.noise_factor,
            "noise_size" => self.noise_size,
            _ => return None,
        };
        Some(value)
    }

    /// Returns a copy with the given overrides applied.
    pub fn with_overrides(&self, overrides: &SettingsOverrides) -> Self {
        Self {
            translation_range: overrides
                .translation_range
                .unwrap_or(self.translation_range),
            rotation_range: overrides.rotation_range.unwrap_or(self.rotation_range),
            translation_random: overrides
                .translation_random
                .unwrap_or(self.translation_random),
            rotation_random: overrides.rotation_random.unwrap_or(self.rotation_random),
            translation_speed: overrides
                .translation_speed
                .unwrap_or(self.translation_speed),
            rotation_speed: overrides.rotation_speed.unwrap_or(self.rotation_speed),
            total_frames: overrides.total_frames.unwrap_or(self.total_frames),
            noise_factor: overrides.noise_factor.unwrap_or(self.noise_factor),
            noise_size: overrides.noise_size.unwrap_or(self.noise_size),
        }
    }
}

/// Optional per-setting overrides layered over the scene's settings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SettingsOverrides {
    pub translation_range: Option<f64>,
    pub rotation_range: Option<f64>,
    pub translation_random: Option<f64>,
    pub rotation_random: Option<f64>,
    pub translation_speed: Option<f64>,
    pub rotation_speed: Option<f64>,
    pub total_frames: Option<u32>,
    pub noise_factor: Option<f64>,
    pub noise_size: Option<f64>,
}

impl SettingsOverrides {
    /// Returns true if no override is set.
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Panel section a setting is drawn under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyGroup {
    Translation,
    Rotation,
    Noise,
    Frames,
}

impl PropertyGroup {
    /// Section heading shown above the group.
    pub fn heading(&self) -> &'static str {
        match self {
            PropertyGroup::Translation => "Translation:",
            PropertyGroup::Rotation => "Rotation (Use with XYZ Euler only):",
            PropertyGroup::Noise => "Noise:",
            PropertyGroup::Frames => "Frames:",
        }
    }

    /// Groups in panel order.
    pub fn all() -> &'static [PropertyGroup] {
        &[
            PropertyGroup::Translation,
            PropertyGroup::Rotation,
            PropertyGroup::Noise,
            PropertyGroup::Frames,
        ]
    }
}

/// Describes one numeric setting as shown on the panel.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PropertyDescriptor {
    /// Field name in [`MotionSettings`].
    pub id: &'static str,
    /// Display label.
    pub label: &'static str,
    /// Panel section.
    pub group: PropertyGroup,
    /// Default value.
    pub default: f64,
    /// Inclusive lower bound.
    pub min: f64,
    /// Inclusive upper bound, if any.
    pub max: Option<f64>,
    /// Whether the value is an integer.
    pub integer: bool,
    /// Tooltip text.
    pub description: &'static str,
}

impl PropertyDescriptor {
    /// Returns true if `value` is finite and inside the descriptor's bounds.
    pub fn contains(&self, value: f64) -> bool {
        value.is_finite() && value >= self.min && self.max.map_or(true, |max| value <= max)
    }

    /// Human-readable bounds, e.g. `[0, 10]` or `>= 1`.
    pub fn bounds(&self) -> String {
        match self.max {
            Some(max) => format!("[{}, {}]", self.min, max),
            None => format!(">= {}", self.min),
        }
    }
}

const PROPERTIES: &[PropertyDescriptor] = &[
    PropertyDescriptor {
        id: "translation_range",
        label: "Translation Range",
        group: PropertyGroup::Translation,
        default: 0.1,
        min: 0.0,
        max: Some(10.0),
        integer: false,
        description: "Max range of translation in scene units",
    },
    PropertyDescriptor {
        id: "translation_random",
        label: "Translation Randomness",
        group: PropertyGroup::Translation,
        default: 0.1,
        min: 0.0,
        max: Some(10.0),
        integer: false,
        description: "Randomness factor for translation",
    },
    PropertyDescriptor {
        id: "translation_speed",
        label: "Translation Speed",
        group: PropertyGroup::Translation,
        default: 1.0,
        min: 0.01,
        max: Some(10.0),
        integer: false,
        description: "Speed factor for translation keyframe insertion",
    },
    PropertyDescriptor {
        id: "rotation_range",
        label: "Rotation Range",
        group: PropertyGroup::Rotation,
        default: 0.1,
        min: 0.0,
        max: Some(10.0),
        integer: false,
        description: "Max range of rotation in radians",
    },
    PropertyDescriptor {
        id: "rotation_random",
        label: "Rotation Randomness",
        group: PropertyGroup::Rotation,
        default: 0.1,
        min: 0.0,
        max: Some(10.0),
        integer: false,
        description: "Randomness factor for rotation",
    },
    PropertyDescriptor {
        id: "rotation_speed",
        label: "Rotation Speed",
        group: PropertyGroup::Rotation,
        default: 1.0,
        min: 0.01,
        max: Some(10.0),
        integer: false,
        description: "Speed factor for rotation keyframe insertion",
    },
    PropertyDescriptor {
        id: "noise_factor",
        label: "Noise Factor",
        group: PropertyGroup::Noise,
        default: 1.0,
        min: 0.0,
        max: None,
        integer: false,
        description: "Noise factor for faster shaking",
    },
    PropertyDescriptor {
        id: "noise_size",
        label: "Noise Size",
        group: PropertyGroup::Noise,
        default: 1.0,
        min: 0.0,
        max: None,
        integer: false,
        description: "Size factor for noise",
    },
    PropertyDescriptor {
        id: "total_frames",
        label: "Total Frames",
        group: PropertyGroup::Frames,
        default: 250.0,
        min: 1.0,
        max: Some(MAX_FRAME as f64),
        integer: true,
        description: "Total number of frames for generating motion",
    },
];

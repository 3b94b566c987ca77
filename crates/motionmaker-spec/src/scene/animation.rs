//! Animation data attached to scene objects: actions, F-curves, keyframes.

use serde::{Deserialize, Serialize};

/// Animated property an F-curve drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPath {
    /// Object location (X, Y, Z).
    Location,
    /// Object Euler rotation (X, Y, Z), radians.
    RotationEuler,
}

impl ChannelPath {
    /// Returns the data path string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ChannelPath::Location => "location",
            ChannelPath::RotationEuler => "rotation_euler",
        }
    }
}

impl std::fmt::Display for ChannelPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single animatable scalar: data path plus array index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Channel {
    pub path: ChannelPath,
    pub index: usize,
}

impl Channel {
    /// Creates a channel.
    pub const fn new(path: ChannelPath, index: usize) -> Self {
        Self { path, index }
    }

    /// The six transform channels in generation order:
    /// location x, y, z then rotation x, y, z.
    pub const ALL: [Channel; 6] = [
        Channel::new(ChannelPath::Location, 0),
        Channel::new(ChannelPath::Location, 1),
        Channel::new(ChannelPath::Location, 2),
        Channel::new(ChannelPath::RotationEuler, 0),
        Channel::new(ChannelPath::RotationEuler, 1),
        Channel::new(ChannelPath::RotationEuler, 2),
    ];

    /// Axis letter for the index.
    pub fn axis(&self) -> char {
        match self.index {
            0 => 'x',
            1 => 'y',
            2 => 'z',
            _ => '?',
        }
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{}", self.path, self.axis())
    }
}

/// A (frame, value) sample on an F-curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub frame: i32,
    pub value: f64,
}

impl Keyframe {
    pub fn new(frame: i32, value: f64) -> Self {
        Self { frame, value }
    }
}

/// How a cycles modifier extends a curve past its keyed range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CycleMode {
    /// Hold the end values.
    None,
    /// Repeat the keyed segment.
    #[default]
    Repeat,
    /// Repeat with each cycle offset by the segment's end delta.
    RepeatOffset,
    /// Repeat alternating forwards and backwards.
    Mirror,
}

/// Modifier stacked on an F-curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CurveModifier {
    /// Repeats the keyed segment before/after its range.
    Cycles {
        #[serde(default)]
        mode_before: CycleMode,
        #[serde(default)]
        mode_after: CycleMode,
    },
}

impl CurveModifier {
    /// Cycles modifier that mirrors after the last key and repeats before the first.
    pub fn mirror_after() -> Self {
        CurveModifier::Cycles {
            mode_before: CycleMode::Repeat,
            mode_after: CycleMode::Mirror,
        }
    }

    /// Returns true if this is a cycles modifier.
    pub fn is_cycles(&self) -> bool {
        matches!(self, CurveModifier::Cycles { .. })
    }
}

/// An animation curve for one channel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FCurve {
    pub data_path: ChannelPath,
    pub array_index: usize,
    /// Keys sorted by frame, at most one per frame.
    #[serde(default)]
    pub keyframes: Vec<Keyframe>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub modifiers: Vec<CurveModifier>,
}

impl FCurve {
    /// Creates an empty curve for a channel.
    pub fn new(channel: Channel) -> Self {
        Self {
            data_path: channel.path,
            array_index: channel.index,
            keyframes: Vec::new(),
            modifiers: Vec::new(),
        }
    }

    /// The channel this curve drives.
    pub fn channel(&self) -> Channel {
        Channel::new(self.data_path, self.array_index)
    }

    /// Inserts a key, replacing any key already on that frame.
    pub fn insert_keyframe(&mut self, frame: i32, value: f64) {
        match self.keyframes.binary_search_by_key(&frame, |k| k.frame) {
            Ok(i) => self.keyframes[i].value = value,
            Err(i) => self.keyframes.insert(i, Keyframe::new(frame, value)),
        }
    }

    /// Removes every cycles modifier, returning how many were removed.
    pub fn remove_cycles_modifiers(&mut self) -> usize {
        let before = self.modifiers.len();
        self.modifiers.retain(|m| !m.is_cycles());
        before - self.modifiers.len()
    }

    /// The `mode_after` of the first cycles modifier, if any.
    pub fn cycles_after(&self) -> Option<CycleMode> {
        self.modifiers.iter().find_map(|m| match m {
            CurveModifier::Cycles { mode_after, .. } => Some(*mode_after),
        })
    }

    /// Frame range covered by the keys.
    pub fn frame_range(&self) -> Option<(i32, i32)> {
        let first = self.keyframes.first()?;
        let last = self.keyframes.last()?;
        Some((first.frame, last.frame))
    }
}

/// A named set of F-curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    #[serde(default)]
    pub fcurves: Vec<FCurve>,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fcurves: Vec::new(),
        }
    }

    /// Finds the curve for a channel.
    pub fn find(&self, channel: Channel) -> Option<&FCurve> {
        self.fcurves.iter().find(|c| c.channel() == channel)
    }

    /// Finds the curve for a channel, creating it if missing.
    pub fn ensure(&mut self, channel: Channel) -> &mut FCurve {
        let pos = match self.fcurves.iter().position(|c| c.channel() == channel) {
            Some(pos) => pos,
            None => {
                self.fcurves.push(FCurve::new(channel));
                self.fcurves.len() - 1
            }
        };
        &mut self.fcurves[pos]
    }

    /// Total number of keys across all curves.
    pub fn keyframe_count(&self) -> usize {
        self.fcurves.iter().map(|c| c.keyframes.len()).sum()
    }
}

/// Per-object animation container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimationData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<Action>,
}

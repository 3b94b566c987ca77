//! Subtle motion generation.
//!
//! Produces a random walk per transform channel: starting from the object's
//! current value, every `stride` frames the value moves by a uniform offset
//! bounded by `random × range`. Each resulting curve is meant to be played
//! back with a mirrored cycles modifier, so the walk sways back and forth
//! past its last key instead of drifting away.

use motionmaker_spec::settings::MAX_FRAME;
use motionmaker_spec::{Channel, ChannelPath, CurveModifier, Keyframe, MotionSettings, Transform};
use rand::Rng;
use tracing::debug;

use crate::rng::{create_channel_rng, uniform_offset};

/// Generated keys for one channel.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelCurve {
    pub channel: Channel,
    /// Keys in ascending frame order.
    pub keyframes: Vec<Keyframe>,
    /// Modifier to attach after keying.
    pub cycles: CurveModifier,
}

impl ChannelCurve {
    /// Value of the last key, if any.
    pub fn last_value(&self) -> Option<f64> {
        self.keyframes.last().map(|k| k.value)
    }
}

/// Generated motion for all six transform channels.
#[derive(Debug, Clone, PartialEq)]
pub struct MotionClip {
    /// Transform the walk started from.
    pub initial: Transform,
    /// Curves in [`Channel::ALL`] order.
    pub channels: Vec<ChannelCurve>,
}

impl MotionClip {
    /// Curve for a channel.
    pub fn channel(&self, channel: Channel) -> Option<&ChannelCurve> {
        self.channels.iter().find(|c| c.channel == channel)
    }

    /// Total number of generated keys.
    pub fn keyframe_count(&self) -> usize {
        self.channels.iter().map(|c| c.keyframes.len()).sum()
    }

    /// Transform holding each channel's last sampled value.
    pub fn final_transform(&self) -> Transform {
        let mut transform = self.initial;
        for curve in &self.channels {
            if let Some(value) = curve.last_value() {
                transform.set(curve.channel.path, curve.channel.index, value);
            }
        }
        transform
    }
}

/// Frames at which a channel is keyed: `0, stride, 2·stride, …` below
/// `total_frames`.
pub fn key_frames(total_frames: u32, stride: u32) -> impl Iterator<Item = i32> {
    let total = total_frames.min(MAX_FRAME);
    (0..total).step_by(stride.max(1) as usize).map(|f| f as i32)
}

/// Number of keys [`key_frames`] yields.
pub fn key_count(total_frames: u32, stride: u32) -> usize {
    let total = total_frames.min(MAX_FRAME) as u64;
    let stride = stride.max(1) as u64;
    total.div_ceil(stride) as usize
}

/// Random walk for one channel.
pub fn generate_channel<R: Rng + ?Sized>(
    channel: Channel,
    start: f64,
    amplitude: f64,
    stride: u32,
    total_frames: u32,
    rng: &mut R,
) -> ChannelCurve {
    let mut value = start;
    let keyframes = key_frames(total_frames, stride)
        .map(|frame| {
            value += uniform_offset(rng, amplitude);
            Keyframe::new(frame, value)
        })
        .collect();

    ChannelCurve {
        channel,
        keyframes,
        cycles: CurveModifier::mirror_after(),
    }
}

/// Generates subtle motion for all six transform channels.
///
/// Pure: the same `initial`, `settings`, and `seed` always produce the same
/// clip. Location channels use the translation settings and rotation
/// channels the rotation settings. Noise settings are ignored.
///
/// # Example
/// ```
/// use motionmaker_backend::generate::generate_motion;
/// use motionmaker_spec::{MotionSettings, Transform};
///
/// let clip = generate_motion(&Transform::default(), &MotionSettings::default(), 42);
/// assert_eq!(clip.channels.len(), 6);
/// // 250 frames at a 10-frame stride
/// assert_eq!(clip.channels[0].keyframes.len(), 25);
/// ```
pub fn generate_motion(initial: &Transform, settings: &MotionSettings, seed: u32) -> MotionClip {
    let channels = Channel::ALL
        .iter()
        .map(|channel| {
            let (stride, amplitude) = match channel.path {
                ChannelPath::Location => {
                    (settings.translation_stride(), settings.translation_amplitude())
                }
                ChannelPath::RotationEuler => {
                    (settings.rotation_stride(), settings.rotation_amplitude())
                }
            };

            let mut rng = create_channel_rng(seed, channel);
            let start = initial.get(channel.path, channel.index);
            let curve = generate_channel(
                *channel,
                start,
                amplitude,
                stride,
                settings.total_frames,
                &mut rng,
            );

            debug!(
                channel = %channel,
                stride,
                amplitude,
                keys = curve.keyframes.len(),
                "generated channel"
            );
            curve
        })
        .collect();

    MotionClip {
        initial: *initial,
        channels,
    }
}

//! Add and remove subtle motion.
//!
//! These are the two buttons of the motion panel. Adding replaces whatever
//! animation the object had with a fresh random walk on all six transform
//! channels. Removing drops the animation and puts the object back where it
//! was when motion was added.

use motionmaker_spec::{validate_settings, CurveModifier, MotionSettings, Scene, Transform};
use tracing::{debug, info};

use crate::error::{MotionError, MotionResult};
use crate::generate::{generate_motion, MotionClip};
use crate::host::AnimationHost;

/// What [`add_subtle_motion`] did.
#[derive(Debug, Clone, PartialEq)]
pub struct AddMotionOutcome {
    /// Name of the animated object.
    pub object: String,
    /// True if earlier animation data was discarded.
    pub cleared_existing: bool,
    /// Transform recorded as the initial transform.
    pub initial: Transform,
    /// The keys that were inserted.
    pub clip: MotionClip,
}

/// What [`remove_subtle_motion`] did.
#[derive(Debug, Clone, PartialEq)]
pub enum RemoveMotionOutcome {
    /// Animation data was cleared. Each restored half is present only if the
    /// object had a record for it.
    Removed {
        object: String,
        restored_location: Option<[f64; 3]>,
        restored_rotation: Option<[f64; 3]>,
    },
    /// The object had no animation data; nothing changed.
    NothingToRemove { object: String },
}

impl RemoveMotionOutcome {
    /// Name of the object the operator ran on.
    pub fn object(&self) -> &str {
        match self {
            RemoveMotionOutcome::Removed { object, .. } => object,
            RemoveMotionOutcome::NothingToRemove { object } => object,
        }
    }

    /// Returns true if animation data was removed.
    pub fn removed(&self) -> bool {
        matches!(self, RemoveMotionOutcome::Removed { .. })
    }
}

/// Adds subtle motion to an object.
///
/// Settings are validated first; on failure the object is left untouched.
/// Otherwise any existing animation data is cleared, the current transform
/// is recorded as the initial transform, and every generated key is inserted
/// through the host followed by a mirrored cycles modifier per curve. The
/// object ends at the last sampled values.
pub fn add_subtle_motion<H: AnimationHost + ?Sized>(
    host: &mut H,
    settings: &MotionSettings,
    seed: u32,
) -> MotionResult<AddMotionOutcome> {
    let validation = validate_settings(settings);
    if !validation.is_ok() {
        return Err(MotionError::invalid_settings(validation.errors));
    }

    let cleared_existing = host.has_animation_data();
    if cleared_existing {
        debug!(object = host.name(), "clearing existing animation data");
        host.animation_data_clear();
    }

    host.store_initial_transform();
    let initial = host.transform();
    let clip = generate_motion(&initial, settings, seed);

    for curve in &clip.channels {
        for key in &curve.keyframes {
            host.keyframe_insert(curve.channel, key.frame, key.value);
        }
        if curve.keyframes.is_empty() {
            continue;
        }
        let CurveModifier::Cycles { mode_after, .. } = curve.cycles;
        host.add_cycles_modifier(curve.channel, mode_after)?;
    }

    info!(
        object = host.name(),
        seed,
        keys = clip.keyframe_count(),
        cleared_existing,
        "added subtle motion"
    );

    Ok(AddMotionOutcome {
        object: host.name().to_string(),
        cleared_existing,
        initial,
        clip,
    })
}

/// Removes subtle motion from an object.
///
/// If the object has animation data it is cleared and whichever initial
/// location and rotation records exist are restored. An object without
/// animation data is left alone, even if it has stored initial values.
pub fn remove_subtle_motion<H: AnimationHost + ?Sized>(
    host: &mut H,
) -> MotionResult<RemoveMotionOutcome> {
    let object = host.name().to_string();

    if !host.has_animation_data() {
        debug!(object = %object, "no animation data to remove");
        return Ok(RemoveMotionOutcome::NothingToRemove { object });
    }

    host.animation_data_clear();

    let stored = host.initial_transform();
    let mut transform = host.transform();
    if let Some(location) = stored.location {
        transform.location = location;
    }
    if let Some(rotation) = stored.rotation_euler {
        transform.rotation_euler = rotation;
    }
    host.set_transform(transform);

    info!(
        object = %object,
        restored_location = stored.location.is_some(),
        restored_rotation = stored.rotation_euler.is_some(),
        "removed subtle motion"
    );

    Ok(RemoveMotionOutcome::Removed {
        object,
        restored_location: stored.location,
        restored_rotation: stored.rotation_euler,
    })
}

/// Adds motion to the named object, or the active object if `name` is None.
pub fn add_motion_to_scene(
    scene: &mut Scene,
    name: Option<&str>,
    settings: &MotionSettings,
    seed: u32,
) -> MotionResult<AddMotionOutcome> {
    let object = scene.resolve_target(name)?;
    add_subtle_motion(object, settings, seed)
}

/// Removes motion from the named object, or the active object if `name` is
/// None.
pub fn remove_motion_from_scene(
    scene: &mut Scene,
    name: Option<&str>,
) -> MotionResult<RemoveMotionOutcome> {
    let object = scene.resolve_target(name)?;
    remove_subtle_motion(object)
}

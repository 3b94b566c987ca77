//! Animation-authoring API the operators drive.
//!
//! The operators only talk to an object through [`AnimationHost`], which
//! mirrors the handful of calls an animation package exposes for keying
//! transforms. [`SceneObject`] implements it over the JSON scene model.

use motionmaker_spec::{Action, AnimationData, Channel, CurveModifier, CycleMode, FCurve, SceneObject, Transform};

use crate::error::{MotionError, MotionResult};

/// Pre-motion transform recorded on an object. Either half may be missing
/// if the record was edited by hand.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StoredTransform {
    pub location: Option<[f64; 3]>,
    pub rotation_euler: Option<[f64; 3]>,
}

/// Object-level animation calls.
pub trait AnimationHost {
    /// Object name, used in logs and reports.
    fn name(&self) -> &str;

    /// Current location and rotation.
    fn transform(&self) -> Transform;

    /// Overwrites location and rotation.
    fn set_transform(&mut self, transform: Transform);

    /// Returns true if the object carries animation data.
    fn has_animation_data(&self) -> bool;

    /// Drops all animation data, including curves and their modifiers.
    fn animation_data_clear(&mut self);

    /// Sets the channel to `value` and keys it at `frame`, creating the
    /// action and curve on demand. A key already on that frame is replaced.
    fn keyframe_insert(&mut self, channel: Channel, frame: i32, value: f64);

    /// Appends a cycles modifier to the channel's curve.
    fn add_cycles_modifier(&mut self, channel: Channel, mode_after: CycleMode) -> MotionResult<()>;

    /// The curve for a channel, if keyed.
    fn fcurve(&self, channel: Channel) -> Option<&FCurve>;

    /// Records the current transform as the initial transform.
    fn store_initial_transform(&mut self);

    /// The recorded initial transform.
    fn initial_transform(&self) -> StoredTransform;
}

impl AnimationHost for SceneObject {
    fn name(&self) -> &str {
        &self.name
    }

    fn transform(&self) -> Transform {
        SceneObject::transform(self)
    }

    fn set_transform(&mut self, transform: Transform) {
        SceneObject::set_transform(self, transform)
    }

    fn has_animation_data(&self) -> bool {
        SceneObject::has_animation_data(self)
    }

    fn animation_data_clear(&mut self) {
        self.animation_data = None;
    }

    fn keyframe_insert(&mut self, channel: Channel, frame: i32, value: f64) {
        let mut transform = SceneObject::transform(self);
        transform.set(channel.path, channel.index, value);
        SceneObject::set_transform(self, transform);

        let action_name = format!("{}Action", self.name);
        let data = self.animation_data.get_or_insert_with(AnimationData::default);
        let action = data.action.get_or_insert_with(|| Action::new(action_name));
        action.ensure(channel).insert_keyframe(frame, value);
    }

    fn add_cycles_modifier(&mut self, channel: Channel, mode_after: CycleMode) -> MotionResult<()> {
        let curve = self
            .animation_data
            .as_mut()
            .and_then(|data| data.action.as_mut())
            .and_then(|action| action.fcurves.iter_mut().find(|c| c.channel() == channel))
            .ok_or(MotionError::MissingCurve { channel })?;

        curve.modifiers.push(CurveModifier::Cycles {
            mode_before: CycleMode::Repeat,
            mode_after,
        });
        Ok(())
    }

    fn fcurve(&self, channel: Channel) -> Option<&FCurve> {
        self.animation_data
            .as_ref()
            .and_then(|data| data.action.as_ref())
            .and_then(|action| action.find(channel))
    }

    fn store_initial_transform(&mut self) {
        SceneObject::store_initial_transform(self)
    }

    fn initial_transform(&self) -> StoredTransform {
        StoredTransform {
            location: self.initial_location(),
            rotation_euler: self.initial_rotation(),
        }
    }
}

//! Motion Maker Backend
//!
//! Generates subtle, looping transform motion for scene objects and
//! implements the add/remove operators that apply it.
//!
//! # Overview
//!
//! Adding motion keys all six transform channels (location X/Y/Z and Euler
//! rotation X/Y/Z) with a seeded random walk, then attaches a cycles modifier
//! that mirrors each curve past its last key. The object's pre-motion
//! transform is stored as custom properties so removing motion can put it
//! back.
//!
//! | Setting | Effect |
//! |---------|--------|
//! | `*_range` × `*_random` | Largest step between consecutive keys |
//! | `*_speed` | Key spacing: `max(1, floor(10 / speed))` frames |
//! | `total_frames` | Keys are placed on frames `[0, total_frames)` |
//!
//! # Example
//!
//! ```
//! use motionmaker_backend::add_motion_to_scene;
//! use motionmaker_spec::{MotionSettings, Scene, SceneObject};
//!
//! let mut scene = Scene::new()
//!     .with_object(SceneObject::new("Cube"))
//!     .with_active("Cube");
//!
//! let outcome = add_motion_to_scene(&mut scene, None, &MotionSettings::default(), 42).unwrap();
//! assert_eq!(outcome.clip.keyframe_count(), 6 * 25);
//! ```
//!
//! # Crate Structure
//!
//! - [`generate`] - Pure keyframe generation
//! - [`host`] - Animation-authoring API the operators call
//! - [`operators`] - Add and remove subtle motion
//! - [`rng`] - Seeded per-channel random streams
//! - [`error`] - Error types

pub mod error;
pub mod generate;
pub mod host;
pub mod operators;
pub mod rng;

pub use error::{MotionError, MotionResult};
pub use generate::{generate_motion, ChannelCurve, MotionClip};
pub use host::{AnimationHost, StoredTransform};
pub use operators::{
    add_motion_to_scene, add_subtle_motion, remove_motion_from_scene, remove_subtle_motion,
    AddMotionOutcome, RemoveMotionOutcome,
};

/// Backend version recorded in reports.
pub const BACKEND_VERSION: &str = concat!("motionmaker-backend v", env!("CARGO_PKG_VERSION"));

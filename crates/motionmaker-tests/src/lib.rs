//! Motion Maker End-to-End Test Infrastructure
//!
//! This crate provides integration tests for the add/remove motion flows:
//!
//! - Operators: scene in, keyed scene out, initial transform restored
//! - Validation: invalid scenes and settings are rejected with stable codes
//! - **Determinism**: the same scene, settings, and seed key identical curves
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p motionmaker-tests
//! ```
//!
//! ## Determinism Testing
//!
//! ```rust,ignore
//! use motionmaker_tests::determinism::{clip_bytes, verify_determinism};
//!
//! let result = verify_determinism(|| clip_bytes(&generate_motion(&t, &s, 42)), 3);
//! assert!(result.is_deterministic);
//! ```

pub mod determinism;
pub mod fixtures;
pub mod harness;

// Re-export commonly used items
pub use determinism::{
    clip_bytes, compute_hash, scene_animation_bytes, verify_determinism,
    verify_hash_determinism, DeterminismResult, DiffInfo,
};
pub use fixtures::SceneFixture;
pub use harness::{CliResult, TestHarness};

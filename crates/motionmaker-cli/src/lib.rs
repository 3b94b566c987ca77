//! Motion Maker CLI library.
//!
//! This crate provides the core functionality for the `motionmaker` binary:
//! scene loading and saving, settings overrides, logging setup, and the
//! command implementations.

pub mod commands;
pub mod input;
pub mod logging;
pub mod overrides;

//! CLI command implementations

pub mod add;
pub mod init;
pub mod json_output;
pub mod panel;
pub mod remove;
pub mod validate;

mod reporting;

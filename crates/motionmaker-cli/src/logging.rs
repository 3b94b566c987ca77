//! Log output setup.
//!
//! Diagnostics go to stderr through `tracing`; command results stay on
//! stdout so `--json` output is never interleaved with log lines.

use tracing_subscriber::EnvFilter;

/// Filter used when neither `RUST_LOG` nor `-v` is given.
pub const DEFAULT_FILTER: &str = "warn";

/// Filter directive for a `-v` count.
pub fn filter_for_verbosity(verbose: u8) -> Option<&'static str> {
    match verbose {
        0 => None,
        1 => Some("debug"),
        _ => Some("trace"),
    }
}

/// Installs the global subscriber.
///
/// `-v` takes precedence over `RUST_LOG`. Calling this more than once is
/// harmless; later calls are ignored.
pub fn init(verbose: u8) {
    let filter = match filter_for_verbosity(verbose) {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

//! Tracing setup for the `workout-gen` binary.
//!
//! Log lines go to stderr; stdout is reserved for the workout itself so
//! `--json` output can be piped.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_LEVEL: &str = "warn";

/// Install the global subscriber at `warn`
///
/// Pipeline stages log at debug; `RUST_LOG=workout_core=debug` shows them.
pub fn init() {
    init_with_level(DEFAULT_LEVEL)
}

/// Install the global subscriber, falling back to `level` when `RUST_LOG` is unset
pub fn init_with_level(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

#[cfg(test)]
pub fn init_test() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(EnvFilter::new("debug"))
        .try_init();
}

// crates/cli/src/logging.rs
//! Logging setup for the binary.
//!
//! Records go to stderr so stdout carries only the report. The engine logs
//! through the `log` facade; the subscriber's `tracing-log` bridge picks
//! those records up as well.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. `level` overrides `RUST_LOG`; without
/// either, only warnings and errors are shown.
pub fn init(level: Option<&str>) {
    let filter = match level {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    // Fails only if a subscriber is already installed, e.g. in tests.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}

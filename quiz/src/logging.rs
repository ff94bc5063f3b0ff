//! Development-time tracing for debugging the quiz runner.
//!
//! Diagnostics go to stderr and are controlled by `RUST_LOG`; quiz prompts and
//! the report file are product output and never routed through tracing.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Reads `RUST_LOG`; defaults to `warn` when unset. Output: stderr, compact
/// format.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

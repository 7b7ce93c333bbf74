//! Tracing subscriber initialization.

use tracing_subscriber::EnvFilter;

/// Install the process-wide subscriber.
///
/// Honors `RUST_LOG`; defaults to `info`. Compact console output — this is a
/// single-service tool with no log aggregation downstream.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .try_init();
}

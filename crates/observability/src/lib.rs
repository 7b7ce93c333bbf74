//! Tracing and logging setup shared by every binary in the workspace.

/// Initialize process-wide observability (tracing/logging).
///
/// Safe to call more than once; later calls become no-ops.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filter + subscriber).
pub mod tracing;

//! Shared tracing/logging setup for lotflow binaries.

/// Initialize process-wide logging.
///
/// Idempotent: calling it again after a subscriber is installed is a no-op.
pub fn init() {
    tracing::init();
}

/// Tracing configuration (filter, output format).
pub mod tracing;

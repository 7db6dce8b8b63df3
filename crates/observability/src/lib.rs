//! Tracing/logging setup shared by catalog host binaries.
//!
//! Libraries in this workspace only emit `tracing` events; installing a
//! subscriber is the host's job.

/// Initialize process-wide logging.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init();
}

/// Subscriber configuration (filters, format).
pub mod tracing;

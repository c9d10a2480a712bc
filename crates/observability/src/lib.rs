//! Logging setup shared by hosts embedding the stockboard crates.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use crate::tracing::ObservabilityConfig;

/// Initialize process-wide tracing with defaults.
///
/// Safe to call multiple times; subsequent calls are no-ops.
pub fn init() {
    tracing::init_with(&ObservabilityConfig::default());
}

/// Initialize process-wide tracing with an explicit configuration.
pub fn init_with(config: &ObservabilityConfig) {
    tracing::init_with(config);
}

//! Tracing and logging (shared setup).

pub mod config;

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use config::{ConfigError, LogFormat, ObservabilityConfig};

/// Initialize process-wide observability from the environment.
///
/// Falls back to the defaults when the environment is malformed. Safe to call
/// multiple times; subsequent calls become no-ops.
pub fn init() {
    let config = ObservabilityConfig::from_env().unwrap_or_else(|err| {
        eprintln!("invalid logging configuration, using defaults: {err}");
        ObservabilityConfig::default()
    });
    tracing::init(&config);
}

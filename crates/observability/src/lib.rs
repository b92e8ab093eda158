//! Tracing/logging setup shared by binaries and tests.
//!
//! Library crates in this workspace only emit `tracing` events; installing a
//! subscriber is the job of whoever owns the process.

/// Subscriber configuration (filter directives, output format).
pub mod config;

/// Subscriber installation.
pub mod tracing;

pub use config::{LOG_FORMAT_ENV, LogFormat, ObservabilityConfig};

/// Initialize process-wide tracing from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init_with(&ObservabilityConfig::from_env());

    let raw = std::env::var(LOG_FORMAT_ENV).ok();
    if let Some(value) = unknown_format(raw.as_deref()) {
        ::tracing::warn!(value = %value, "unrecognized {LOG_FORMAT_ENV}; falling back to json");
    }
}

/// Returns the raw format value when it is set but not a known format.
fn unknown_format(raw: Option<&str>) -> Option<&str> {
    raw.filter(|value| LogFormat::parse(value).is_none())
}

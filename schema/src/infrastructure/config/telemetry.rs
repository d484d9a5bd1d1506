//! Telemetry configuration for the schema tools.

use serde::Deserialize;

/// Logging settings.
#[derive(Debug, Deserialize, Clone)]
pub struct TelemetrySettings {
    /// Service name attached to log records.
    pub service_name: String,
    /// Fallback filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Emit JSON records instead of human-readable lines.
    #[serde(default)]
    pub json: bool,
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            service_name: "app-schema".to_string(),
            log_level: default_log_level(),
            json: false,
        }
    }
}

pub(super) fn default_log_level() -> String {
    "warn".to_string()
}

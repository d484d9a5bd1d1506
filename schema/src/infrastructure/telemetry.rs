use anyhow::{Context, Result};
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use super::config::TelemetrySettings;

/// Builder for setting up logging.
///
/// Records go to stderr so stdout carries only command output.
pub struct TelemetryBuilder {
    service_name: String,
    log_level: String,
    json: bool,
}

impl TelemetryBuilder {
    /// Creates a builder logging at `warn` in human-readable form.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            log_level: "warn".to_string(),
            json: false,
        }
    }

    /// Creates a builder from loaded settings.
    #[must_use]
    pub fn from_settings(settings: &TelemetrySettings) -> Self {
        Self::new(settings.service_name.clone())
            .with_log_level(settings.log_level.clone())
            .with_json(settings.json)
    }

    /// Sets the filter used when `RUST_LOG` is unset.
    #[must_use]
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Switches between JSON and compact output.
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Installs the global subscriber.
    ///
    /// # Errors
    ///
    /// Returns an error if a global subscriber is already installed.
    pub fn init(self) -> Result<()> {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&self.log_level));

        let fmt_layer = if self.json {
            fmt::layer().json().with_writer(std::io::stderr).boxed()
        } else {
            fmt::layer().compact().with_writer(std::io::stderr).boxed()
        };

        Registry::default()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()
            .context("Failed to init subscriber")?;

        tracing::debug!(service = %self.service_name, "Telemetry initialized");
        Ok(())
    }
}

//! Configuration management for the schema tools.
//!
//! Values come from built-in defaults, overridden by environment
//! variables prefixed with `APP_SCHEMA` and using `__` as the section
//! separator, e.g. `APP_SCHEMA__CODEC__MAX_MESSAGE_BYTES=1024`.
//!
//! # Example
//!
//! ```
//! use app_schema::infrastructure::config::Settings;
//!
//! let settings = Settings::new().expect("Failed to load configuration");
//! assert!(settings.codec.max_message_bytes > 0);
//! ```

pub mod codec;
pub mod telemetry;

pub use codec::{BinaryFormat, CodecSettings};
pub use telemetry::TelemetrySettings;

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "APP_SCHEMA";

/// Top-level configuration.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct Settings {
    /// Codec settings.
    #[serde(default)]
    pub codec: CodecSettings,
    /// Telemetry settings.
    #[serde(default)]
    pub telemetry: TelemetrySettings,
}

impl Settings {
    /// Creates a new settings instance from environment variables and defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn new() -> Result<Self, ConfigError> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX).separator("__"))
    }

    /// Builds settings from defaults overlaid with `source`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be built or deserialized.
    pub fn from_environment(source: Environment) -> Result<Self, ConfigError> {
        let max_message_bytes = i64::try_from(codec::default_max_message_bytes()).unwrap_or(i64::MAX);

        let s = Config::builder()
            .set_default("codec.max_message_bytes", max_message_bytes)?
            .set_default("codec.binary_format", "hex")?
            .set_default("codec.framed", false)?
            .set_default("telemetry.service_name", "app-schema")?
            .set_default("telemetry.log_level", telemetry::default_log_level())?
            .set_default("telemetry.json", false)?
            .add_source(source.try_parsing(true))
            .build()?;

        s.try_deserialize()
    }
}

/// Configuration management for the schema tools.
pub mod config;
/// Telemetry setup for logging.
pub mod telemetry;

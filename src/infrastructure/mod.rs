//! Infrastructure layer with configuration and seed adapters.

/// Catalog seed sources.
pub mod catalog;
/// Application configuration.
pub mod config;

pub use catalog::ConfigCatalogSource;
pub use config::{AppConfig, CliArgs, ConfigError, ConfigStorage, LogLevel};

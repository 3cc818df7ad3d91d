//! Application configuration.

/// Config file schema.
pub mod app_config;
/// Command line arguments.
pub mod args;
/// Config file location and loading.
pub mod storage;

pub use app_config::{AppConfig, LogLevel, ThemeConfig, UiConfig};
pub use args::CliArgs;
pub use storage::{ConfigError, ConfigStorage};

use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

/// Failures while locating or writing the config file.
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// Finds, reads and seeds the planner's config file.
pub struct ConfigStorage {
    config_dir: PathBuf,
}

impl ConfigStorage {
    /// Roots the storage at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| Self::with_dir(dirs.config_dir().to_path_buf()))
            .ok_or(ConfigError::ConfigDirNotFound)
    }

    /// Roots the storage at `config_dir`.
    #[must_use]
    pub fn with_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Path of the config file when no override is given.
    #[must_use]
    pub fn default_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Loads the planner configuration from `path_override` or the default path.
    ///
    /// A missing file is written with defaults. A file that fails to parse is
    /// left untouched and defaults are used.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the default cannot
    /// be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<AppConfig, ConfigError> {
        let path = path_override.map_or_else(|| self.default_path(), Path::to_path_buf);

        match fs::read_to_string(&path) {
            Ok(content) => Ok(parse_or_default(&path, &content)),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                info!(path = %path.display(), "Writing default config");
                let config = AppConfig::default();
                write_atomically(&path, &toml::to_string_pretty(&config)?)?;
                Ok(config)
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn parse_or_default(path: &Path, content: &str) -> AppConfig {
    toml::from_str(content).unwrap_or_else(|e| {
        warn!(path = %path.display(), error = %e, "Malformed config, using defaults");
        AppConfig::default()
    })
}

fn write_atomically(path: &Path, content: &str) -> Result<(), ConfigError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(dir)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_config_is_written_with_defaults() {
        let dir = tempdir().unwrap();
        let storage = ConfigStorage::with_dir(dir.path().join("conference-planner"));

        let config = storage.load_config(None).unwrap();
        assert_eq!(config.people, 1);

        let written = fs::read_to_string(storage.default_path()).unwrap();
        let reread: AppConfig = toml::from_str(&written).unwrap();
        assert_eq!(reread.people, 1);
        assert_eq!(reread.theme.accent_color, "Cyan");
    }

    #[test]
    fn test_malformed_config_falls_back_and_is_kept() {
        let dir = tempdir().unwrap();
        let storage = ConfigStorage::with_dir(dir.path().to_path_buf());
        fs::write(storage.default_path(), "people = [").unwrap();

        let config = storage.load_config(None).unwrap();

        assert_eq!(config.people, 1);
        assert_eq!(
            fs::read_to_string(storage.default_path()).unwrap(),
            "people = ["
        );
    }

    #[test]
    fn test_override_path_wins() {
        let dir = tempdir().unwrap();
        let storage = ConfigStorage::with_dir(dir.path().join("unused"));
        let custom = dir.path().join("planner.toml");
        fs::write(&custom, "people = 30\n").unwrap();

        let config = storage.load_config(Some(&custom)).unwrap();

        assert_eq!(config.people, 30);
        assert!(!dir.path().join("unused").exists());
    }

    #[test]
    fn test_directory_in_place_of_file_is_an_error() {
        let dir = tempdir().unwrap();
        let storage = ConfigStorage::with_dir(dir.path().to_path_buf());
        fs::create_dir(storage.default_path()).unwrap();

        assert!(matches!(storage.load_config(None), Err(ConfigError::Io(_))));
    }
}

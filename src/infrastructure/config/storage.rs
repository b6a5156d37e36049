use super::app_config::{APP_NAME, APP_ORGANIZATION, APP_QUALIFIER, AppConfig};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, info, warn};

const CONFIG_FILE_NAME: &str = "config.toml";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to determine config directory")]
    ConfigDirNotFound,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("toml serialization error: {0}")]
    TomlSer(#[from] toml::ser::Error),
}

/// How the configuration file was turned into an [`AppConfig`].
#[derive(Debug)]
pub enum LoadStatus {
    Parsed,
    /// No file existed; defaults were written to it.
    Created,
    /// The file did not parse and was left untouched; defaults are in use.
    Malformed(toml::de::Error),
}

/// Result of [`StorageManager::load_config`].
///
/// Loading happens before the log subscriber exists, so the status is kept
/// here and reported with [`LoadedConfig::log_status`] once logging is up.
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    pub path: PathBuf,
    pub status: LoadStatus,
}

impl LoadedConfig {
    pub fn log_status(&self) {
        let path = self.path.display();
        match &self.status {
            LoadStatus::Parsed => debug!(path = %path, "Configuration loaded"),
            LoadStatus::Created => info!(path = %path, "Config file not found, wrote defaults"),
            LoadStatus::Malformed(e) => {
                warn!(path = %path, error = %e, "Failed to parse config file, using defaults");
            }
        }
    }
}

/// Reads `config.toml`. Tasks themselves are never stored.
pub struct StorageManager {
    config_dir: PathBuf,
}

impl StorageManager {
    /// Create a new `StorageManager` rooted at the platform config directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration directory cannot be determined.
    pub fn new() -> Result<Self, ConfigError> {
        let config_dir = ProjectDirs::from(APP_QUALIFIER, APP_ORGANIZATION, APP_NAME)
            .map(|dirs| dirs.config_dir().to_path_buf())
            .ok_or(ConfigError::ConfigDirNotFound)?;

        Ok(Self { config_dir })
    }

    /// Creates a new `StorageManager` with a specific directory.
    #[must_use]
    pub fn with_dir(path: PathBuf) -> Self {
        Self { config_dir: path }
    }

    /// Loads the configuration from `path_override` or the default location.
    ///
    /// A missing file is created with defaults. A malformed file is left
    /// alone and defaults are used; the parse error is kept in the status.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or the defaults cannot be written.
    pub fn load_config(&self, path_override: Option<&Path>) -> Result<LoadedConfig, ConfigError> {
        let path = path_override.map_or_else(
            || self.config_dir.join(CONFIG_FILE_NAME),
            Path::to_path_buf,
        );

        if !path.exists() {
            let config = AppConfig::default();
            write_atomically(&path, &config)?;
            return Ok(LoadedConfig {
                config,
                path,
                status: LoadStatus::Created,
            });
        }

        let (config, status) = match toml::from_str::<AppConfig>(&fs::read_to_string(&path)?) {
            Ok(config) => (config, LoadStatus::Parsed),
            Err(e) => (AppConfig::default(), LoadStatus::Malformed(e)),
        };
        Ok(LoadedConfig {
            config,
            path,
            status,
        })
    }
}

/// Writes `data` as TOML through a temp file in the same directory, creating
/// the directory if needed.
fn write_atomically<T: serde::Serialize>(path: &Path, data: &T) -> Result<(), ConfigError> {
    let content = toml::to_string_pretty(data)?;

    let parent = path
        .parent()
        .ok_or_else(|| std::io::Error::other("Invalid path"))?;
    fs::create_dir_all(parent)?;

    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.persist(path).map_err(|e| e.error)?;

    Ok(())
}

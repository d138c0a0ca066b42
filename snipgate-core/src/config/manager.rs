//! Configuration manager for TOML file operations
//!
//! This module provides the `ConfigManager` which handles loading and saving
//! the application settings file and applying environment overrides.

use std::fs;
use std::path::{Path, PathBuf};

use secrecy::SecretString;
use url::Url;

use crate::error::{ConfigError, ConfigResult};

use super::settings::AppSettings;

const CONFIG_FILE: &str = "config.toml";

/// Environment variable overriding `store.api_url`
pub const ENV_API_URL: &str = "SNIPGATE_API_URL";
/// Environment variable overriding `store.api_token`
pub const ENV_API_TOKEN: &str = "SNIPGATE_API_TOKEN";

/// Configuration manager for `Snipgate`
///
/// Configuration is stored in `~/.config/snipgate/` by default.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Base directory for configuration files
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` with the default configuration directory
    ///
    /// # Errors
    ///
    /// Returns an error if the user configuration directory cannot be determined.
    pub fn new() -> ConfigResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| ConfigError::NotFound(PathBuf::from("~/.config")))?
            .join("snipgate");
        Ok(Self { config_dir })
    }

    /// Creates a new `ConfigManager` with a custom configuration directory
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Ensures the configuration directory exists
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> ConfigResult<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir).map_err(|e| {
                ConfigError::Write(format!(
                    "Failed to create config directory {}: {}",
                    self.config_dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    /// Loads application settings from the configuration file
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        Self::load_toml_file(&self.settings_path())
    }

    /// Loads settings and applies `SNIPGATE_*` environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file cannot be parsed.
    pub fn load_effective_settings(&self) -> ConfigResult<AppSettings> {
        let mut settings = self.load_settings()?;
        Self::apply_overrides(&mut settings, |key| std::env::var(key).ok());
        Ok(settings)
    }

    /// Applies overrides from a variable lookup on top of file settings
    pub fn apply_overrides<F>(settings: &mut AppSettings, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.trim().is_empty()) {
            settings.store.api_url = url;
        }
        if let Some(token) = lookup(ENV_API_TOKEN).filter(|v| !v.trim().is_empty()) {
            settings.store.api_token = Some(SecretString::from(token));
        }
    }

    /// Saves application settings to the configuration file
    ///
    /// The API token is never written.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_settings(&self, settings: &AppSettings) -> ConfigResult<()> {
        self.ensure_config_dir()?;
        Self::save_toml_file(&self.settings_path(), settings)
    }

    // ========== Validation ==========

    /// Validates settings required to reach the remote store
    ///
    /// # Errors
    ///
    /// Returns an error if `store.api_url` is missing or not an absolute http(s) URL.
    pub fn validate_settings(settings: &AppSettings) -> ConfigResult<Url> {
        let raw = settings.store.api_url.trim();
        if raw.is_empty() {
            return Err(ConfigError::Validation {
                field: "store.api_url".to_string(),
                reason: "API URL is required".to_string(),
            });
        }

        let url = Url::parse(raw).map_err(|e| ConfigError::Validation {
            field: "store.api_url".to_string(),
            reason: e.to_string(),
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "store.api_url".to_string(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        Ok(url)
    }

    // ========== Generic TOML Operations ==========

    /// Loads and parses a TOML file
    ///
    /// Returns the default value if the file doesn't exist.
    fn load_toml_file<T>(path: &Path) -> ConfigResult<T>
    where
        T: serde::de::DeserializeOwned + Default,
    {
        if !path.exists() {
            return Ok(T::default());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read {}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| {
            ConfigError::Deserialize(format!("Failed to parse {}: {}", path.display(), e))
        })
    }

    /// Saves data to a TOML file
    fn save_toml_file<T>(path: &Path, data: &T) -> ConfigResult<()>
    where
        T: serde::Serialize,
    {
        let content = toml::to_string_pretty(data)
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize: {e}")))?;

        fs::write(path, content)
            .map_err(|e| ConfigError::Write(format!("Failed to write {}: {}", path.display(), e)))
    }
}

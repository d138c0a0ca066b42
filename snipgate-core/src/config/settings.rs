//! Application settings model
//!
//! This module defines the application-wide settings stored in config.toml.

use std::collections::BTreeMap;

use secrecy::SecretString;
use serde::{Deserialize, Deserializer, Serialize};

/// Application-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Remote store settings
    #[serde(default)]
    pub store: StoreSettings,
    /// Trigger matching settings
    #[serde(default)]
    pub matching: MatchingSettings,
    /// File-type alias settings
    #[serde(default)]
    pub filetypes: FileTypeSettings,
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Remote store settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSettings {
    /// Base URL of the snippet store
    #[serde(default)]
    pub api_url: String,
    /// Bearer token (read from config or environment, never written back)
    #[serde(default, skip_serializing, deserialize_with = "deserialize_token")]
    pub api_token: Option<SecretString>,
}

fn deserialize_token<'de, D>(deserializer: D) -> Result<Option<SecretString>, D::Error>
where
    D: Deserializer<'de>,
{
    let token = Option::<String>::deserialize(deserializer)?;
    Ok(token
        .filter(|t| !t.trim().is_empty())
        .map(SecretString::from))
}

impl PartialEq for StoreSettings {
    fn eq(&self, other: &Self) -> bool {
        self.api_url == other.api_url
        // api_token is runtime-only and excluded from equality
    }
}

impl Eq for StoreSettings {}

/// Trigger matching settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingSettings {
    /// Compute candidates for as-you-type requests
    #[serde(default)]
    pub allow_auto_trigger: bool,
    /// Characters treated as word characters besides alphanumerics and `_`
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub extra_word_chars: String,
}

/// File-type alias settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTypeSettings {
    /// Extra pools each file type draws from, merged over the built-in table
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub aliases: BTreeMap<String, Vec<String>>,
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Fallback filter directive when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

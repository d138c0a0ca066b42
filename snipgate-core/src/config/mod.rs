//! Configuration management for `Snipgate`
//!
//! This module provides the `ConfigManager` for loading and saving
//! configuration files in TOML format.

mod manager;
pub mod settings;

pub use manager::{ConfigManager, ENV_API_TOKEN, ENV_API_URL};
pub use settings::{AppSettings, FileTypeSettings, LoggingSettings, MatchingSettings, StoreSettings};

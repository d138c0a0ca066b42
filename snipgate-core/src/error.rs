//! Error types for `Snipgate`
//!
//! This module defines all error types used throughout the `Snipgate` engine,
//! providing descriptive error messages for the remote store, trigger matching,
//! context evaluation, snippet validation, and configuration operations.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for `Snipgate` operations
#[derive(Debug, Error)]
pub enum SnipgateError {
    /// Remote snippet store errors
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Trigger pattern errors
    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    /// Context evaluation errors
    #[error("Context error: {0}")]
    Context(#[from] ContextError),

    /// Snippet validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// I/O errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while talking to the remote snippet store
#[derive(Debug, Error)]
pub enum StoreError {
    /// Network failure or non-2xx response
    #[error("Transport failure: {0}")]
    Transport(String),

    /// Response body is not the expected JSON structure
    #[error("Failed to parse store response: {0}")]
    Parse(String),

    /// Base URL cannot be combined with the snippets endpoint
    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            Self::Parse(err.to_string())
        } else {
            Self::Transport(err.to_string())
        }
    }
}

impl From<url::ParseError> for StoreError {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

/// Errors related to trigger patterns
#[derive(Debug, Error)]
pub enum MatchError {
    /// The trigger pattern does not compile
    #[error("Invalid trigger pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// The pattern as written by the snippet author
        pattern: String,
        /// The compiler's reason for rejecting it
        reason: String,
    },
}

/// Errors raised by a context validator
#[derive(Debug, Error)]
pub enum ContextError {
    /// The host failed to evaluate a context expression
    #[error("Failed to evaluate context {expression:?}: {reason}")]
    Evaluation {
        /// The expression being evaluated
        expression: String,
        /// The reason evaluation failed
        reason: String,
    },
}

/// Errors detected before a snippet is submitted to the store
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A snippet with this name already exists for the file type
    #[error("Snippet \"{name}\" already exists for {filetype}")]
    DuplicateName {
        /// The rejected name
        name: String,
        /// The file type whose pool already holds the name
        filetype: String,
    },

    /// Snippet content is empty
    #[error("Snippet content cannot be empty")]
    EmptyContent,
}

/// Errors related to configuration file operations
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to parse configuration file
    #[error("Failed to parse configuration: {0}")]
    Parse(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {reason}")]
    Validation {
        /// The field that failed validation
        field: String,
        /// The reason for validation failure
        reason: String,
    },

    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    NotFound(PathBuf),

    /// Failed to write configuration file
    #[error("Failed to write configuration: {0}")]
    Write(String),

    /// Failed to serialize configuration
    #[error("Failed to serialize configuration: {0}")]
    Serialize(String),

    /// Failed to deserialize configuration
    #[error("Failed to deserialize configuration: {0}")]
    Deserialize(String),
}

/// Result type alias for `Snipgate` operations
pub type Result<T> = std::result::Result<T, SnipgateError>;

/// Result type alias for store operations
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type alias for trigger pattern operations
pub type MatchResult<T> = std::result::Result<T, MatchError>;

/// Result type alias for context evaluation
pub type ContextResult<T> = std::result::Result<T, ContextError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

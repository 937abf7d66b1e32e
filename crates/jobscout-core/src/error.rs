//! Core error types for JobScout.
//!
//! This module defines the error types shared by the data model and the
//! configuration layer.

use std::path::PathBuf;
use thiserror::Error;

/// Central error type for JobScout operations.
///
/// Subsystem crates (scanner, enrich, export) carry their own typed errors;
/// this covers the shared model and configuration layer.
#[derive(Error, Debug)]
pub enum JobScoutError {
    /// Configuration errors (file loading, parsing, credentials)
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors (invalid input, constraints)
    #[error("validation error: {0}")]
    Validation(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// No home directory to place `jobscout/config.toml` under
    #[error("no user config directory available; pass --config explicitly")]
    NoConfigDir,

    /// `--config` pointed at a file that does not exist
    #[error("config file not found: {}", path.display())]
    NotFound {
        /// Requested path
        path: PathBuf,
    },

    /// The file is not valid TOML or has wrongly typed values
    #[error("invalid config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// Reading the config file failed
    #[error("config I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A required credential is absent from the environment
    #[error("missing credential: {name} must be set in the environment or .env file")]
    MissingCredential {
        /// Environment variable name
        name: &'static str,
    },

    /// A value parsed but cannot be used, e.g. a zero timeout
    #[error("{field}: {reason}")]
    InvalidValue {
        /// Dotted field path, e.g. `search.request_timeout_secs`
        field: String,
        /// What is wrong with it
        reason: String,
    },
}

/// Result type alias using `JobScoutError`.
pub type Result<T> = std::result::Result<T, JobScoutError>;

/// Result type alias for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

//! Error types for the command-line driver.

use std::path::PathBuf;

use parcel_core::{CoreError, MoneyParseError, ValidationError};
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// Everything that can stop a `parcel` run.
#[derive(Debug, Error)]
pub enum CliError {
    // =========================================================================
    // Configuration Errors
    // =========================================================================
    /// Explicitly requested config file does not exist.
    #[error("Config file not found: {}", .0.display())]
    ConfigNotFound(PathBuf),

    /// Config parsed but holds unusable values.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    /// File could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File is not valid TOML for its purpose.
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Item price is not a decimal amount.
    #[error("Invalid price '{value}' for item '{item}': {source}")]
    InvalidPrice {
        item: String,
        value: String,
        #[source]
        source: MoneyParseError,
    },

    // =========================================================================
    // Order Errors
    // =========================================================================
    /// Input rejected by strict validation.
    #[error("Invalid order: {0}")]
    Validation(#[from] ValidationError),

    /// Order rule violated.
    #[error("Invalid order: {0}")]
    Core(#[from] CoreError),

    // =========================================================================
    // Output Errors
    // =========================================================================
    #[error("Failed to render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

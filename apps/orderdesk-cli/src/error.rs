//! # CLI Error Types
//!
//! ## Error Categories
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Usage        bad command-line arguments                               │
//! │  Config       unreadable or invalid orderdesk.toml / env override      │
//! │  Batch        unreadable or malformed batch JSON                        │
//! │  Core         policy rejected by orderdesk-core                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Rejected orders are not errors here; they end up in the report.

use orderdesk_core::CoreError;
use thiserror::Error;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    /// Bad command-line arguments.
    #[error("{0}")]
    Usage(String),

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Config file is not valid TOML for `OrderdeskConfig`.
    #[error("Failed to parse config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Batch file is not valid JSON for a batch.
    #[error("Failed to parse batch: {0}")]
    BatchParse(String),

    /// Failed to write the report.
    #[error("Serialization failed: {0}")]
    SerializationFailed(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_io() {
            CliError::SerializationFailed(err.to_string())
        } else {
            CliError::BatchParse(err.to_string())
        }
    }
}

//! Error types for logger configuration

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for logger configuration
pub type Result<T> = std::result::Result<T, LoggingError>;

/// Errors raised while configuring a logger.
///
/// Logging itself never fails once setup succeeded; every variant here is
/// produced by setup, configuration loading, or installation.
#[derive(Error, Debug)]
pub enum LoggingError {
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("IO error on `{}`: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("A global logger is already installed")]
    AlreadyInstalled,
}

impl LoggingError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

//! Error types for wellness-core

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using wellness-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in wellness-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// Writing the header or a row to the log failed
    #[error("Failed to save to {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Export requested before anything was ever saved
    #[error("No saved data at {}; save a day first", .0.display())]
    LogNotFound(PathBuf),

    /// The sharing facility failed to hand off the log
    #[error("Share failed: {0}")]
    Share(String),

    /// Record shape does not match the configured question set
    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration file could not be read or written
    #[error("Configuration error: {0}")]
    Config(String),

    /// Background task failed before completing
    #[error("Task error: {0}")]
    Task(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn persistence(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            source,
        }
    }
}

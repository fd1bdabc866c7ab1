// Rust guideline compliant 2026-10-16

//! Error types for the tracegraph core library.

use thiserror::Error;

/// Result type alias for tracegraph operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for tracegraph operations.
///
/// Data-quality problems (duplicate ids, unsound edges, unrecognized types)
/// are never errors; they are logged and counted instead.
#[derive(Debug, Error)]
pub enum Error {
    /// IO error occurred.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid configuration file or value.
    #[error("Invalid config: {0}")]
    Config(String),

    /// The tracker source failed; fatal for the current run.
    #[error("Tracker source failed during {operation}: {message}")]
    Source {
        /// The fetch being performed (e.g. "search issues").
        operation: String,
        /// Underlying failure description.
        message: String,
    },

    /// A graph document could not be interpreted.
    #[error("Invalid document: {0}")]
    InvalidDocument(String),
}

impl Error {
    /// Builds a [`Error::Source`] for the given operation.
    pub fn source_failure(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Source {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

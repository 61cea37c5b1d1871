//! MozLog error types.

use thiserror::Error;

/// Errors that can occur while writing MozLog lines.
#[derive(Debug, Error)]
pub enum MozLogError {
    /// Failed to open the log file.
    #[error("Failed to open log file '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write a line to the sink.
    #[error("Failed to write log line: {0}")]
    Write(#[from] std::io::Error),

    /// Failed to serialize the entry.
    #[error("Failed to serialize log entry: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Caller-supplied detail was not a JSON object.
    #[error("Log detail must be a JSON object, got: {0}")]
    InvalidDetail(String),

    /// A previous writer panicked while holding the sink.
    #[error("Log sink lock poisoned")]
    Poisoned,
}

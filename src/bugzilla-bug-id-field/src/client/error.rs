//! Bugzilla client error types.

use thiserror::Error;

/// Errors that prevent a permissions lookup from producing a response.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The request could not be sent or timed out.
    #[error("Request to '{url}' failed: {source}")]
    Request {
        url: String,
        #[source]
        source: Box<ureq::Transport>,
    },

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    ReadBody(#[from] std::io::Error),

    /// The configured base URL can't have path segments appended.
    #[error("Bugzilla URL '{url}' cannot be used as a base URL")]
    InvalidBaseUrl { url: String },
}

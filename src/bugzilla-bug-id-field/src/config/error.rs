//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while loading or validating configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to read a file.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse TOML content.
    #[error("Failed to parse config file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// A required setting was not provided by the file, environment or flags.
    #[error("Missing required setting '{key}' (set it in the config file or via {env})")]
    MissingSetting {
        key: &'static str,
        env: &'static str,
    },

    /// The Bugzilla URL could not be parsed.
    #[error("Invalid Bugzilla URL '{value}': {source}")]
    InvalidUrl {
        value: String,
        #[source]
        source: url::ParseError,
    },

    /// Validation error in a setting.
    #[error("Invalid setting '{key}': {message}")]
    ValidationError { key: &'static str, message: String },
}

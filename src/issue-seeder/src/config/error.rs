//! Configuration error types.

use thiserror::Error;

/// Errors that can occur while resolving run configuration.
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
    #[error("Failed to parse settings file '{path}': {source}")]
    TomlError {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// Validation error in settings.
    #[error("Validation error in '{path}': {message}")]
    ValidationError { path: String, message: String },

    /// A required credential or identifier was not supplied.
    #[error("Missing required configuration: {names}")]
    MissingValue { names: String },

    /// The target repository is not in `owner/name` form.
    #[error("Invalid repository '{value}': expected 'owner/name'")]
    InvalidRepository { value: String },
}

impl ConfigError {
    /// Returns true for errors caused by absent or malformed process inputs
    /// (credential, repository), as opposed to an unreadable settings file.
    #[must_use]
    pub fn is_missing_input(&self) -> bool {
        matches!(
            self,
            Self::MissingValue { .. } | Self::InvalidRepository { .. }
        )
    }
}

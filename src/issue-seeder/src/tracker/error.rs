//! Tracker error types.

use thiserror::Error;

/// Errors that can occur while talking to the issue tracker.
#[derive(Debug, Error)]
pub enum TrackerError {
    /// GitHub answered with an error status.
    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// GitHub API error that never got an HTTP answer (transport, decoding).
    #[error("GitHub API error: {0}")]
    GitHubError(#[source] octocrab::Error),

    /// A request path could not be built from the given segments.
    #[error("Invalid request path: {message}")]
    InvalidRoute { message: String },

    /// Any other tracker failure.
    #[error("{message}")]
    Other { message: String },
}

impl From<octocrab::Error> for TrackerError {
    fn from(error: octocrab::Error) -> Self {
        match error {
            octocrab::Error::GitHub { source, .. } => TrackerError::Api {
                status: source.status_code.as_u16(),
                message: source.to_string(),
            },
            other => TrackerError::GitHubError(other),
        }
    }
}

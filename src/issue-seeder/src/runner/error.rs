//! Runner error types.

use crate::config::ConfigError;
use crate::report::ReportError;
use crate::sheet::SheetError;
use crate::tracker::TrackerError;

/// Fatal errors that stop a run before or after row processing.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Credentials, repository or settings problems.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The spreadsheet could not be read or was empty.
    #[error(transparent)]
    Sheet(#[from] SheetError),

    /// The tracker client could not be built.
    #[error(transparent)]
    Tracker(#[from] TrackerError),

    /// A base label could not be ensured.
    #[error("Failed to ensure base label '{label}': {source}")]
    BaseLabel {
        label: String,
        #[source]
        source: TrackerError,
    },

    /// The report could not be written.
    #[error(transparent)]
    Report(#[from] ReportError),
}

impl RunnerError {
    /// Process exit code for this failure.
    ///
    /// * `2` - missing or malformed credential/repository
    /// * `3` - spreadsheet without content
    /// * `1` - anything else
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            RunnerError::Config(e) if e.is_missing_input() => 2,
            RunnerError::Sheet(SheetError::Empty { .. }) => 3,
            _ => 1,
        }
    }
}

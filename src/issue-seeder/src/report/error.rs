//! Report writing error types.

use thiserror::Error;

/// Errors that can occur while writing the seed report.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The CSV file could not be created or written.
    #[error("Failed to write report '{path}': {source}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },

    /// The CSV file could not be flushed to disk.
    #[error("Failed to flush report '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

//! Spreadsheet loading error types.

use thiserror::Error;

/// Errors that can occur while reading the task spreadsheet.
#[derive(Debug, Error)]
pub enum SheetError {
    /// The workbook could not be opened.
    #[error("Failed to open spreadsheet '{path}': {source}")]
    Open {
        path: String,
        #[source]
        source: calamine::Error,
    },

    /// A sheet in the workbook could not be read.
    #[error("Failed to read sheet '{sheet}' in '{path}': {source}")]
    Sheet {
        path: String,
        sheet: String,
        #[source]
        source: calamine::Error,
    },

    /// No sheet in the workbook had any content.
    #[error("Spreadsheet '{path}' has no readable content")]
    Empty { path: String },
}

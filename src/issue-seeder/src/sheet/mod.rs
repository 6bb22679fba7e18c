//! Spreadsheet ingestion.
//!
//! Every sheet of the workbook is read in order and the data rows are
//! concatenated; the first row of each sheet holds the headers.

mod columns;
mod error;
mod row;

pub use columns::{Column, ColumnMap};
pub use error::SheetError;
pub use row::SeedRow;

use calamine::{open_workbook_auto, Reader};
use std::path::Path;
use tracing::{debug, info};

/// Loads all task rows from the workbook at `path`.
///
/// Sheets without any columns are ignored. Row numbers are 1-based and run
/// continuously across sheets.
///
/// # Errors
///
/// Returns [`SheetError::Empty`] if no sheet had content, or another
/// [`SheetError`] if the workbook or a sheet cannot be read.
pub fn load_rows(path: &Path) -> Result<Vec<SeedRow>, SheetError> {
    info!(path = %path.display(), "Reading spreadsheet");
    let path_str = path.display().to_string();

    let mut workbook = open_workbook_auto(path).map_err(|source| SheetError::Open {
        path: path_str.clone(),
        source,
    })?;

    let mut rows = Vec::new();
    let mut sheets_read = 0usize;

    for sheet in workbook.sheet_names() {
        let range = workbook
            .worksheet_range(&sheet)
            .map_err(|source| SheetError::Sheet {
                path: path_str.clone(),
                sheet: sheet.clone(),
                source,
            })?;

        let mut lines = range.rows();
        let Some(headers) = lines.next() else {
            debug!(sheet = %sheet, "Skipping empty sheet");
            continue;
        };

        let columns = ColumnMap::from_headers(headers);
        sheets_read += 1;

        for cells in lines {
            let row_number = rows.len() + 1;
            rows.push(columns.read_row(row_number, &sheet, cells));
        }
        debug!(sheet = %sheet, total = rows.len(), "Read sheet");
    }

    if sheets_read == 0 {
        return Err(SheetError::Empty { path: path_str });
    }

    info!(rows = rows.len(), sheets = sheets_read, "Spreadsheet loaded");
    Ok(rows)
}

//! Run summary types.

use super::row::{ReportRow, RowStatus};
use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of spreadsheet rows processed.
    pub rows: usize,

    /// Rows skipped for a missing seed id or title.
    pub skipped: usize,

    /// Rows whose issue already existed.
    pub existing: usize,

    /// Rows that would have been created in a dry run.
    pub dry_run_rows: usize,

    /// Issues created.
    pub created: usize,

    /// Rows that failed.
    pub failed: usize,

    /// Whether this was a dry run.
    pub dry_run: bool,

    /// Where the report was written.
    pub report_path: PathBuf,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool, report_path: PathBuf) -> Self {
        Self {
            dry_run,
            report_path,
            ..Default::default()
        }
    }

    /// Updates the summary with one report row.
    pub fn record(&mut self, row: &ReportRow) {
        self.rows += 1;
        match row.status {
            RowStatus::Skip => self.skipped += 1,
            RowStatus::Exists => self.existing += 1,
            RowStatus::DryRun => self.dry_run_rows += 1,
            RowStatus::Created => self.created += 1,
            RowStatus::Error => self.failed += 1,
        }
    }

    /// Returns true if any row failed.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0
    }
}

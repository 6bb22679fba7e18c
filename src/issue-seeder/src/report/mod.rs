//! The seed report: one CSV line per spreadsheet row.
//!
//! Rows are collected in memory while the batch runs and written out in one
//! go afterwards, so the file never holds a partial batch.

mod error;
mod row;
mod summary;

pub use error::ReportError;
pub use row::{ReportRow, RowStatus};
pub use summary::RunSummary;

use std::path::Path;
use tracing::info;

/// CSV header of the report.
pub const REPORT_HEADER: [&str; 6] = ["status", "row", "task", "issue", "reason", "error"];

/// Accumulates report rows for a run.
#[derive(Debug, Clone, Default)]
pub struct SeedReport {
    rows: Vec<ReportRow>,
}

impl SeedReport {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the outcome of one row.
    pub fn push(&mut self, row: ReportRow) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Builds the run summary from the collected rows.
    #[must_use]
    pub fn summary(&self, dry_run: bool, report_path: &Path) -> RunSummary {
        let mut summary = RunSummary::new(dry_run, report_path.to_path_buf());
        for row in &self.rows {
            summary.record(row);
        }
        summary
    }

    /// Writes the header and every row to `path`, replacing any existing file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if the file cannot be written.
    pub fn write(&self, path: &Path) -> Result<(), ReportError> {
        let path_str = path.display().to_string();
        let csv_err = |source: csv::Error| ReportError::Csv {
            path: path_str.clone(),
            source,
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)
            .map_err(csv_err)?;

        writer.write_record(REPORT_HEADER).map_err(csv_err)?;
        for row in &self.rows {
            writer.serialize(row).map_err(csv_err)?;
        }
        writer.flush().map_err(|source| ReportError::Io {
            path: path_str.clone(),
            source,
        })?;

        info!(path = %path.display(), rows = self.rows.len(), "Report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn writes_header_and_rows() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("seed-report.csv");

        let mut report = SeedReport::new();
        report.push(ReportRow::created(
            1,
            "Setup repo",
            "https://github.com/acme/backlog/issues/1",
            "seed:W1-01",
        ));
        report.push(ReportRow::dry_run(2, "Write docs, tests"));
        report.push(ReportRow::skip(3, "", "missing uid/title"));
        report.push(ReportRow::error(4, "Deploy", "GitHub API error: \"boom\""));
        report.write(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();

        assert_eq!(
            lines,
            [
                "status,row,task,issue,reason,error",
                "created,1,Setup repo,https://github.com/acme/backlog/issues/1,seed:W1-01,",
                "dry-run,2,\"Write docs, tests\",,,",
                "skip,3,,,missing uid/title,",
                "error,4,Deploy,,,\"GitHub API error: \"\"boom\"\"\"",
            ]
        );
    }

    #[test]
    fn empty_report_still_has_header() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("seed-report.csv");

        SeedReport::new().write(&path).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(
            content.lines().collect::<Vec<_>>(),
            ["status,row,task,issue,reason,error"]
        );
    }

    #[test]
    fn summary_counts_rows() {
        let mut report = SeedReport::new();
        report.push(ReportRow::dry_run(1, "a"));
        report.push(ReportRow::dry_run(2, "b"));

        let summary = report.summary(true, Path::new("r.csv"));
        assert_eq!(summary.rows, 2);
        assert_eq!(summary.dry_run_rows, 2);
        assert!(summary.dry_run);
    }
}

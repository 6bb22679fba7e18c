//! Per-row audit records.

use serde::Serialize;
use std::fmt;

/// Terminal outcome of processing one spreadsheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RowStatus {
    /// Row lacked a seed id or title; nothing was sent.
    Skip,
    /// An issue for the seed id already existed.
    Exists,
    /// Issue would have been created, but creation was suppressed.
    DryRun,
    /// Issue was created.
    Created,
    /// A tracker call failed for this row.
    Error,
}

impl RowStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            RowStatus::Skip => "skip",
            RowStatus::Exists => "exists",
            RowStatus::DryRun => "dry-run",
            RowStatus::Created => "created",
            RowStatus::Error => "error",
        }
    }
}

impl fmt::Display for RowStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One line of the seed report. Field order is the CSV column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub status: RowStatus,
    /// 1-based source row number.
    pub row: usize,
    /// Task title, empty when absent.
    pub task: String,
    /// Issue URL, empty unless the issue exists or was created.
    pub issue: String,
    pub reason: String,
    pub error: String,
}

impl ReportRow {
    fn new(status: RowStatus, row: usize, task: &str) -> Self {
        Self {
            status,
            row,
            task: task.to_string(),
            issue: String::new(),
            reason: String::new(),
            error: String::new(),
        }
    }

    #[must_use]
    pub fn skip(row: usize, task: &str, reason: &str) -> Self {
        Self {
            reason: reason.to_string(),
            ..Self::new(RowStatus::Skip, row, task)
        }
    }

    #[must_use]
    pub fn exists(row: usize, task: &str, url: &str, seed_label: &str) -> Self {
        Self {
            issue: url.to_string(),
            reason: seed_label.to_string(),
            ..Self::new(RowStatus::Exists, row, task)
        }
    }

    #[must_use]
    pub fn dry_run(row: usize, task: &str) -> Self {
        Self::new(RowStatus::DryRun, row, task)
    }

    #[must_use]
    pub fn created(row: usize, task: &str, url: &str, seed_label: &str) -> Self {
        Self {
            issue: url.to_string(),
            reason: seed_label.to_string(),
            ..Self::new(RowStatus::Created, row, task)
        }
    }

    #[must_use]
    pub fn error(row: usize, task: &str, error: &str) -> Self {
        Self {
            error: error.to_string(),
            ..Self::new(RowStatus::Error, row, task)
        }
    }
}

//! Per-row upsert decision.

use crate::config::SeedSettings;
use crate::issues::{build_body, find_by_seed, marker_seed_id};
use crate::labels::{dynamic_labels, ensure_label, seed_label, LabelSpec};
use crate::report::ReportRow;
use crate::sheet::SeedRow;
use crate::tracker::{NewIssue, TrackedIssue, Tracker, TrackerError};
use tracing::{info, info_span, warn, Instrument};

/// Reason recorded for rows without a seed id or title.
pub const MISSING_IDENTITY: &str = "missing uid/title";

/// Turns spreadsheet rows into issues, at most one per seed id.
pub struct RowProcessor<'a> {
    tracker: &'a dyn Tracker,
    settings: &'a SeedSettings,
    dry_run: bool,
}

enum Upsert {
    Exists(TrackedIssue),
    DryRun,
    Created(TrackedIssue),
}

impl<'a> RowProcessor<'a> {
    #[must_use]
    pub fn new(tracker: &'a dyn Tracker, settings: &'a SeedSettings, dry_run: bool) -> Self {
        Self {
            tracker,
            settings,
            dry_run,
        }
    }

    /// Processes one row and reports its outcome. Never fails: tracker errors
    /// become an `error` report row.
    pub async fn process_row(&self, row: &SeedRow) -> ReportRow {
        let task = row.task.as_deref().unwrap_or_default();
        let Some((seed_id, title)) = row.identity() else {
            info!(row = row.row_number, "Skipping row without seed id or title");
            return ReportRow::skip(row.row_number, task, MISSING_IDENTITY);
        };

        let span = info_span!("process_row", row = row.row_number, seed = %seed_id);
        let label = seed_label(seed_id);

        match self.upsert(row, seed_id, title).instrument(span).await {
            Ok(Upsert::Exists(issue)) => {
                ReportRow::exists(row.row_number, title, &issue.url, &label)
            }
            Ok(Upsert::DryRun) => ReportRow::dry_run(row.row_number, title),
            Ok(Upsert::Created(issue)) => {
                let report = ReportRow::created(row.row_number, title, &issue.url, &label);
                tokio::time::sleep(self.settings.creation_delay()).await;
                report
            }
            Err(e) => {
                warn!(row = row.row_number, seed = %seed_id, error = %e, "Row failed");
                ReportRow::error(row.row_number, title, &e.to_string())
            }
        }
    }

    async fn upsert(
        &self,
        row: &SeedRow,
        seed_id: &str,
        title: &str,
    ) -> Result<Upsert, TrackerError> {
        let labels = dynamic_labels(row, &self.settings.label_colors);
        for label in &labels {
            ensure_label(self.tracker, label).await?;
        }

        let existing = find_by_seed(self.tracker, seed_id, self.settings.page_size).await?;
        if let Some(existing) = existing {
            check_provenance(&existing, seed_id);
            info!(issue_number = existing.number, url = %existing.url, "Issue already exists");
            return Ok(Upsert::Exists(existing));
        }

        let issue = NewIssue {
            title: title.to_string(),
            body: build_body(row, seed_id),
            labels: labels.into_iter().map(|LabelSpec { name, .. }| name).collect(),
        };

        if self.dry_run {
            info!(labels = ?issue.labels, "Dry run, not creating issue");
            return Ok(Upsert::DryRun);
        }

        let created = self.tracker.create_issue(&issue).await?;
        info!(issue_number = created.number, url = %created.url, "Issue created");
        Ok(Upsert::Created(created))
    }
}

/// Warns when an issue found by seed label carries a body marker for a
/// different row. The label stays authoritative.
fn check_provenance(issue: &TrackedIssue, seed_id: &str) {
    match issue.body.as_deref().and_then(marker_seed_id) {
        Some(marker) if marker == seed_id => {}
        Some(marker) => warn!(
            issue_number = issue.number,
            marker, "Seed marker in issue body names a different seed id"
        ),
        None => warn!(issue_number = issue.number, "Issue body has no seed marker"),
    }
}

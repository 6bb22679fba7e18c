//! Orchestrates a seeding run.

mod config;
mod error;
mod processor;

pub use config::{RunnerConfig, DEFAULT_REPORT_PATH, DEFAULT_SPREADSHEET_PATH};
pub use error::RunnerError;
pub use processor::{RowProcessor, MISSING_IDENTITY};

use crate::labels::ensure_label;
use crate::report::{RunSummary, SeedReport};
use crate::sheet::load_rows;
use crate::tracker::{GitHubTracker, Tracker};
use std::sync::Arc;
use tracing::{info, warn};

/// Runs the spreadsheet-to-issues seeding flow.
pub struct Runner {
    config: RunnerConfig,
    tracker: Arc<dyn Tracker>,
}

impl Runner {
    /// Builds a runner talking to GitHub.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Tracker`] if the API client cannot be built.
    pub fn new(config: RunnerConfig) -> Result<Self, RunnerError> {
        let settings = config.settings();
        let tracker = GitHubTracker::new(
            config.api_url(),
            &config.credentials().token,
            config.credentials().repository.clone(),
            settings.request_timeout(),
            settings.rate_limit_wait(),
        )?;
        Ok(Self::with_tracker(config, Arc::new(tracker)))
    }

    /// Builds a runner over any tracker.
    pub fn with_tracker(config: RunnerConfig, tracker: Arc<dyn Tracker>) -> Self {
        Self { config, tracker }
    }

    /// Executes the full flow: read rows, ensure base labels, process every
    /// row in order, then write the report.
    ///
    /// Row failures are recorded in the report and do not fail the run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if the spreadsheet cannot be read, a base label
    /// cannot be ensured, or the report cannot be written.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let config = &self.config;
        info!(
            repo = %config.credentials().repository,
            dry_run = config.dry_run(),
            "Starting seed run"
        );

        let rows = load_rows(config.spreadsheet_path())?;

        for label in &config.settings().base_labels {
            ensure_label(self.tracker.as_ref(), label)
                .await
                .map_err(|source| RunnerError::BaseLabel {
                    label: label.name.clone(),
                    source,
                })?;
        }

        let processor =
            RowProcessor::new(self.tracker.as_ref(), config.settings(), config.dry_run());
        let mut report = SeedReport::new();
        for row in &rows {
            report.push(processor.process_row(row).await);
        }

        report.write(config.report_path())?;

        let summary = report.summary(config.dry_run(), config.report_path());
        if summary.has_failures() {
            warn!(failed = summary.failed, "Some rows failed, see report");
        }
        info!(rows = summary.rows, created = summary.created, "Seed run finished");
        Ok(summary)
    }
}

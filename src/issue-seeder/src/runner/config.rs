//! Runner configuration.

use crate::config::{Credentials, SeedSettings};
use crate::tracker::DEFAULT_API_URL;
use std::path::{Path, PathBuf};

/// Default location of the task spreadsheet.
pub const DEFAULT_SPREADSHEET_PATH: &str = "backlog/ISSUE.xlsx";

/// Default location of the seed report.
pub const DEFAULT_REPORT_PATH: &str = "seed-report.csv";

/// Configuration for a seeding run.
#[derive(Debug, Clone)]
pub struct RunnerConfig {
    /// Token and target repository.
    credentials: Credentials,
    /// Path to the task spreadsheet.
    spreadsheet_path: PathBuf,
    /// Path the CSV report is written to.
    report_path: PathBuf,
    /// Whether to suppress issue creation.
    dry_run: bool,
    /// GitHub API root.
    api_url: String,
    /// Labels, pacing and paging.
    settings: SeedSettings,
}

impl RunnerConfig {
    /// Creates a configuration with default paths and settings.
    pub fn new(credentials: Credentials, dry_run: bool) -> Self {
        Self {
            credentials,
            spreadsheet_path: PathBuf::from(DEFAULT_SPREADSHEET_PATH),
            report_path: PathBuf::from(DEFAULT_REPORT_PATH),
            dry_run,
            api_url: DEFAULT_API_URL.to_string(),
            settings: SeedSettings::default(),
        }
    }

    /// Sets the spreadsheet path.
    pub fn with_spreadsheet_path(mut self, path: PathBuf) -> Self {
        self.spreadsheet_path = path;
        self
    }

    /// Sets the report path.
    pub fn with_report_path(mut self, path: PathBuf) -> Self {
        self.report_path = path;
        self
    }

    /// Sets the API root, e.g. for GitHub Enterprise.
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }

    /// Replaces the settings.
    pub fn with_settings(mut self, settings: SeedSettings) -> Self {
        self.settings = settings;
        self
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub fn spreadsheet_path(&self) -> &Path {
        &self.spreadsheet_path
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn settings(&self) -> &SeedSettings {
        &self.settings
    }
}

#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod issues;
pub mod labels;
pub mod rate_limit;
pub mod report;
pub mod runner;
pub mod sheet;
pub mod tracker;

pub use config::{ConfigError, Credentials, LabelColors, RepositoryId, SeedSettings};
pub use issues::{build_body, find_by_seed, marker_seed_id, seed_marker};
pub use labels::{dynamic_labels, ensure_label, seed_label, LabelSpec, SEED_LABEL_PREFIX};
pub use rate_limit::{is_rate_limit_response, retry_once_on_rate_limit, RateLimitSignal};
pub use report::{ReportError, ReportRow, RowStatus, RunSummary, SeedReport, REPORT_HEADER};
pub use runner::{RowProcessor, Runner, RunnerConfig, RunnerError, MISSING_IDENTITY};
pub use sheet::{load_rows, SeedRow, SheetError};
pub use tracker::{
    GitHubTracker, LabelLookup, NewIssue, TrackedIssue, Tracker, TrackerError, DEFAULT_API_URL,
};

//! Issue tracker access.
//!
//! [`Tracker`] is the narrow surface the seeder needs from a tracker: label
//! lookup and creation, label-filtered issue listing, and issue creation.
//! [`GitHubTracker`] implements it over the GitHub REST API.

mod error;
mod github;
mod types;

pub use error::TrackerError;
pub use github::{GitHubTracker, DEFAULT_API_URL};
pub use types::{LabelLookup, NewIssue, TrackedIssue};

use crate::labels::LabelSpec;
use async_trait::async_trait;

/// Operations the seeder performs against an issue tracker.
#[async_trait]
pub trait Tracker: Send + Sync {
    /// Looks a label up by exact name.
    async fn get_label(&self, name: &str) -> Result<LabelLookup, TrackerError>;

    /// Creates a label.
    async fn create_label(&self, label: &LabelSpec) -> Result<(), TrackerError>;

    /// Lists one page (1-based) of issues in any state carrying `label`.
    ///
    /// The listing may include pull requests.
    async fn list_issues(
        &self,
        label: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<TrackedIssue>, TrackerError>;

    /// Creates an issue and returns it.
    async fn create_issue(&self, issue: &NewIssue) -> Result<TrackedIssue, TrackerError>;
}

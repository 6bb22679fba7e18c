//! Tracker-facing data shapes.

use serde::Serialize;

/// Outcome of looking a label up by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelLookup {
    Found,
    NotFound,
}

/// An issue (or pull request) as returned by the tracker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedIssue {
    /// Issue number.
    pub number: u64,

    /// Browser URL of the issue.
    pub url: String,

    /// Names of the labels attached to the issue.
    pub labels: Vec<String>,

    /// Whether the listing entry is actually a pull request.
    pub is_pull_request: bool,

    /// Issue body, if any.
    pub body: Option<String>,
}

impl TrackedIssue {
    /// Whether the issue carries a label with exactly this name.
    #[must_use]
    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label == name)
    }
}

/// Payload for creating an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NewIssue {
    pub title: String,
    pub body: String,
    pub labels: Vec<String>,
}

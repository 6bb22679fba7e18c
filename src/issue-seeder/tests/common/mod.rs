//! In-memory tracker used by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use issue_seeder::{LabelLookup, LabelSpec, NewIssue, TrackedIssue, Tracker, TrackerError};
use std::collections::{BTreeMap, HashSet};
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    GetLabel(String),
    CreateLabel(String),
    ListIssues { label: String, page: u32, per_page: u8 },
    CreateIssue(NewIssue),
}

#[derive(Default)]
struct State {
    labels: BTreeMap<String, LabelSpec>,
    issues: Vec<TrackedIssue>,
    calls: Vec<Call>,
    failing_labels: HashSet<String>,
    failing_titles: HashSet<String>,
    prefix_label_filter: bool,
}

/// A tracker that keeps labels and issues in memory and records every call.
#[derive(Default)]
pub struct FakeTracker {
    state: Mutex<State>,
}

impl FakeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_label(self, name: &str) -> Self {
        self.state
            .lock()
            .unwrap()
            .labels
            .insert(name.to_string(), LabelSpec::new(name, "ffffff"));
        self
    }

    /// Adds an issue (or pull request) with the given labels and returns its URL.
    pub fn add_issue(&self, labels: &[&str], is_pull_request: bool, body: Option<&str>) -> String {
        let mut state = self.state.lock().unwrap();
        let number = state.issues.len() as u64 + 1;
        let kind = if is_pull_request { "pull" } else { "issues" };
        let url = format!("https://github.com/acme/backlog/{kind}/{number}");
        state.issues.push(TrackedIssue {
            number,
            url: url.clone(),
            labels: labels.iter().map(|l| l.to_string()).collect(),
            is_pull_request,
            body: body.map(str::to_string),
        });
        url
    }

    /// Makes the existence check for `name` fail with a server error.
    pub fn fail_label(&self, name: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_labels
            .insert(name.to_string());
    }

    /// Makes creating an issue titled `title` fail.
    pub fn fail_issue(&self, title: &str) {
        self.state
            .lock()
            .unwrap()
            .failing_titles
            .insert(title.to_string());
    }

    /// Filters listings by label prefix instead of exact name.
    pub fn use_prefix_label_filter(&self) {
        self.state.lock().unwrap().prefix_label_filter = true;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn created_issues(&self) -> Vec<NewIssue> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateIssue(issue) => Some(issue),
                _ => None,
            })
            .collect()
    }

    pub fn created_labels(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter_map(|call| match call {
                Call::CreateLabel(name) => Some(name),
                _ => None,
            })
            .collect()
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.state.lock().unwrap().labels.contains_key(name)
    }

    pub fn label(&self, name: &str) -> Option<LabelSpec> {
        self.state.lock().unwrap().labels.get(name).cloned()
    }

    pub fn issue_count(&self) -> usize {
        self.state
            .lock()
            .unwrap()
            .issues
            .iter()
            .filter(|i| !i.is_pull_request)
            .count()
    }
}

#[async_trait]
impl Tracker for FakeTracker {
    async fn get_label(&self, name: &str) -> Result<LabelLookup, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::GetLabel(name.to_string()));
        if state.failing_labels.contains(name) {
            return Err(TrackerError::Other {
                message: format!("label lookup failed for {name}"),
            });
        }
        Ok(if state.labels.contains_key(name) {
            LabelLookup::Found
        } else {
            LabelLookup::NotFound
        })
    }

    async fn create_label(&self, label: &LabelSpec) -> Result<(), TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateLabel(label.name.clone()));
        state.labels.insert(label.name.clone(), label.clone());
        Ok(())
    }

    async fn list_issues(
        &self,
        label: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<TrackedIssue>, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::ListIssues {
            label: label.to_string(),
            page,
            per_page,
        });

        let prefix = state.prefix_label_filter;
        let matching: Vec<TrackedIssue> = state
            .issues
            .iter()
            .filter(|issue| {
                issue.labels.iter().any(|l| {
                    if prefix {
                        l.starts_with(label)
                    } else {
                        l == label
                    }
                })
            })
            .cloned()
            .collect();

        let start = (page.saturating_sub(1) as usize) * per_page as usize;
        Ok(matching
            .into_iter()
            .skip(start)
            .take(per_page as usize)
            .collect())
    }

    async fn create_issue(&self, issue: &NewIssue) -> Result<TrackedIssue, TrackerError> {
        let mut state = self.state.lock().unwrap();
        state.calls.push(Call::CreateIssue(issue.clone()));
        if state.failing_titles.contains(&issue.title) {
            return Err(TrackerError::Other {
                message: format!("Validation Failed for '{}'", issue.title),
            });
        }

        let number = state.issues.len() as u64 + 1;
        let created = TrackedIssue {
            number,
            url: format!("https://github.com/acme/backlog/issues/{number}"),
            labels: issue.labels.clone(),
            is_pull_request: false,
            body: Some(issue.body.clone()),
        };
        state.issues.push(created.clone());
        Ok(created)
    }
}

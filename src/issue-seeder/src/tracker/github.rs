//! GitHub REST implementation of [`Tracker`].

use super::{LabelLookup, NewIssue, TrackedIssue, Tracker, TrackerError};
use crate::config::RepositoryId;
use crate::labels::LabelSpec;
use crate::rate_limit::retry_once_on_rate_limit;
use async_trait::async_trait;
use http::header::ACCEPT;
use octocrab::service::middleware::retry::RetryConfig;
use octocrab::Octocrab;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// Public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const ACCEPT_GITHUB_JSON: &str = "application/vnd.github+json";

/// Only used to percent-encode path segments; never requested.
const ROUTE_BASE: &str = "http://route.invalid/";

/// [`Tracker`] backed by a GitHub repository.
pub struct GitHubTracker {
    octocrab: Octocrab,
    repository: RepositoryId,
    rate_limit_wait: Duration,
}

impl GitHubTracker {
    /// Builds an authenticated client for `repository`.
    ///
    /// Every request carries the token as a bearer credential and the GitHub
    /// JSON media type, and is bounded by `timeout` for connect and read.
    /// The client never retries on its own; rate limits are retried once by
    /// [`retry_once_on_rate_limit`] and nothing else is replayed.
    ///
    /// # Errors
    ///
    /// Returns [`TrackerError`] if `api_url` is invalid or the client cannot
    /// be built.
    pub fn new(
        api_url: &str,
        token: &str,
        repository: RepositoryId,
        timeout: Duration,
        rate_limit_wait: Duration,
    ) -> Result<Self, TrackerError> {
        let octocrab = Octocrab::builder()
            .base_uri(api_url)?
            .personal_token(token.to_string())
            .add_header(ACCEPT, ACCEPT_GITHUB_JSON.to_string())
            .set_connect_timeout(Some(timeout))
            .set_read_timeout(Some(timeout))
            .add_retry_config(RetryConfig::None)
            .build()?;

        Ok(Self {
            octocrab,
            repository,
            rate_limit_wait,
        })
    }

    /// Builds `/repos/{owner}/{name}/{segments...}` with each segment encoded.
    fn route(&self, segments: &[&str]) -> Result<String, TrackerError> {
        repo_route(&self.repository, segments)
    }
}

fn repo_route(repository: &RepositoryId, segments: &[&str]) -> Result<String, TrackerError> {
    let mut url = Url::parse(ROUTE_BASE).map_err(|e| TrackerError::InvalidRoute {
        message: e.to_string(),
    })?;

    url.path_segments_mut()
        .map_err(|()| TrackerError::InvalidRoute {
            message: format!("{ROUTE_BASE} cannot hold a path"),
        })?
        .pop_if_empty()
        .extend(["repos", repository.owner.as_str(), repository.name.as_str()])
        .extend(segments);

    Ok(url.path().to_string())
}

#[derive(Debug, Serialize)]
struct ListIssuesQuery<'a> {
    state: &'static str,
    labels: &'a str,
    per_page: u8,
    page: u32,
}

#[derive(Debug, Deserialize)]
struct LabelRecord {
    name: String,
}

#[derive(Debug, Deserialize)]
struct IssueRecord {
    number: u64,
    html_url: String,
    #[serde(default)]
    labels: Vec<LabelRecord>,
    #[serde(default)]
    pull_request: Option<serde_json::Value>,
    #[serde(default)]
    body: Option<String>,
}

impl From<IssueRecord> for TrackedIssue {
    fn from(record: IssueRecord) -> Self {
        Self {
            number: record.number,
            url: record.html_url,
            labels: record.labels.into_iter().map(|l| l.name).collect(),
            is_pull_request: record.pull_request.is_some(),
            body: record.body,
        }
    }
}

fn is_not_found(error: &octocrab::Error) -> bool {
    matches!(error, octocrab::Error::GitHub { source, .. } if source.status_code.as_u16() == 404)
}

#[async_trait]
impl Tracker for GitHubTracker {
    #[instrument(skip(self), fields(repo = %self.repository))]
    async fn get_label(&self, name: &str) -> Result<LabelLookup, TrackerError> {
        let route = self.route(&["labels", name])?;

        let result: Result<serde_json::Value, octocrab::Error> =
            retry_once_on_rate_limit(self.rate_limit_wait, || {
                self.octocrab.get(route.as_str(), None::<&()>)
            })
            .await;

        match result {
            Ok(_) => Ok(LabelLookup::Found),
            Err(e) if is_not_found(&e) => Ok(LabelLookup::NotFound),
            Err(e) => Err(e.into()),
        }
    }

    #[instrument(skip(self, label), fields(repo = %self.repository, label = %label.name))]
    async fn create_label(&self, label: &LabelSpec) -> Result<(), TrackerError> {
        let route = self.route(&["labels"])?;

        let _created: serde_json::Value = retry_once_on_rate_limit(self.rate_limit_wait, || {
            self.octocrab.post(route.as_str(), Some(label))
        })
        .await?;

        Ok(())
    }

    #[instrument(skip(self), fields(repo = %self.repository))]
    async fn list_issues(
        &self,
        label: &str,
        page: u32,
        per_page: u8,
    ) -> Result<Vec<TrackedIssue>, TrackerError> {
        let route = self.route(&["issues"])?;
        let query = ListIssuesQuery {
            state: "all",
            labels: label,
            per_page,
            page,
        };

        let records: Vec<IssueRecord> = retry_once_on_rate_limit(self.rate_limit_wait, || {
            self.octocrab.get(route.as_str(), Some(&query))
        })
        .await?;

        debug!(count = records.len(), "Listed issues");
        Ok(records.into_iter().map(TrackedIssue::from).collect())
    }

    #[instrument(skip(self, issue), fields(repo = %self.repository, title = %issue.title))]
    async fn create_issue(&self, issue: &NewIssue) -> Result<TrackedIssue, TrackerError> {
        let route = self.route(&["issues"])?;

        let record: IssueRecord = retry_once_on_rate_limit(self.rate_limit_wait, || {
            self.octocrab.post(route.as_str(), Some(issue))
        })
        .await?;

        Ok(record.into())
    }
}

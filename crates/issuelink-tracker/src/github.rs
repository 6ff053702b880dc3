//! GitHub Issues implementation of [`IssueTracker`].
//!
//! Records are issues in a single configured repository: `create` opens an
//! issue whose body is the long URL, `fetch` reads an issue's body back. The
//! issue number is the record id.

use crate::error::{FETCH_DENIED, Result};
use crate::{Credential, IssueTracker, TrackerError};
use async_trait::async_trait;
use issuelink_core::RecordId;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};
use typed_builder::TypedBuilder;

/// Stable GitHub REST media type.
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// GitHub rejects requests without a user agent.
const GITHUB_USER_AGENT: &str = concat!("issuelink/", env!("CARGO_PKG_VERSION"));

const DEFAULT_API_BASE: &str = "https://api.github.com";

const DEFAULT_ISSUE_TITLE: &str = "URL Shortener Entry";

/// Configuration for [`GithubTracker`].
///
/// # Example
///
/// ```rust
/// use issuelink_tracker::GithubConfig;
///
/// let config = GithubConfig::builder()
///     .owner("octocat")
///     .repo("database")
///     .build();
/// ```
#[derive(Debug, Clone, TypedBuilder)]
pub struct GithubConfig {
    /// Repository owner (user or organization).
    #[builder(setter(into))]
    pub owner: String,

    /// Repository name.
    #[builder(setter(into))]
    pub repo: String,

    /// API root, overridable for proxies or GitHub Enterprise.
    #[builder(default = DEFAULT_API_BASE.to_string(), setter(into))]
    pub api_base: String,

    /// Title given to every created issue.
    #[builder(default = DEFAULT_ISSUE_TITLE.to_string(), setter(into))]
    pub issue_title: String,
}

/// [`IssueTracker`] backed by the GitHub Issues REST API.
#[derive(Debug, Clone)]
pub struct GithubTracker {
    config: GithubConfig,
    client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct CreateIssue<'a> {
    title: &'a str,
    body: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreatedIssue {
    number: RecordId,
}

#[derive(Debug, Deserialize)]
struct Issue {
    body: Option<String>,
}

impl GithubTracker {
    pub fn new(config: GithubConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// `POST`/collection endpoint: `{api}/repos/{owner}/{repo}/issues`.
    fn issues_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/issues",
            self.config.api_base.trim_end_matches('/'),
            self.config.owner,
            self.config.repo
        )
    }

    /// Single-issue endpoint: `{api}/repos/{owner}/{repo}/issues/{number}`.
    fn issue_url(&self, id: RecordId) -> String {
        format!("{}/{}", self.issues_url(), id)
    }
}

#[async_trait]
impl IssueTracker for GithubTracker {
    async fn create(&self, credential: &Credential, body: &str) -> Result<RecordId> {
        let payload = CreateIssue {
            title: &self.config.issue_title,
            body,
        };

        let response = self
            .client
            .post(self.issues_url())
            .bearer_auth(credential.expose())
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, GITHUB_USER_AGENT)
            .json(&payload)
            .send()
            .await
            .map_err(|e| TrackerError::Create(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            warn!(%status, "issue creation rejected");
            return Err(TrackerError::Create(format!("tracker returned {}", status)));
        }

        let created: CreatedIssue = response
            .json()
            .await
            .map_err(|e| TrackerError::Create(e.to_string()))?;

        debug!(record = %created.number, "created record");
        Ok(created.number)
    }

    async fn fetch(&self, credential: Option<&Credential>, id: RecordId) -> Result<String> {
        let mut request = self
            .client
            .get(self.issue_url(id))
            .header(ACCEPT, GITHUB_ACCEPT)
            .header(USER_AGENT, GITHUB_USER_AGENT);
        if let Some(credential) = credential {
            request = request.bearer_auth(credential.expose());
        }

        let response = request
            .send()
            .await
            .map_err(|e| TrackerError::Fetch(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            // The status (404 vs 403 vs 429) stays in the log; the error the
            // caller sees is the same for all of them.
            debug!(record = %id, %status, "issue fetch rejected");
            return Err(TrackerError::Fetch(FETCH_DENIED.to_string()));
        }

        let issue: Issue = response
            .json()
            .await
            .map_err(|e| TrackerError::Fetch(e.to_string()))?;

        match issue.body {
            Some(body) if !body.is_empty() => Ok(body),
            // An issue without a body is not a short link record.
            _ => Err(TrackerError::Fetch(FETCH_DENIED.to_string())),
        }
    }
}

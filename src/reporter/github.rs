//! GitHub REST client for issue comments, labels and state
//!
//! Only the three calls the validator needs. Requests are sent once; a
//! non-2xx response is logged and otherwise ignored, while a transport
//! failure (DNS, TLS, connection reset) is returned to the caller.

use super::IssueReporter;
use crate::models::IssueContext;
use crate::Result;
use async_trait::async_trait;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use reqwest::Method;
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Public GitHub API endpoint
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const USER_AGENT: &str = concat!("issueguard/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, thiserror::Error)]
pub enum ReporterError {
    #[error("Failed to create HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("{method} {url} failed: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// Reporter backed by the GitHub issues API
pub struct GitHubReporter {
    http_client: reqwest::Client,
    issue_url: String,
    token: String,
}

impl GitHubReporter {
    /// Create a reporter for one issue
    ///
    /// `api_url` is the API root, e.g. [`DEFAULT_API_URL`] or a GitHub
    /// Enterprise `https://host/api/v3`.
    pub fn new(api_url: &str, token: &str, issue: &IssueContext) -> Result<Self, ReporterError> {
        let http_client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(ReporterError::Client)?;

        Ok(Self {
            http_client,
            issue_url: issue_url(api_url, issue),
            token: token.to_string(),
        })
    }

    pub fn issue_url(&self) -> &str {
        &self.issue_url
    }

    async fn send(&self, method: Method, url: String, payload: Value) -> Result<(), ReporterError> {
        debug!(%method, %url, "Sending request");

        let response = self
            .http_client
            .request(method.clone(), &url)
            .header(AUTHORIZATION, format!("token {}", self.token))
            .header(ACCEPT, "application/vnd.github+json")
            .json(&payload)
            .send()
            .await
            .map_err(|source| ReporterError::Transport {
                method: method.clone(),
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        if status.is_success() {
            debug!(%method, %url, %status, "Request accepted");
        } else {
            warn!(%method, %url, %status, "Request rejected by issue tracker");
        }

        Ok(())
    }
}

#[async_trait]
impl IssueReporter for GitHubReporter {
    async fn comment(&self, body: &str) -> Result<()> {
        let url = format!("{}/comments", self.issue_url);
        self.send(Method::POST, url, json!({ "body": body })).await?;
        Ok(())
    }

    async fn add_label(&self, label: &str) -> Result<()> {
        let url = format!("{}/labels", self.issue_url);
        self.send(Method::POST, url, json!({ "labels": [label] })).await?;
        Ok(())
    }

    async fn close(&self) -> Result<()> {
        self.send(Method::PATCH, self.issue_url.clone(), json!({ "state": "closed" }))
            .await?;
        Ok(())
    }
}

fn issue_url(api_url: &str, issue: &IssueContext) -> String {
    format!(
        "{}/repos/{}/issues/{}",
        api_url.trim_end_matches('/'),
        issue.repository,
        issue.number
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_issue_url() {
        let issue = IssueContext::new("acme/games", 7, "[Bug]: x", "");

        assert_eq!(
            issue_url(DEFAULT_API_URL, &issue),
            "https://api.github.com/repos/acme/games/issues/7"
        );
        assert_eq!(
            issue_url("https://ghe.example.com/api/v3/", &issue),
            "https://ghe.example.com/api/v3/repos/acme/games/issues/7"
        );
    }

    #[test]
    fn test_reporter_keeps_issue_url() {
        let issue = IssueContext::new("acme/games", 7, "[Bug]: x", "");
        let reporter = GitHubReporter::new(DEFAULT_API_URL, "secret", &issue).unwrap();

        assert_eq!(reporter.issue_url(), "https://api.github.com/repos/acme/games/issues/7");
    }
}

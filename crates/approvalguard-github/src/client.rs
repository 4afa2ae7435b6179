//! GitHub REST client.
//!
//! Blocking and single-page: the check runs once per workflow job and issues two requests.

use crate::api::{ChangedFile, Review};
use crate::error::GitHubError;
use crate::source::PullRequestSource;
use approvalguard_types::{PullRequestRef, ids};
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.github.com";

const API_VERSION: &str = "2022-11-28";
const PER_PAGE: u32 = 100;

/// GitHub API client configuration.
#[derive(Debug, Clone)]
pub struct GitHubClientConfig {
    /// Base URL of the REST API (`https://api.github.com`, or `<host>/api/v3` on GHES).
    pub api_url: String,

    /// Token sent as a bearer credential; anonymous when `None`.
    pub token: Option<String>,

    /// Request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for GitHubClientConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            token: None,
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct GitHubClient {
    client: Client,
    config: GitHubClientConfig,
}

impl GitHubClient {
    pub fn new(config: GitHubClientConfig) -> Result<Self, GitHubError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/vnd.github+json"),
        );
        headers.insert(
            "x-github-api-version",
            HeaderValue::from_static(API_VERSION),
        );

        let client = Client::builder()
            .user_agent(format!(
                "{}/{}",
                ids::TOOL_NAME,
                env!("CARGO_PKG_VERSION")
            ))
            .default_headers(headers)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { client, config })
    }

    fn pulls_url(&self, pr: &PullRequestRef, resource: &str) -> String {
        format!(
            "{}/repos/{}/{}/pulls/{}/{}?per_page={}",
            self.config.api_url.trim_end_matches('/'),
            pr.owner,
            pr.repo,
            pr.number,
            resource,
            PER_PAGE
        )
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, GitHubError> {
        tracing::debug!(%url, "GET");

        let mut request = self.client.get(url);
        if let Some(token) = self.config.token.as_deref() {
            request = request.bearer_auth(token);
        }

        let response = request.send()?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().unwrap_or_default();
            return Err(GitHubError::Status {
                status: status.as_u16(),
                url: url.to_string(),
                body,
            });
        }

        Ok(response.json()?)
    }
}

impl PullRequestSource for GitHubClient {
    fn list_changed_files(&self, pr: &PullRequestRef) -> Result<Vec<ChangedFile>, GitHubError> {
        let files: Vec<ChangedFile> = self.get_json(&self.pulls_url(pr, "files"))?;
        tracing::debug!(pr = %pr, count = files.len(), "fetched changed files");
        Ok(files)
    }

    fn list_reviews(&self, pr: &PullRequestRef) -> Result<Vec<Review>, GitHubError> {
        let reviews: Vec<Review> = self.get_json(&self.pulls_url(pr, "reviews"))?;
        tracing::debug!(pr = %pr, count = reviews.len(), "fetched reviews");
        Ok(reviews)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_pull_request_urls() {
        let client = GitHubClient::new(GitHubClientConfig {
            api_url: "https://ghes.example.com/api/v3/".to_string(),
            ..GitHubClientConfig::default()
        })
        .expect("client");
        let pr = PullRequestRef::new("octo", "widgets", 99);

        assert_eq!(
            client.pulls_url(&pr, "files"),
            "https://ghes.example.com/api/v3/repos/octo/widgets/pulls/99/files?per_page=100"
        );
        assert_eq!(
            client.pulls_url(&pr, "reviews"),
            "https://ghes.example.com/api/v3/repos/octo/widgets/pulls/99/reviews?per_page=100"
        );
    }

    #[test]
    fn default_config_targets_public_api() {
        let cfg = GitHubClientConfig::default();
        assert_eq!(cfg.api_url, DEFAULT_API_URL);
        assert_eq!(cfg.timeout_secs, 30);
        assert!(cfg.token.is_none());
    }
}

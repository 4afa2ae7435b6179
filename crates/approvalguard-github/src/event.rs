//! Resolve the pull request a GitHub Actions run is about.
//!
//! Actions exposes the repository as `GITHUB_REPOSITORY` (`owner/repo`) and the webhook
//! payload as a JSON file at `GITHUB_EVENT_PATH`. `pull_request`, `pull_request_target`
//! and `pull_request_review` payloads all carry a `pull_request` object.

use crate::error::GitHubError;
use approvalguard_types::PullRequestRef;
use serde::Deserialize;

pub const ENV_REPOSITORY: &str = "GITHUB_REPOSITORY";
pub const ENV_EVENT_PATH: &str = "GITHUB_EVENT_PATH";
pub const ENV_EVENT_NAME: &str = "GITHUB_EVENT_NAME";

/// Snapshot of the Actions variables used for resolution.
#[derive(Clone, Debug, Default)]
pub struct ActionsEnv {
    pub repository: Option<String>,
    pub event_path: Option<String>,
    pub event_name: Option<String>,
}

impl ActionsEnv {
    pub fn from_env() -> Self {
        Self {
            repository: std::env::var(ENV_REPOSITORY).ok(),
            event_path: std::env::var(ENV_EVENT_PATH).ok(),
            event_name: std::env::var(ENV_EVENT_NAME).ok(),
        }
    }
}

#[derive(Deserialize)]
struct EventPayload {
    pull_request: Option<PullRequestPayload>,
}

#[derive(Deserialize)]
struct PullRequestPayload {
    number: u64,
}

/// Resolve owner, repo and PR number from the Actions environment.
pub fn resolve_pull_request(env: &ActionsEnv) -> Result<PullRequestRef, GitHubError> {
    let repository = env
        .repository
        .as_deref()
        .ok_or(GitHubError::MissingEnv(ENV_REPOSITORY))?;
    let (owner, repo) = parse_repository(repository)?;

    let event_path = env
        .event_path
        .as_deref()
        .ok_or(GitHubError::MissingEnv(ENV_EVENT_PATH))?;
    let payload = std::fs::read_to_string(event_path).map_err(|source| GitHubError::ReadEvent {
        path: event_path.to_string(),
        source,
    })?;

    let event_name = env.event_name.as_deref().unwrap_or("unknown");
    let number = pull_request_number(&payload, event_name)?;

    tracing::debug!(%owner, %repo, number, event_name, "resolved pull request from event");
    Ok(PullRequestRef::new(owner, repo, number))
}

/// Split `owner/repo`.
pub fn parse_repository(value: &str) -> Result<(String, String), GitHubError> {
    match value.trim().split_once('/') {
        Some((owner, repo)) if !owner.is_empty() && !repo.is_empty() && !repo.contains('/') => {
            Ok((owner.to_string(), repo.to_string()))
        }
        _ => Err(GitHubError::InvalidRepository(value.to_string())),
    }
}

/// Extract `pull_request.number` from a webhook payload.
pub fn pull_request_number(payload: &str, event_name: &str) -> Result<u64, GitHubError> {
    let event: EventPayload = serde_json::from_str(payload)?;
    event
        .pull_request
        .map(|pr| pr.number)
        .ok_or_else(|| GitHubError::NotAPullRequest {
            event_name: event_name.to_string(),
        })
}

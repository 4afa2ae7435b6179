use thiserror::Error;

#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("GitHub API returned {status} for {url}: {body}")]
    Status {
        status: u16,
        url: String,
        body: String,
    },

    #[error("environment variable {0} is not set")]
    MissingEnv(&'static str),

    #[error("invalid repository '{0}' (expected owner/repo)")]
    InvalidRepository(String),

    #[error("event '{event_name}' has no pull_request payload; run this check on pull_request events")]
    NotAPullRequest { event_name: String },

    #[error("failed to read event payload {path}: {source}")]
    ReadEvent {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse event payload: {0}")]
    ParseEvent(#[from] serde_json::Error),
}

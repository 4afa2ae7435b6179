//! GitHub adapters: the data-fetch side of approvalguard.
//!
//! - [`PullRequestSource`] is the narrow port the app layer depends on
//! - [`GitHubClient`] implements it over the REST API
//! - [`event`] resolves which pull request a workflow run is about

#![forbid(unsafe_code)]

mod api;
mod client;
mod error;
pub mod event;
mod source;

pub use api::{ChangedFile, Review};
pub use client::{DEFAULT_API_URL, GitHubClient, GitHubClientConfig};
pub use error::GitHubError;
pub use source::PullRequestSource;

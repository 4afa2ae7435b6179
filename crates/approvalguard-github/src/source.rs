use crate::api::{ChangedFile, Review};
use crate::error::GitHubError;
use approvalguard_types::PullRequestRef;

/// Where pull request data comes from.
///
/// The check only needs these two lists; implementations own transport, auth and paging.
pub trait PullRequestSource {
    fn list_changed_files(&self, pr: &PullRequestRef) -> Result<Vec<ChangedFile>, GitHubError>;

    fn list_reviews(&self, pr: &PullRequestRef) -> Result<Vec<Review>, GitHubError>;
}

use approvalguard_types::{RepoPath, ids};
use serde::Deserialize;

/// Entry of `GET /repos/{owner}/{repo}/pulls/{n}/files`. Only the path is kept.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ChangedFile {
    pub filename: String,
}

impl ChangedFile {
    pub fn path(&self) -> RepoPath {
        RepoPath::new(&self.filename)
    }
}

/// Entry of `GET /repos/{owner}/{repo}/pulls/{n}/reviews`. Only the state is kept.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct Review {
    pub state: String,
}

impl Review {
    pub fn is_approved(&self) -> bool {
        self.state == ids::REVIEW_STATE_APPROVED
    }
}

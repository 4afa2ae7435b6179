use crate::model::{PullRequestModel, Requirement};
use approvalguard_types::RepoPath;

pub fn requirement(patterns: &[&str], required_approvals: u32) -> Requirement {
    Requirement::new(patterns.iter().copied(), required_approvals)
        .expect("test patterns must be valid globs")
}

pub fn model(files: &[&str], approvals: u32) -> PullRequestModel {
    PullRequestModel {
        changed_files: files.iter().map(RepoPath::new).collect(),
        approvals,
    }
}

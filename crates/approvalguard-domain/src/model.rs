use crate::matcher::PatternSet;
use approvalguard_types::{RepoPath, ids};

/// One gating rule: if any changed file matches `patterns`, the PR needs
/// `required_approvals` approved reviews.
#[derive(Clone, Debug)]
pub struct Requirement {
    pub patterns: PatternSet,
    pub required_approvals: u32,
}

impl Requirement {
    pub fn new<I, S>(patterns: I, required_approvals: u32) -> Result<Self, globset::Error>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Ok(Self {
            patterns: PatternSet::new(patterns)?,
            required_approvals,
        })
    }

    /// Changed files that match at least one of the requirement's patterns, in input order.
    pub fn matching_files(&self, files: &[RepoPath]) -> Vec<RepoPath> {
        files
            .iter()
            .filter(|f| self.patterns.is_match(f))
            .cloned()
            .collect()
    }
}

/// Everything evaluation needs to know about a pull request, already fetched.
#[derive(Clone, Debug, Default)]
pub struct PullRequestModel {
    pub changed_files: Vec<RepoPath>,
    /// Number of reviews in the `APPROVED` state; computed once per run.
    pub approvals: u32,
}

/// Count review states equal to `APPROVED`.
pub fn count_approved<'a, I>(states: I) -> u32
where
    I: IntoIterator<Item = &'a str>,
{
    states
        .into_iter()
        .filter(|s| *s == ids::REVIEW_STATE_APPROVED)
        .count() as u32
}

use crate::{PullRequestRef, RepoPath};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for approvalguard reports.
pub const SCHEMA_REPORT_V1: &str = "approvalguard.report.v1";

/// Overall outcome of one check run.
///
/// `Skip` is a pass: the PR has no approved reviews yet and the gate defers to other
/// review requirements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Skip,
    Fail,
}

impl Verdict {
    pub fn is_failure(self) -> bool {
        self == Verdict::Fail
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum RequirementStatus {
    /// At least one file matched and the approval count is sufficient.
    Met,
    /// At least one file matched and the PR is short of approvals.
    Unmet,
    /// No changed file matched any pattern.
    NotApplicable,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RequirementResult {
    /// Position of the requirement in the configured list (0-based).
    pub index: usize,
    pub patterns: Vec<String>,
    pub required_approvals: u32,
    pub status: RequirementStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub matched_files: Vec<RepoPath>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApprovalReport {
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub started_at: OffsetDateTime,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub finished_at: OffsetDateTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<PullRequestRef>,
    pub verdict: Verdict,
    /// Number of reviews in the `APPROVED` state.
    pub approvals: u32,
    pub changed_files: u32,
    /// Empty when the check was skipped.
    #[serde(default)]
    pub requirements: Vec<RequirementResult>,
}

impl ApprovalReport {
    pub fn unmet(&self) -> impl Iterator<Item = &RequirementResult> {
        self.requirements
            .iter()
            .filter(|r| r.status == RequirementStatus::Unmet)
    }
}

//! Stable literals for the approval check.
//!
//! CI logs and downstream tooling match on these strings; changing one is a breaking change.

use crate::RepoPath;

pub const TOOL_NAME: &str = "approvalguard";

/// Review state that counts towards the approval total.
pub const REVIEW_STATE_APPROVED: &str = "APPROVED";

/// The single failure message surfaced when any requirement is unmet.
pub const MSG_REQUIREMENTS_NOT_MET: &str = "Required approvals not met for one or more patterns";

pub const MSG_NO_REVIEWS_YET: &str = "No reviews yet, skipping check so the PR gets a green tick.";

pub const MSG_ALL_CHECKS_PASSED: &str = "All checks passed!";

pub fn msg_found_reviews(count: u32) -> String {
    format!("Found {count} reviews.")
}

pub fn msg_approval_shortfall(required: u32, approved: u32) -> String {
    format!("Expected {required} approvals, but the PR only has {approved}.")
}

pub fn msg_triggering_patterns(required: u32, patterns: &[String]) -> String {
    format!(
        "PR requires {required} due to the following files matching patterns: {}",
        patterns.join(", ")
    )
}

pub fn msg_matched_files(files: &[RepoPath]) -> String {
    let joined = files
        .iter()
        .map(RepoPath::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    format!("Matched files: {joined}")
}

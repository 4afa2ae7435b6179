//! Stable DTOs and literals used across the approvalguard workspace.
//!
//! This crate is intentionally boring:
//! - data types for the emitted report
//! - pull request identity
//! - canonical repo-relative path handling
//! - the user-facing message literals CI logs are matched against

#![forbid(unsafe_code)]

pub mod ids;
pub mod path;
pub mod pull_request;
pub mod receipt;

pub use path::RepoPath;
pub use pull_request::PullRequestRef;
pub use receipt::{
    ApprovalReport, RequirementResult, RequirementStatus, SCHEMA_REPORT_V1, ToolMeta, Verdict,
};

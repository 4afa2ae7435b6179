use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const SCHEMA_CONFIG_V1: &str = "approvalguard.config.v1";

/// `approvalguard.toml` schema v1.
///
/// This is a *user-facing* config model: it is intentionally permissive so forward-compat is easy.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ApprovalGuardConfigV1 {
    /// Optional schema string for tooling (`approvalguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// Ordered list of requirements. Order only affects diagnostic output.
    #[serde(default)]
    pub requirements: Vec<RequirementConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct RequirementConfig {
    /// Glob patterns matched against repo-relative changed file paths.
    #[serde(default)]
    pub patterns: Vec<String>,

    /// Approved reviews needed when any pattern matches a changed file.
    #[serde(alias = "requiredApprovals")]
    pub required_approvals: u32,
}

//! Config parsing and requirement resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod resolve;

pub use model::{ApprovalGuardConfigV1, RequirementConfig, SCHEMA_CONFIG_V1};
pub use resolve::{Overrides, ResolvedConfig};

/// Parse `approvalguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ApprovalGuardConfigV1> {
    let cfg: ApprovalGuardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse an inline requirement list, e.g. the `requirements` input of a workflow step.
///
/// Accepts a JSON array of `{ "patterns": [...], "requiredApprovals": n }` objects.
pub fn parse_requirements_json(input: &str) -> anyhow::Result<Vec<RequirementConfig>> {
    let reqs: Vec<RequirementConfig> = serde_json::from_str(input)?;
    Ok(reqs)
}

/// Resolve the compiled requirement list used by the engine (file config + overrides).
pub fn resolve_config(
    cfg: ApprovalGuardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}

/// JSON Schema for `approvalguard.toml`, pretty-printed.
pub fn config_schema_json() -> anyhow::Result<String> {
    let schema = schemars::schema_for!(ApprovalGuardConfigV1);
    Ok(serde_json::to_string_pretty(&schema)?)
}

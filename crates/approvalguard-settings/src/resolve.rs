use crate::model::{ApprovalGuardConfigV1, RequirementConfig, SCHEMA_CONFIG_V1};
use anyhow::Context;
use approvalguard_domain::Requirement;

#[derive(Clone, Debug, Default)]
pub struct Overrides {
    /// Inline requirements; when present they replace the file's list.
    pub requirements: Option<Vec<RequirementConfig>>,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub requirements: Vec<Requirement>,
}

pub fn resolve_config(
    cfg: ApprovalGuardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    if let Some(schema) = cfg.schema.as_deref()
        && schema != SCHEMA_CONFIG_V1
    {
        anyhow::bail!("unsupported config schema: {schema} (expected {SCHEMA_CONFIG_V1})");
    }

    let configured = overrides.requirements.unwrap_or(cfg.requirements);
    if configured.is_empty() {
        anyhow::bail!("no requirements configured");
    }

    let requirements = configured
        .into_iter()
        .enumerate()
        .map(|(index, rc)| {
            Requirement::new(rc.patterns.clone(), rc.required_approvals).with_context(|| {
                format!(
                    "invalid glob in requirement #{index}: [{}]",
                    rc.patterns.join(", ")
                )
            })
        })
        .collect::<anyhow::Result<Vec<_>>>()?;

    Ok(ResolvedConfig { requirements })
}

use approvalguard_types::{
    ApprovalReport, RepoPath, RequirementResult, RequirementStatus, SCHEMA_REPORT_V1, ToolMeta,
    Verdict,
};
use time::macros::datetime;

pub fn report(verdict: Verdict, approvals: u32, requirements: Vec<RequirementResult>) -> ApprovalReport {
    ApprovalReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: "approvalguard".to_string(),
            version: "0.1.0".to_string(),
        },
        started_at: datetime!(2024-01-01 0:00 UTC),
        finished_at: datetime!(2024-01-01 0:00 UTC),
        pull_request: None,
        verdict,
        approvals,
        changed_files: 2,
        requirements,
    }
}

pub fn result(
    index: usize,
    patterns: &[&str],
    required_approvals: u32,
    status: RequirementStatus,
    files: &[&str],
) -> RequirementResult {
    RequirementResult {
        index,
        patterns: patterns.iter().map(|p| p.to_string()).collect(),
        required_approvals,
        status,
        matched_files: files.iter().map(RepoPath::new).collect(),
    }
}

/// Scenario with `src/**/*` met and `.github/**/*` short by one approval.
pub fn failing_report() -> ApprovalReport {
    report(
        Verdict::Fail,
        1,
        vec![
            result(0, &["src/**/*"], 1, RequirementStatus::Met, &["src/test.js"]),
            result(
                1,
                &[".github/**/*"],
                2,
                RequirementStatus::Unmet,
                &[".github/workflows/test.yml"],
            ),
        ],
    )
}

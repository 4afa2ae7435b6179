//! The `check` use case: fetch pull request data, evaluate requirements, report.

use crate::sink::LogSink;
use anyhow::Context;
use approvalguard_domain::{PullRequestModel, Requirement, count_approved};
use approvalguard_github::{ChangedFile, PullRequestSource};
use approvalguard_render::{render_github_annotations, render_log_lines};
use approvalguard_types::{
    ApprovalReport, PullRequestRef, SCHEMA_REPORT_V1, ToolMeta, Verdict, ids,
};
use time::OffsetDateTime;

/// Input for the check use case.
#[derive(Clone, Debug)]
pub struct CheckInput<'a> {
    pub pull_request: &'a PullRequestRef,
    /// Compiled requirements, in configured order.
    pub requirements: &'a [Requirement],
    /// Cap on per-file `::error` annotations emitted for unmet requirements.
    pub max_annotations: usize,
}

/// Output from the check use case.
#[derive(Clone, Debug)]
pub struct CheckOutput {
    pub report: ApprovalReport,
}

/// Run the check: fetch files, fetch reviews, evaluate, and emit lines to `sink`.
///
/// Fetch errors propagate untouched and nothing is logged for them here. An unmet
/// requirement is not an error: it is reported through [`LogSink::fail`] and the verdict.
pub fn run_check(
    source: &impl PullRequestSource,
    input: CheckInput<'_>,
    sink: &mut impl LogSink,
) -> anyhow::Result<CheckOutput> {
    let started_at = OffsetDateTime::now_utc();
    let pr = input.pull_request;

    let files = source
        .list_changed_files(pr)
        .with_context(|| format!("list changed files for {pr}"))?;
    let reviews = source
        .list_reviews(pr)
        .with_context(|| format!("list reviews for {pr}"))?;

    let model = PullRequestModel {
        changed_files: files.iter().map(ChangedFile::path).collect(),
        approvals: count_approved(reviews.iter().map(|r| r.state.as_str())),
    };
    tracing::debug!(
        pr = %pr,
        files = model.changed_files.len(),
        reviews = reviews.len(),
        approvals = model.approvals,
        "evaluating requirements"
    );

    let domain = approvalguard_domain::evaluate(&model, input.requirements);

    let report = ApprovalReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        started_at,
        finished_at: OffsetDateTime::now_utc(),
        pull_request: Some(pr.clone()),
        verdict: domain.verdict,
        approvals: domain.approvals,
        changed_files: domain.changed_files,
        requirements: domain.results,
    };

    for line in render_log_lines(&report) {
        sink.info(&line);
    }

    if report.verdict.is_failure() {
        for annotation in render_github_annotations(&report, input.max_annotations) {
            sink.command(&annotation);
        }
        sink.fail(ids::MSG_REQUIREMENTS_NOT_MET);
    }

    Ok(CheckOutput { report })
}

/// Map verdict to exit code: 0 = pass/skip, 2 = unmet requirements.
pub fn verdict_exit_code(verdict: Verdict) -> i32 {
    match verdict {
        Verdict::Pass => 0,
        Verdict::Skip => 0,
        Verdict::Fail => 2,
    }
}

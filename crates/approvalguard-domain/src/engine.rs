use crate::model::{PullRequestModel, Requirement};
use crate::report::DomainReport;
use approvalguard_types::{RequirementResult, RequirementStatus, Verdict};

pub fn evaluate(model: &PullRequestModel, requirements: &[Requirement]) -> DomainReport {
    let changed_files = model.changed_files.len() as u32;

    // Unreviewed PRs are never blocked here; a separate review requirement owns that case.
    if model.approvals == 0 {
        return DomainReport {
            verdict: Verdict::Skip,
            approvals: 0,
            changed_files,
            results: Vec::new(),
        };
    }

    let results: Vec<RequirementResult> = requirements
        .iter()
        .enumerate()
        .map(|(index, req)| evaluate_requirement(index, req, model))
        .collect();

    let verdict = compute_verdict(&results);

    DomainReport {
        verdict,
        approvals: model.approvals,
        changed_files,
        results,
    }
}

fn evaluate_requirement(
    index: usize,
    req: &Requirement,
    model: &PullRequestModel,
) -> RequirementResult {
    let matched_files = req.matching_files(&model.changed_files);

    let status = if matched_files.is_empty() {
        RequirementStatus::NotApplicable
    } else if model.approvals >= req.required_approvals {
        RequirementStatus::Met
    } else {
        RequirementStatus::Unmet
    };

    RequirementResult {
        index,
        patterns: req.patterns.patterns().to_vec(),
        required_approvals: req.required_approvals,
        status,
        matched_files,
    }
}

fn compute_verdict(results: &[RequirementResult]) -> Verdict {
    if results.iter().any(|r| r.status == RequirementStatus::Unmet) {
        Verdict::Fail
    } else {
        Verdict::Pass
    }
}

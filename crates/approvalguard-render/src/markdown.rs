use approvalguard_types::{ApprovalReport, RequirementStatus, Verdict};

/// Job summary for `$GITHUB_STEP_SUMMARY` (or any Markdown surface).
pub fn render_markdown(report: &ApprovalReport) -> String {
    let mut out = String::new();

    out.push_str("# Approval requirements\n\n");
    let verdict = match report.verdict {
        Verdict::Pass => "PASS",
        Verdict::Skip => "SKIP",
        Verdict::Fail => "FAIL",
    };
    out.push_str(&format!(
        "- Verdict: **{}**\n- Approvals: {}\n- Changed files: {}\n\n",
        verdict, report.approvals, report.changed_files
    ));

    if report.verdict == Verdict::Skip {
        out.push_str("No approved reviews yet; requirements were not evaluated.\n");
        return out;
    }

    if report.requirements.is_empty() {
        out.push_str("No requirements configured.\n");
        return out;
    }

    out.push_str("| # | Patterns | Required | Status | Matched files |\n");
    out.push_str("|---|---|---|---|---|\n");

    for r in &report.requirements {
        let status = match r.status {
            RequirementStatus::Met => "met",
            RequirementStatus::Unmet => "**unmet**",
            RequirementStatus::NotApplicable => "n/a",
        };
        let patterns = r
            .patterns
            .iter()
            .map(|p| format!("`{p}`"))
            .collect::<Vec<_>>()
            .join(", ");
        out.push_str(&format!(
            "| {} | {} | {} | {} | {} |\n",
            r.index + 1,
            patterns,
            r.required_approvals,
            status,
            r.matched_files.len()
        ));
    }

    let unmet: Vec<_> = report.unmet().collect();
    if !unmet.is_empty() {
        out.push_str("\n## Unmet\n\n");
        for r in unmet {
            out.push_str(&format!(
                "- #{} needs {} approvals, PR has {}:\n",
                r.index + 1,
                r.required_approvals,
                report.approvals
            ));
            for f in &r.matched_files {
                out.push_str(&format!("  - `{}`\n", f.as_str()));
            }
        }
    }

    out
}

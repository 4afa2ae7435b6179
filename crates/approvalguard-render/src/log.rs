use approvalguard_types::{ApprovalReport, Verdict, ids};

/// The informational lines a run prints, in order.
///
/// The failure signal itself is not part of these lines; see [`crate::render_error_command`].
pub fn render_log_lines(report: &ApprovalReport) -> Vec<String> {
    let mut out = vec![ids::msg_found_reviews(report.approvals)];

    match report.verdict {
        Verdict::Skip => out.push(ids::MSG_NO_REVIEWS_YET.to_string()),
        Verdict::Pass => out.push(ids::MSG_ALL_CHECKS_PASSED.to_string()),
        Verdict::Fail => {
            for r in report.unmet() {
                out.push(ids::msg_approval_shortfall(
                    r.required_approvals,
                    report.approvals,
                ));
                out.push(ids::msg_triggering_patterns(
                    r.required_approvals,
                    &r.patterns,
                ));
                out.push(ids::msg_matched_files(&r.matched_files));
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{failing_report, report, result};
    use approvalguard_types::RequirementStatus;

    #[test]
    fn skipped_run_logs_review_count_and_skip_note() {
        let lines = render_log_lines(&report(Verdict::Skip, 0, Vec::new()));
        assert_eq!(
            lines,
            vec![
                "Found 0 reviews.".to_string(),
                "No reviews yet, skipping check so the PR gets a green tick.".to_string(),
            ]
        );
    }

    #[test]
    fn passing_run_logs_confirmation() {
        let lines = render_log_lines(&report(
            Verdict::Pass,
            1,
            vec![result(0, &["src/**/*"], 1, RequirementStatus::Met, &["src/test.js"])],
        ));
        assert_eq!(lines, vec!["Found 1 reviews.", "All checks passed!"]);
    }

    #[test]
    fn failing_run_logs_shortfall_then_patterns_per_unmet_requirement() {
        let lines = render_log_lines(&failing_report());
        assert_eq!(
            lines,
            vec![
                "Found 1 reviews.",
                "Expected 2 approvals, but the PR only has 1.",
                "PR requires 2 due to the following files matching patterns: .github/**/*",
                "Matched files: .github/workflows/test.yml",
            ]
        );
        assert!(!lines.iter().any(|l| l == "All checks passed!"));
    }

    #[test]
    fn multiple_patterns_are_comma_joined() {
        let lines = render_log_lines(&report(
            Verdict::Fail,
            1,
            vec![result(
                0,
                &["Cargo.toml", "crates/*/Cargo.toml"],
                3,
                RequirementStatus::Unmet,
                &["Cargo.toml", "crates/core/Cargo.toml"],
            )],
        ));
        assert_eq!(
            lines[2],
            "PR requires 3 due to the following files matching patterns: Cargo.toml, crates/*/Cargo.toml"
        );
        assert_eq!(lines[3], "Matched files: Cargo.toml, crates/core/Cargo.toml");
    }
}

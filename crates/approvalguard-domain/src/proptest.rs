//! Property-based tests for the evaluator.
//!
//! These tests use proptest to verify invariants around:
//! - the zero-approval short-circuit
//! - per-requirement met/unmet/not-applicable classification
//! - verdict independence from requirement order

use crate::engine::evaluate;
use crate::model::{PullRequestModel, Requirement};
use approvalguard_types::{RepoPath, RequirementStatus, Verdict};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_path() -> impl Strategy<Value = String> {
    let dirs = prop::sample::select(vec!["src", "src/nested", ".github/workflows", "docs", ""]);
    let names = prop::sample::select(vec!["main.rs", "test.js", "ci.yml", "README.md", "x"]);
    (dirs, names).prop_map(|(d, n)| {
        if d.is_empty() {
            n.to_string()
        } else {
            format!("{d}/{n}")
        }
    })
}

fn arb_pattern() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "src/**/*",
        ".github/**/*",
        "docs/*",
        "**/*.rs",
        "*.md",
        "no-match",
        "**/ci.yml",
    ])
    .prop_map(str::to_string)
}

fn arb_requirement() -> impl Strategy<Value = (Vec<String>, u32)> {
    (prop::collection::vec(arb_pattern(), 0..3), 0u32..5)
}

fn arb_model() -> impl Strategy<Value = PullRequestModel> {
    (prop::collection::vec(arb_path(), 0..6), 0u32..5).prop_map(|(files, approvals)| {
        PullRequestModel {
            changed_files: files.into_iter().map(RepoPath::new).collect(),
            approvals,
        }
    })
}

fn build(reqs: &[(Vec<String>, u32)]) -> Vec<Requirement> {
    reqs.iter()
        .map(|(patterns, n)| Requirement::new(patterns.clone(), *n).expect("valid globs"))
        .collect()
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn zero_approvals_always_skips(
        files in prop::collection::vec(arb_path(), 0..6),
        reqs in prop::collection::vec(arb_requirement(), 0..5),
    ) {
        let model = PullRequestModel {
            changed_files: files.into_iter().map(RepoPath::new).collect(),
            approvals: 0,
        };
        let report = evaluate(&model, &build(&reqs));
        prop_assert_eq!(report.verdict, Verdict::Skip);
        prop_assert!(!report.verdict.is_failure());
        prop_assert!(report.results.is_empty());
    }

    #[test]
    fn classification_follows_match_and_threshold(
        model in arb_model(),
        reqs in prop::collection::vec(arb_requirement(), 0..5),
    ) {
        prop_assume!(model.approvals > 0);
        let requirements = build(&reqs);
        let report = evaluate(&model, &requirements);

        prop_assert_eq!(report.results.len(), requirements.len());
        for (req, result) in requirements.iter().zip(&report.results) {
            let matched = model.changed_files.iter().any(|f| req.patterns.is_match(f));
            let expected = if !matched {
                RequirementStatus::NotApplicable
            } else if model.approvals < req.required_approvals {
                RequirementStatus::Unmet
            } else {
                RequirementStatus::Met
            };
            prop_assert_eq!(result.status, expected);
        }
    }

    #[test]
    fn verdict_fails_iff_some_requirement_is_unmet(
        model in arb_model(),
        reqs in prop::collection::vec(arb_requirement(), 0..5),
    ) {
        prop_assume!(model.approvals > 0);
        let report = evaluate(&model, &build(&reqs));
        let any_unmet = report.unmet().next().is_some();
        prop_assert_eq!(report.verdict == Verdict::Fail, any_unmet);
        prop_assert_eq!(report.verdict == Verdict::Pass, !any_unmet);
    }

    #[test]
    fn requirement_order_does_not_change_verdict(
        model in arb_model(),
        reqs in prop::collection::vec(arb_requirement(), 0..5),
    ) {
        let forward = evaluate(&model, &build(&reqs));

        let mut reversed_reqs = reqs.clone();
        reversed_reqs.reverse();
        let reversed = evaluate(&model, &build(&reversed_reqs));

        prop_assert_eq!(forward.verdict, reversed.verdict);
        prop_assert_eq!(forward.unmet().count(), reversed.unmet().count());
    }
}

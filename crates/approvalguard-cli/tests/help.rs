use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get a Command for the approvalguard binary.
#[allow(deprecated)]
fn approvalguard_cmd() -> Command {
    Command::cargo_bin("approvalguard").unwrap()
}

#[test]
fn help_works() {
    approvalguard_cmd().arg("--help").assert().success();
}

#[test]
fn check_help_lists_inputs() {
    approvalguard_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--requirements"))
        .stdout(predicate::str::contains("--token"))
        .stdout(predicate::str::contains("--report-out"));
}

#[test]
fn schema_prints_config_json_schema() {
    let output = approvalguard_cmd().arg("schema").output().unwrap();
    assert!(output.status.success());

    let schema: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let text = schema.to_string();
    assert!(text.contains("requirements"));
    assert!(text.contains("required_approvals"));
}

#[test]
fn partial_pull_request_flags_are_rejected() {
    approvalguard_cmd()
        .args(["check", "--owner", "octo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

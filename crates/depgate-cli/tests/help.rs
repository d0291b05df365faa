use assert_cmd::Command;

/// Helper to get a Command for the depgate binary.
#[allow(deprecated)]
fn depgate_cmd() -> Command {
    Command::cargo_bin("depgate").unwrap()
}

#[test]
fn help_works() {
    depgate_cmd().arg("--help").assert().success();
}

#[test]
fn check_help_lists_policy_overrides() {
    depgate_cmd()
        .args(["check", "--help"])
        .assert()
        .success()
        .stdout(predicates::str::contains("--vulnerability"))
        .stdout(predicates::str::contains("--no-auto-exit"));
}

//! Tests for error handling and CLI flags.

use crate::support::*;

#[test]
fn test_help() {
    let t = Test::new();

    let output = t.cmd().arg("--help").output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    assert!(out.contains("export"));
    assert!(out.contains("import"));
}

#[test]
fn test_no_command_fails() {
    let t = Test::new();

    let output = t.cmd().output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_unknown_command_fails() {
    let t = Test::new();

    let output = t.cmd().arg("unknown-command").output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_version_flag() {
    let t = Test::new();

    let output = t.cmd().arg("--version").output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_export_help_lists_flags() {
    let t = Test::new();

    let output = t.cmd().args(["export", "--help"]).output().unwrap();
    assert_success(&output);
    let out = stdout(&output);
    for flag in ["--key", "--url", "--env-type"] {
        assert!(out.contains(flag), "missing {flag} in help");
    }
}

#[test]
fn test_completions_bash_outputs_script() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "bash"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("secure-environment"));
}

#[test]
fn test_completions_zsh() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "zsh"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).contains("#compdef"));
}

#[test]
fn test_completions_unknown_shell_fails() {
    let t = Test::new();

    let output = t.cmd().args(["completions", "tcsh"]).output().unwrap();
    assert_failure(&output);
}

#[test]
fn test_errors_go_to_stderr_only() {
    use predicates::prelude::*;

    let t = Test::new();
    t.cmd()
        .args(["export", "--url", REGIONAL_URL])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::starts_with("✗ cannot load secrets"));
}

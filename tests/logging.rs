//! Logging and verbosity tests.
//!
//! Logs always go to stderr so `eval "$(secure-environment export)"` never
//! sees them.

mod support;
use support::*;

#[test]
fn test_debug_flag_shows_debug_output() {
    let t = Test::new();

    let output = t.cmd().args(["--debug", "export"]).output().unwrap();
    assert_success(&output);
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "DEBUG");
    assert_stderr_contains(&output, "not configured to load secrets");
}

#[test]
fn test_debug_flag_after_subcommand() {
    let t = Test::new();

    let output = t.cmd().args(["export", "--debug"]).output().unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_debug_env_var() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SECURE_ENVIRONMENT_DEBUG", "true")
        .arg("export")
        .output()
        .unwrap();
    assert_success(&output);
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_default_no_log_output() {
    let t = Test::new();

    let output = t.export(&[]);
    assert_success(&output);
    let err = stderr(&output);
    assert!(
        !err.contains("DEBUG") && !err.contains("TRACE"),
        "Default mode should not show debug/trace output"
    );
}

#[test]
fn test_log_env_var_overrides_debug_flag() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SECURE_ENVIRONMENT_LOG", "secure_environment=error")
        .args(["--debug", "export"])
        .output()
        .unwrap();
    assert_success(&output);
    assert!(!stderr(&output).contains("DEBUG"));
}

#[test]
fn test_failed_export_logs_before_error() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SECURE_ENVIRONMENT_LOG", "secure_environment=debug")
        .args(["export", "--url", REGIONAL_URL])
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "cannot load secrets, no key identifier set");
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_debug_env_var_accepts_numeric_toggle() {
    let t = Test::new();

    let output = t
        .cmd()
        .env("SECURE_ENVIRONMENT_DEBUG", "1")
        .arg("export")
        .output()
        .unwrap();
    assert_success(&output);
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "DEBUG");
}

#[test]
fn test_debug_env_var_off_values_keep_export_quiet() {
    let t = Test::new();

    for value in ["0", "false", "no", "off"] {
        let output = t
            .cmd()
            .env("SECURE_ENVIRONMENT_DEBUG", value)
            .arg("export")
            .output()
            .unwrap();
        assert_success(&output);
        assert!(stdout(&output).is_empty(), "stdout for {value}");
        assert!(!stderr(&output).contains("DEBUG"), "stderr for {value}");
    }
}

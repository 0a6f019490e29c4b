//! Tests for `secure-environment export`.

use crate::support::*;

#[test]
fn test_unconfigured_export_is_silent() {
    let t = Test::new();

    let output = t.export(&[]);
    assert_success(&output);
    assert!(stdout(&output).is_empty());
}

#[test]
fn test_export_without_key_fails() {
    let t = Test::new();

    let output = t.export(&["--url", REGIONAL_URL]);
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "no key identifier set");
    assert_stderr_contains(&output, "SECURE_ENVIRONMENT_KEY");
}

#[test]
fn test_export_reads_settings_from_environment() {
    let t = Test::new();

    let output = t
        .cmd()
        .arg("export")
        .env("SECURE_ENVIRONMENT_URL", REGIONAL_URL)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, "no key identifier set");
}

#[test]
fn test_export_rejects_unrecognized_url() {
    let t = Test::new();

    let output = t.export(&["--url", UNSUPPORTED_URL, "--key", TEST_KEY_ARN]);
    assert_failure(&output);
    assert!(stdout(&output).is_empty());
    assert_stderr_contains(&output, "not a recognized object-storage address");
    assert_stderr_contains(&output, UNSUPPORTED_URL);
}

#[test]
fn test_flags_override_environment() {
    let t = Test::new();

    let output = t
        .cmd()
        .args(["export", "--url", UNSUPPORTED_URL, "--key", TEST_KEY_ARN])
        .env("SECURE_ENVIRONMENT_URL", REGIONAL_URL)
        .output()
        .unwrap();
    assert_failure(&output);
    assert_stderr_contains(&output, UNSUPPORTED_URL);
}

//! Tests for `secure-environment import`.

use std::fs;

use crate::support::*;

#[test]
fn test_import_without_settings_fails() {
    let t = Test::new();
    t.write("app.env", SAMPLE_ENV);

    let output = t.import("app.env", "out.env", &[]);
    assert_failure(&output);
    assert_stderr_contains(&output, "missing required settings: url, key");
    assert!(!t.path("out.env").exists());
}

#[test]
fn test_import_with_bad_url_leaves_placeholder() {
    let t = Test::new();
    t.write("app.env", SAMPLE_ENV);

    let output = t.import(
        "app.env",
        "out.env",
        &["--url", UNSUPPORTED_URL, "--key", TEST_KEY_ARN],
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "not a recognized object-storage address");
    assert_eq!(fs::read(t.path("out.env")).unwrap(), b"");
}

#[test]
fn test_import_missing_source_fails() {
    let t = Test::new();

    let output = t.import(
        "missing.env",
        "out.env",
        &["--url", REGIONAL_URL, "--key", TEST_KEY_ARN],
    );
    assert_failure(&output);
    assert_stderr_contains(&output, "failed to read missing.env");
    assert!(t.path("out.env").exists());
}

#[test]
fn test_import_requires_both_paths() {
    let t = Test::new();

    let output = t.cmd().args(["import", "app.env"]).output().unwrap();
    assert_failure(&output);
}

#[cfg(unix)]
#[test]
fn test_placeholder_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let t = Test::new();
    let output = t.import(
        "missing.env",
        "out.env",
        &["--url", REGIONAL_URL, "--key", TEST_KEY_ARN],
    );
    assert_failure(&output);

    let mode = fs::metadata(t.path("out.env")).unwrap().permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
}

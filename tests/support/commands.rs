//! Command helper methods for Test.

use super::Test;
use assert_cmd::Command;
use std::process::Output;

/// Variables cleared from every child process.
const ISOLATED_VARS: &[&str] = &[
    "SECURE_ENVIRONMENT_KEY",
    "SECURE_ENVIRONMENT_URL",
    "SECURE_ENVIRONMENT_TYPE",
    "SECURE_ENVIRONMENT_DEBUG",
    "SECURE_ENVIRONMENT_LOG",
    "AWS_PROFILE",
    "AWS_REGION",
    "AWS_DEFAULT_REGION",
    "AWS_ACCESS_KEY_ID",
    "AWS_SECRET_ACCESS_KEY",
    "AWS_SESSION_TOKEN",
];

impl Test {
    /// Create a secure-environment command in the test directory.
    pub fn cmd(&self) -> Command {
        #[allow(deprecated)]
        let mut cmd = Command::cargo_bin("secure-environment")
            .expect("failed to find secure-environment binary");
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("NO_COLOR", "1");
        cmd.current_dir(self.dir.path());
        cmd
    }

    /// `secure-environment export` with extra args.
    pub fn export(&self, args: &[&str]) -> Output {
        self.cmd()
            .arg("export")
            .args(args)
            .output()
            .expect("failed to run secure-environment export")
    }

    /// `secure-environment import <source> <dest>` with extra args.
    pub fn import(&self, source: &str, dest: &str, args: &[&str]) -> Output {
        self.cmd()
            .args(["import", source, dest])
            .args(args)
            .output()
            .expect("failed to run secure-environment import")
    }
}

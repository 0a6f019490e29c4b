//! Constants used throughout secure-environment.
//!
//! Centralizes environment variable names and wire-level strings.

/// Key identifier (KMS key id, ARN or alias).
pub const ENV_KEY: &str = "SECURE_ENVIRONMENT_KEY";

/// Object-storage URL of the encrypted environment file.
pub const ENV_URL: &str = "SECURE_ENVIRONMENT_URL";

/// Content type tag of the environment file.
pub const ENV_TYPE: &str = "SECURE_ENVIRONMENT_TYPE";

/// Debug logging toggle.
pub const ENV_DEBUG: &str = "SECURE_ENVIRONMENT_DEBUG";

/// Log filter directive (overrides `--debug`).
pub const ENV_LOG: &str = "SECURE_ENVIRONMENT_LOG";

/// Default content type tag.
pub const DEFAULT_ENV_TYPE: &str = "envfile";

/// Content type set on uploaded envelopes.
pub const ENVELOPE_CONTENT_TYPE: &str = "application/json";

/// Region pinned to the classic `s3.amazonaws.com` path-style endpoint.
pub const CLASSIC_S3_REGION: &str = "us-east-1";

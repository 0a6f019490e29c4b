//! Error types.
//!
//! One enum per concern, wrapped by the crate-level [`Error`].

use std::path::PathBuf;
use thiserror::Error;

/// Crate-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Location(#[from] LocationError),

    #[error(transparent)]
    Credential(#[from] CredentialError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create {}: {source}", path.display())]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Missing or empty settings.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required settings: {}", .0.join(", "))]
    MissingSettings(Vec<&'static str>),

    #[error("cannot load secrets: no key identifier set")]
    MissingKey,

    #[error("AWS support not compiled. Rebuild with: cargo install secure-environment --features aws")]
    AwsNotCompiled,
}

/// Object-storage address errors.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum LocationError {
    #[error("not a recognized object-storage address: {0}")]
    Unrecognized(String),
}

/// Ambient credential resolution errors.
#[derive(Error, Debug)]
pub enum CredentialError {
    #[error("no AWS credentials available: {0}")]
    Unavailable(String),

    #[error("no AWS region configured")]
    NoRegion,

    #[error("failed to start AWS client runtime: {0}")]
    Runtime(String),
}

/// Envelope encryption errors.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("key identifier is empty")]
    EmptyKeyId,

    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),

    #[error("unsupported envelope version: {0}")]
    UnsupportedVersion(String),

    #[error("invalid data key: expected {expected} bytes, got {actual}")]
    InvalidDataKey { expected: usize, actual: usize },

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("decryption failed: {0}")]
    DecryptionFailed(String),

    #[error("KMS request failed: {0}")]
    Kms(String),
}

/// Blob store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("no object key in {0}")]
    EmptyKey(String),

    #[error("failed to fetch {location}: {reason}")]
    Get { location: String, reason: String },

    #[error("failed to upload {location}: {reason}")]
    Put { location: String, reason: String },

    #[error("failed to read object body from {location}: {reason}")]
    Body { location: String, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;

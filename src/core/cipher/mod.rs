//! Envelope encryption.
//!
//! Payloads are sealed locally with a per-call data key. The data key comes
//! from a [`KeyService`] (AWS KMS in production), which returns it both in
//! plaintext and wrapped under the caller's master key. Only the wrapped
//! form is stored, inside the envelope, so every decryption goes back to
//! the key service.
//!
//! ## Backends
//!
//! - **AWS KMS**: Feature-gated (`aws`). `GenerateDataKey` / `Decrypt`.
//! - **Stub**: `cfg(test)` or the `test-doubles` feature. In-process,
//!   NOT secure, for exercising the plumbing.

use std::fmt::Debug;

use zeroize::Zeroizing;

use crate::error::Result;

mod envelope;

#[cfg(feature = "aws")]
pub mod aws;

#[cfg(any(test, feature = "test-doubles"))]
mod stub;

pub use envelope::{KmsEnvelope, DATA_KEY_LEN, ENVELOPE_V1};

#[cfg(any(test, feature = "test-doubles"))]
pub use stub::StubKms;

/// Encrypt/decrypt capability consumed by the flows.
///
/// The envelope bytes are opaque to every caller; only the implementation
/// that produced them may interpret them.
pub trait EnvelopeCipher {
    /// Encrypt `plaintext` under the master key `key_id`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the key service or the local seal fails.
    fn encrypt(&self, key_id: &str, plaintext: &[u8]) -> Result<Vec<u8>>;

    /// Decrypt an envelope produced by [`EnvelopeCipher::encrypt`].
    ///
    /// # Errors
    ///
    /// Returns `CipherError` if the envelope is malformed, the key service
    /// refuses to unwrap the data key, or authentication fails.
    fn decrypt(&self, key_id: &str, envelope: &[u8]) -> Result<Zeroizing<Vec<u8>>>;
}

/// A data key in both forms.
pub struct DataKey {
    /// Plaintext key material, used once then dropped.
    pub plaintext: Zeroizing<Vec<u8>>,
    /// The same key wrapped under the master key.
    pub wrapped: Vec<u8>,
}

/// Remote authority that issues and unwraps data keys.
pub trait KeyService: Debug {
    /// Generate a fresh data key under `key_id`.
    fn generate_data_key(&self, key_id: &str) -> Result<DataKey>;

    /// Recover the plaintext of a wrapped data key.
    fn unwrap_data_key(&self, key_id: &str, wrapped: &[u8]) -> Result<Zeroizing<Vec<u8>>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

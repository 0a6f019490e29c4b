//! In-process key service for tests.
//!
//! Wraps data keys as `stub-kms:{key_id}:{hex}` - NOT cryptographically
//! secure, just validates the plumbing without a network.

use std::cell::Cell;

use chacha20poly1305::aead::{KeyInit, OsRng};
use chacha20poly1305::ChaCha20Poly1305;
use zeroize::Zeroizing;

use super::{DataKey, KeyService};
use crate::error::{CipherError, Result};

const PREFIX: &str = "stub-kms:";

/// Stub KMS that binds wrapped keys to the key id that issued them.
#[derive(Debug, Default)]
pub struct StubKms {
    calls: Cell<usize>,
}

impl StubKms {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests served so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }

    fn record(&self) {
        self.calls.set(self.calls.get() + 1);
    }
}

impl KeyService for StubKms {
    fn generate_data_key(&self, key_id: &str) -> Result<DataKey> {
        self.record();
        let key = ChaCha20Poly1305::generate_key(&mut OsRng);
        let hex: String = key.iter().map(|b| format!("{:02x}", b)).collect();

        Ok(DataKey {
            plaintext: Zeroizing::new(key.to_vec()),
            wrapped: format!("{}{}:{}", PREFIX, key_id, hex).into_bytes(),
        })
    }

    fn unwrap_data_key(&self, key_id: &str, wrapped: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        self.record();
        let wrapped = std::str::from_utf8(wrapped)
            .ok()
            .and_then(|w| w.strip_prefix(PREFIX))
            .ok_or_else(|| CipherError::Kms("not a stub-kms ciphertext".to_string()))?;

        let (owner, hex) = wrapped
            .rsplit_once(':')
            .ok_or_else(|| CipherError::Kms("not a stub-kms ciphertext".to_string()))?;
        if owner != key_id {
            return Err(CipherError::Kms(format!(
                "AccessDeniedException: data key was not issued by {}",
                key_id
            ))
            .into());
        }

        if hex.len() % 2 != 0 || !hex.is_ascii() {
            return Err(CipherError::Kms("invalid hex".to_string()).into());
        }
        let bytes: std::result::Result<Vec<u8>, _> = (0..hex.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&hex[i..i + 2], 16))
            .collect();
        let bytes = bytes.map_err(|e| CipherError::Kms(format!("invalid hex: {}", e)))?;
        Ok(Zeroizing::new(bytes))
    }

    fn name(&self) -> &'static str {
        "stub-kms"
    }
}

//! Versioned JSON envelope sealed with ChaCha20-Poly1305.

use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use chacha20poly1305::aead::{Aead, AeadCore, KeyInit, OsRng, Payload};
use chacha20poly1305::{ChaCha20Poly1305, Nonce};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use zeroize::Zeroizing;

use super::{EnvelopeCipher, KeyService};
use crate::error::{CipherError, Result};

/// Version tag, also bound into the AEAD as associated data.
pub const ENVELOPE_V1: &str = "secure-environment-envelope-v1";

/// Data key size in bytes (256 bits).
pub const DATA_KEY_LEN: usize = 32;

/// Nonce size in bytes (96 bits for ChaCha20-Poly1305).
const NONCE_LEN: usize = 12;

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: String,
    /// Wrapped data key (base64)
    key: String,
    /// AEAD nonce (base64)
    nonce: String,
    /// AEAD output (base64)
    ciphertext: String,
}

impl Envelope {
    fn seal(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| {
            CipherError::EncryptionFailed(format!("failed to serialize envelope: {}", e)).into()
        })
    }

    fn open(bytes: &[u8]) -> Result<Self> {
        let envelope: Self = serde_json::from_slice(bytes)
            .map_err(|e| CipherError::MalformedEnvelope(e.to_string()))?;
        if envelope.version != ENVELOPE_V1 {
            return Err(CipherError::UnsupportedVersion(envelope.version).into());
        }
        Ok(envelope)
    }
}

fn decode(field: &str, value: &str) -> Result<Vec<u8>> {
    BASE64
        .decode(value)
        .map_err(|e| CipherError::MalformedEnvelope(format!("invalid base64 in {}: {}", field, e)).into())
}

fn aead(data_key: &[u8]) -> Result<ChaCha20Poly1305> {
    if data_key.len() != DATA_KEY_LEN {
        return Err(CipherError::InvalidDataKey {
            expected: DATA_KEY_LEN,
            actual: data_key.len(),
        }
        .into());
    }
    ChaCha20Poly1305::new_from_slice(data_key).map_err(|_| {
        CipherError::InvalidDataKey {
            expected: DATA_KEY_LEN,
            actual: data_key.len(),
        }
        .into()
    })
}

fn require_key_id(key_id: &str) -> Result<()> {
    if key_id.is_empty() {
        return Err(CipherError::EmptyKeyId.into());
    }
    Ok(())
}

/// Envelope cipher backed by a [`KeyService`].
#[derive(Debug)]
pub struct KmsEnvelope<K: KeyService> {
    keys: K,
}

impl<K: KeyService> KmsEnvelope<K> {
    pub fn new(keys: K) -> Self {
        Self { keys }
    }

    /// The underlying key service.
    pub fn key_service(&self) -> &K {
        &self.keys
    }
}

impl<K: KeyService> EnvelopeCipher for KmsEnvelope<K> {
    fn encrypt(&self, key_id: &str, plaintext: &[u8]) -> Result<Vec<u8>> {
        require_key_id(key_id)?;
        debug!(backend = self.keys.name(), "requesting data key");

        let data_key = self.keys.generate_data_key(key_id)?;
        let cipher = aead(&data_key.plaintext)?;
        let nonce = ChaCha20Poly1305::generate_nonce(&mut OsRng);

        let ciphertext = cipher
            .encrypt(
                &nonce,
                Payload {
                    msg: plaintext,
                    aad: ENVELOPE_V1.as_bytes(),
                },
            )
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        trace!(
            plaintext_len = plaintext.len(),
            ciphertext_len = ciphertext.len(),
            "sealed envelope"
        );

        Envelope {
            version: ENVELOPE_V1.to_string(),
            key: BASE64.encode(&data_key.wrapped),
            nonce: BASE64.encode(nonce),
            ciphertext: BASE64.encode(ciphertext),
        }
        .seal()
    }

    fn decrypt(&self, key_id: &str, envelope: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        require_key_id(key_id)?;
        trace!(envelope_len = envelope.len(), "opening envelope");

        let envelope = Envelope::open(envelope)?;
        let wrapped = decode("key", &envelope.key)?;
        let nonce = decode("nonce", &envelope.nonce)?;
        let ciphertext = decode("ciphertext", &envelope.ciphertext)?;

        if nonce.len() != NONCE_LEN {
            return Err(CipherError::MalformedEnvelope(format!(
                "invalid nonce size: expected {}, got {}",
                NONCE_LEN,
                nonce.len()
            ))
            .into());
        }

        debug!(backend = self.keys.name(), "unwrapping data key");
        let data_key = self.keys.unwrap_data_key(key_id, &wrapped)?;
        let cipher = aead(&data_key)?;

        let plaintext = cipher
            .decrypt(
                Nonce::from_slice(&nonce),
                Payload {
                    msg: &ciphertext,
                    aad: ENVELOPE_V1.as_bytes(),
                },
            )
            .map_err(|_| CipherError::DecryptionFailed("authentication failed".to_string()))?;

        trace!(plaintext_len = plaintext.len(), "opened envelope");
        Ok(Zeroizing::new(plaintext))
    }
}

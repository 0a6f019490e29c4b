//! AWS KMS key service.
//!
//! Enable with `--features aws` (on by default).
//!
//! Data keys come from `GenerateDataKey` (`AES_256`, 32 bytes) and are
//! recovered with `Decrypt`. Credentials follow the default provider chain
//! (`AWS_ACCESS_KEY_ID`, profiles, instance roles, ...).

use std::sync::Arc;

use aws_sdk_kms::error::DisplayErrorContext;
use aws_sdk_kms::primitives::Blob;
use aws_sdk_kms::types::DataKeySpec;
use tokio::runtime::Runtime;
use tracing::trace;
use zeroize::Zeroizing;

use super::{DataKey, KeyService};
use crate::core::aws::AwsSession;
use crate::error::{CipherError, Result};

/// AWS KMS key service.
#[derive(Debug)]
pub struct AwsKms {
    runtime: Arc<Runtime>,
    client: aws_sdk_kms::Client,
}

impl AwsKms {
    /// Build a KMS client on a shared session.
    ///
    /// `region` comes from the key ARN when it carries one.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::NoRegion` if no region can be resolved.
    /// No KMS request is made.
    pub(crate) fn new(session: &AwsSession, region: Option<&str>) -> Result<Self> {
        let config = session.config_for(region)?;
        Ok(Self {
            runtime: session.runtime(),
            client: aws_sdk_kms::Client::new(&config),
        })
    }
}

impl KeyService for AwsKms {
    fn generate_data_key(&self, key_id: &str) -> Result<DataKey> {
        trace!(key_id = %key_id, "GenerateDataKey");

        let output = self
            .runtime
            .block_on(
                self.client
                    .generate_data_key()
                    .key_id(key_id)
                    .key_spec(DataKeySpec::Aes256)
                    .send(),
            )
            .map_err(|e| CipherError::Kms(format!("GenerateDataKey: {}", DisplayErrorContext(&e))))?;

        let plaintext = output
            .plaintext()
            .ok_or_else(|| CipherError::Kms("no plaintext data key returned".to_string()))?;
        let wrapped = output
            .ciphertext_blob()
            .ok_or_else(|| CipherError::Kms("no wrapped data key returned".to_string()))?;

        Ok(DataKey {
            plaintext: Zeroizing::new(plaintext.as_ref().to_vec()),
            wrapped: wrapped.as_ref().to_vec(),
        })
    }

    fn unwrap_data_key(&self, key_id: &str, wrapped: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        trace!(key_id = %key_id, wrapped_len = wrapped.len(), "Decrypt");

        let output = self
            .runtime
            .block_on(
                self.client
                    .decrypt()
                    .key_id(key_id)
                    .ciphertext_blob(Blob::new(wrapped.to_vec()))
                    .send(),
            )
            .map_err(|e| CipherError::Kms(format!("Decrypt: {}", DisplayErrorContext(&e))))?;

        let plaintext = output
            .plaintext()
            .ok_or_else(|| CipherError::Kms("no plaintext data key returned".to_string()))?;
        Ok(Zeroizing::new(plaintext.as_ref().to_vec()))
    }

    fn name(&self) -> &'static str {
        "aws-kms"
    }
}

/// Region embedded in a KMS key ARN (`arn:aws:kms:{region}:...`).
///
/// Key ids and aliases carry no region and return `None`.
pub fn arn_region(key_id: &str) -> Option<&str> {
    let rest = key_id.strip_prefix("arn:")?;
    let mut parts = rest.splitn(4, ':');
    let _partition = parts.next()?;
    if parts.next()? != "kms" {
        return None;
    }
    parts.next().filter(|region| !region.is_empty())
}

//! S3 blob store.
//!
//! Enable with `--features aws` (on by default).

use std::sync::Arc;

use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use tokio::runtime::Runtime;
use tracing::debug;

use super::{require_object_key, BlobStore};
use crate::core::aws::AwsSession;
use crate::core::constants::ENVELOPE_CONTENT_TYPE;
use crate::core::location::StorageLocation;
use crate::error::{Error, Result, StoreError};

/// S3 client bound to one region.
#[derive(Debug)]
pub struct S3Store {
    runtime: Arc<Runtime>,
    client: Client,
}

impl S3Store {
    /// Build an S3 client on a shared session.
    ///
    /// `region` comes from the parsed location when the URL carries one.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::NoRegion` if no region can be resolved.
    pub(crate) fn new(session: &AwsSession, region: Option<&str>) -> Result<Self> {
        let config = session.config_for(region)?;
        Ok(Self {
            runtime: session.runtime(),
            client: Client::new(&config),
        })
    }
}

impl BlobStore for S3Store {
    fn get(&self, location: &StorageLocation) -> Result<Vec<u8>> {
        require_object_key(location)?;
        debug!(%location, "downloading envelope");

        self.runtime.block_on(async {
            let resp = self
                .client
                .get_object()
                .bucket(location.bucket())
                .key(location.key())
                .send()
                .await
                .map_err(|e| StoreError::Get {
                    location: location.to_string(),
                    reason: DisplayErrorContext(&e).to_string(),
                })?;

            let body = resp.body.collect().await.map_err(|e| StoreError::Body {
                location: location.to_string(),
                reason: e.to_string(),
            })?;

            let data = body.into_bytes().to_vec();
            debug!(bytes = data.len(), %location, "downloaded envelope");
            Ok::<_, Error>(data)
        })
    }

    fn put(&self, location: &StorageLocation, data: &[u8]) -> Result<()> {
        require_object_key(location)?;
        debug!(bytes = data.len(), %location, "uploading envelope");

        self.runtime
            .block_on(
                self.client
                    .put_object()
                    .bucket(location.bucket())
                    .key(location.key())
                    .content_type(ENVELOPE_CONTENT_TYPE)
                    .body(ByteStream::from(data.to_vec()))
                    .send(),
            )
            .map_err(|e| StoreError::Put {
                location: location.to_string(),
                reason: DisplayErrorContext(&e).to_string(),
            })?;

        Ok(())
    }

    fn name(&self) -> &'static str {
        "s3"
    }
}

//! Shared AWS SDK plumbing.
//!
//! The SDK is async while every flow here is blocking. One [`AwsSession`]
//! owns a current-thread runtime and the ambient SDK config; each client
//! built from it shares the runtime and `block_on`s its requests.
//! Credentials are resolved once, when the session is opened.

use std::sync::Arc;

use aws_config::{BehaviorVersion, Region, SdkConfig};
use aws_credential_types::provider::ProvideCredentials;
use tokio::runtime::Runtime;
use tracing::debug;

use crate::error::{CredentialError, Error, Result};

/// Runtime plus resolved SDK config, shared by the S3 and KMS clients.
#[derive(Debug)]
pub(crate) struct AwsSession {
    runtime: Arc<Runtime>,
    config: SdkConfig,
}

impl AwsSession {
    /// Load the default SDK config and eagerly resolve credentials.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError` if the runtime cannot start or no
    /// credentials can be found.
    pub(crate) fn connect() -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| CredentialError::Runtime(e.to_string()))?;

        let config = runtime.block_on(async {
            let config = aws_config::defaults(BehaviorVersion::latest()).load().await;

            let provider = config.credentials_provider().ok_or_else(|| {
                CredentialError::Unavailable("no credentials provider configured".to_string())
            })?;
            provider
                .provide_credentials()
                .await
                .map_err(|e| CredentialError::Unavailable(e.to_string()))?;
            debug!("resolved AWS credentials");

            Ok::<_, Error>(config)
        })?;

        Ok(Self {
            runtime: Arc::new(runtime),
            config,
        })
    }

    /// Handle to the shared runtime.
    pub(crate) fn runtime(&self) -> Arc<Runtime> {
        Arc::clone(&self.runtime)
    }

    /// SDK config for one client, with `region` overriding the ambient one.
    ///
    /// # Errors
    ///
    /// Returns `CredentialError::NoRegion` if neither is set.
    pub(crate) fn config_for(&self, region: Option<&str>) -> Result<SdkConfig> {
        let config = match region {
            Some(region) => self
                .config
                .to_builder()
                .region(Region::new(region.to_string()))
                .build(),
            None => self.config.clone(),
        };

        match config.region() {
            Some(region) => debug!(region = %region, "resolved AWS region"),
            None => return Err(CredentialError::NoRegion.into()),
        }
        Ok(config)
    }
}

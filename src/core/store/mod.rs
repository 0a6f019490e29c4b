//! Blob storage for encrypted envelopes.
//!
//! ## Adding a New Storage Backend
//!
//! 1. Implement the `BlobStore` trait
//! 2. Add the implementation in a new file (e.g., `gcs.rs`)
//! 3. Feature-gate it if it pulls in an SDK
//! 4. Re-export from this module

use crate::core::location::StorageLocation;
use crate::error::{Result, StoreError};

#[cfg(any(test, feature = "test-doubles"))]
mod memory;

#[cfg(feature = "aws")]
pub mod s3;

#[cfg(any(test, feature = "test-doubles"))]
pub use memory::MemoryStore;

/// Remote object storage addressed by [`StorageLocation`].
pub trait BlobStore {
    /// Fetch the object at `location`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the object cannot be fetched.
    fn get(&self, location: &StorageLocation) -> Result<Vec<u8>>;

    /// Create or replace the object at `location`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the upload fails.
    fn put(&self, location: &StorageLocation, data: &[u8]) -> Result<()>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Reject bucket-root locations; objects need a key.
pub(crate) fn require_object_key(location: &StorageLocation) -> Result<()> {
    if location.key().is_empty() {
        return Err(StoreError::EmptyKey(location.to_string()).into());
    }
    Ok(())
}

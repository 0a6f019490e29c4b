//! In-memory blob store for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use super::{require_object_key, BlobStore};
use crate::core::location::StorageLocation;
use crate::error::{Result, StoreError};

/// Objects keyed by `(bucket, key)`.
#[derive(Debug, Default)]
pub struct MemoryStore {
    objects: RefCell<HashMap<(String, String), Vec<u8>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw object bytes, if present.
    pub fn object(&self, location: &StorageLocation) -> Option<Vec<u8>> {
        self.objects
            .borrow()
            .get(&(location.bucket().to_string(), location.key().to_string()))
            .cloned()
    }

    /// Number of stored objects.
    pub fn len(&self) -> usize {
        self.objects.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.borrow().is_empty()
    }
}

impl BlobStore for MemoryStore {
    fn get(&self, location: &StorageLocation) -> Result<Vec<u8>> {
        require_object_key(location)?;
        self.object(location).ok_or_else(|| {
            StoreError::Get {
                location: location.to_string(),
                reason: "NoSuchKey".to_string(),
            }
            .into()
        })
    }

    fn put(&self, location: &StorageLocation, data: &[u8]) -> Result<()> {
        require_object_key(location)?;
        self.objects.borrow_mut().insert(
            (location.bucket().to_string(), location.key().to_string()),
            data.to_vec(),
        );
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}

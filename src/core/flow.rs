//! Import and export flows.
//!
//! Each step completes before the next starts, and the first failure aborts
//! the whole operation. Nothing is retried.

use std::io::Write;
use std::path::Path;

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::cipher::EnvelopeCipher;
use crate::core::env;
use crate::core::location::StorageLocation;
use crate::core::store::BlobStore;
use crate::error::{Error, Result};

/// Read the plaintext env file to import.
///
/// # Errors
///
/// Returns `Error::Read` if the file cannot be opened or read.
pub fn read_source(source: &Path) -> Result<Zeroizing<Vec<u8>>> {
    let bytes = std::fs::read(source).map_err(|e| Error::Read {
        path: source.to_path_buf(),
        source: e,
    })?;
    debug!(source = %source.display(), bytes = bytes.len(), "read env file");
    Ok(Zeroizing::new(bytes))
}

/// Encrypt `plaintext` and upload the envelope to `location`.
///
/// # Errors
///
/// Returns the first error from encrypting or uploading.
pub fn import(
    location: &StorageLocation,
    key_id: &str,
    plaintext: &[u8],
    store: &dyn BlobStore,
    cipher: &dyn EnvelopeCipher,
) -> Result<()> {
    debug!(%location, "importing environment");

    let envelope = cipher.encrypt(key_id, plaintext)?;
    store.put(location, &envelope)?;

    info!(%location, store = store.name(), "uploaded encrypted environment");
    Ok(())
}

/// Fetch, decrypt and print an env file as `export` statements.
///
/// Values are written byte for byte; nothing is re-encoded.
///
/// Returns the number of statements written.
///
/// # Errors
///
/// Returns the first error from fetching, decrypting or writing.
pub fn export(
    location: &StorageLocation,
    key_id: &str,
    store: &dyn BlobStore,
    cipher: &dyn EnvelopeCipher,
    out: &mut dyn Write,
) -> Result<usize> {
    debug!(%location, "attempting to load secure environment");

    let envelope = store.get(location)?;
    let plaintext = cipher.decrypt(key_id, &envelope)?;

    let mut written = 0;
    for entry in env::parse(plaintext.as_slice()) {
        out.write_all(&env::render(&entry))?;
        out.write_all(b"\n")?;
        written += 1;
    }
    out.flush()?;

    debug!(entries = written, "exported environment");
    Ok(written)
}

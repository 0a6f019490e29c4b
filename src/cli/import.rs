//! `import` command.

use std::fs::{self, OpenOptions};
use std::path::Path;

use tracing::debug;

use super::{connect, output};
use crate::core::settings::Settings;
use crate::core::{flow, location};
use crate::error::{Error, Result};

/// Encrypt `source` and upload it to the configured location.
///
/// `dest` is created empty before anything is read or uploaded and is left
/// in place if a later step fails.
pub fn execute(settings: Settings, source: &Path, dest: &Path) -> Result<()> {
    let resolved = settings.for_import()?;

    create_placeholder(dest)?;

    let location = location::parse(&resolved.location)?;
    let plaintext = flow::read_source(source)?;

    let (store, cipher) = connect::backends(&location, &resolved.key_id)?;
    flow::import(
        &location,
        &resolved.key_id,
        &plaintext,
        store.as_ref(),
        cipher.as_ref(),
    )?;

    output::success(&format!(
        "encrypted {} to {}",
        output::path(&source.display().to_string()),
        output::path(&location.to_string())
    ));
    Ok(())
}

fn create_placeholder(dest: &Path) -> Result<()> {
    let create = |e: std::io::Error| Error::Create {
        path: dest.to_path_buf(),
        source: e,
    };

    OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(dest)
        .map_err(create)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(dest, fs::Permissions::from_mode(0o600)).map_err(create)?;
    }

    debug!(dest = %dest.display(), "created placeholder");
    Ok(())
}

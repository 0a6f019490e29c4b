//! `export` command.

use std::io;

use tracing::debug;

use super::connect;
use crate::core::settings::Settings;
use crate::core::{flow, location};
use crate::error::Result;

/// Print the decrypted environment to stdout.
///
/// Does nothing when no location or type is configured, so the command is
/// safe to `eval` from a shell profile on machines without secrets.
pub fn execute(settings: Settings) -> Result<()> {
    let Some(resolved) = settings.for_export()? else {
        return Ok(());
    };

    let location = location::parse(&resolved.location)?;
    debug!(%location, env_type = %resolved.env_type, "resolved export target");

    let (store, cipher) = connect::backends(&location, &resolved.key_id)?;

    let stdout = io::stdout();
    let mut out = stdout.lock();
    flow::export(
        &location,
        &resolved.key_id,
        store.as_ref(),
        cipher.as_ref(),
        &mut out,
    )?;
    Ok(())
}

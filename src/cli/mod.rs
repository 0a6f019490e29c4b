//! Command-line interface.

pub mod completions;
pub mod export;
pub mod import;
pub mod output;

use std::path::PathBuf;

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::core::constants::{DEFAULT_ENV_TYPE, ENV_DEBUG, ENV_KEY, ENV_TYPE, ENV_URL};
use crate::core::settings::Settings;

/// Envelope-encrypted environment files in S3.
#[derive(Parser)]
#[command(
    name = "secure-environment",
    about = "Load KMS-encrypted environment files from S3 into your shell",
    version,
    after_help = "Usage in a shell profile:\n  eval \"$(secure-environment export)\""
)]
pub struct Cli {
    /// Enable debug logging
    #[arg(
        long,
        global = true,
        env = ENV_DEBUG,
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new()
    )]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Where the encrypted environment lives and how to unlock it.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// KMS key id, alias or ARN
    #[arg(long, env = ENV_KEY)]
    pub key: Option<String>,

    /// S3 URL of the encrypted environment
    #[arg(long, env = ENV_URL)]
    pub url: Option<String>,

    /// Content type of the environment
    #[arg(long = "env-type", env = ENV_TYPE, default_value = DEFAULT_ENV_TYPE)]
    pub env_type: Option<String>,
}

impl SourceArgs {
    pub fn settings(self) -> Settings {
        Settings::new(self.url, self.key, self.env_type)
    }
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Print the decrypted environment as shell `export` statements
    Export {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Encrypt a local env file and upload it
    Import {
        /// Plaintext env file to encrypt
        source_file: PathBuf,
        /// Local file created as a placeholder for the upload
        dest_file: PathBuf,
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completions.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    PowerShell,
}

/// Execute a CLI command.
///
/// # Errors
///
/// Returns the error of the first failing step.
pub fn execute(command: Command) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Export { source } => export::execute(source.settings()),
        Import {
            source_file,
            dest_file,
            source,
        } => import::execute(source.settings(), &source_file, &dest_file),
        Completions { shell } => completions::execute(shell),
    }
}

#[cfg(feature = "aws")]
mod connect {
    use crate::core::aws::AwsSession;
    use crate::core::cipher::aws::{arn_region, AwsKms};
    use crate::core::cipher::{EnvelopeCipher, KmsEnvelope};
    use crate::core::location::StorageLocation;
    use crate::core::store::s3::S3Store;
    use crate::core::store::BlobStore;
    use crate::error::Result;

    /// Build the S3 store and KMS cipher for `location` on one session.
    ///
    /// Credentials are resolved once. S3 uses the region in the URL if any;
    /// KMS uses the region in the key ARN if any. Both otherwise fall back
    /// to the ambient AWS region.
    pub(crate) fn backends(
        location: &StorageLocation,
        key_id: &str,
    ) -> Result<(Box<dyn BlobStore>, Box<dyn EnvelopeCipher>)> {
        let session = AwsSession::connect()?;
        let store = S3Store::new(&session, location.explicit_region())?;
        let cipher = KmsEnvelope::new(AwsKms::new(&session, arn_region(key_id))?);
        Ok((Box::new(store), Box::new(cipher)))
    }
}

#[cfg(not(feature = "aws"))]
mod connect {
    use crate::core::cipher::EnvelopeCipher;
    use crate::core::location::StorageLocation;
    use crate::core::store::BlobStore;
    use crate::error::{ConfigError, Result};

    pub(crate) fn backends(
        _location: &StorageLocation,
        _key_id: &str,
    ) -> Result<(Box<dyn BlobStore>, Box<dyn EnvelopeCipher>)> {
        Err(ConfigError::AwsNotCompiled.into())
    }
}

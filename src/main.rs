//! secure-environment - envelope-encrypted environment files in S3.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use secure_environment::cli::output;
use secure_environment::cli::{execute, Cli};
use secure_environment::core::constants::ENV_LOG;
use secure_environment::error::{ConfigError, CredentialError, Error};

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr; stdout is reserved for `export` statements.
    let filter = EnvFilter::try_from_env(ENV_LOG).unwrap_or_else(|_| {
        if cli.debug {
            EnvFilter::new("secure_environment=debug")
        } else {
            EnvFilter::new("secure_environment=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli.command) {
        let suggestion = match &e {
            Error::Config(ConfigError::MissingSettings(_)) => {
                Some("set --url, --key and --env-type or their SECURE_ENVIRONMENT_* variables")
            }
            Error::Config(ConfigError::MissingKey) => {
                Some("set --key or SECURE_ENVIRONMENT_KEY")
            }
            Error::Credential(CredentialError::NoRegion) => Some("set AWS_REGION"),
            Error::Credential(_) => Some("check AWS_PROFILE or AWS_ACCESS_KEY_ID"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}

//! Splunk Sentinel - terminal assistant for security log triage.
//!
//! Responsibilities:
//! - Parse command-line arguments and environment variables.
//! - Assemble configuration and apply CLI overrides.
//! - Dispatch canned hunts, free-text questions, and raw SPL to the
//!   shared client and advisor crates.
//!
//! Does NOT handle:
//! - The search job lifecycle (see `crates/client`).
//! - SPL generation or result summarization (see `crates/advisor`).
//!
//! Invariants:
//! - `load_dotenv()` is called BEFORE CLI parsing so `.env` can provide
//!   clap env defaults.
//! - Every failure path prints a bounded message and exits with a
//!   structured code; the binary never panics on operational errors.

mod args;
mod canned;
mod dispatch;
mod error;
mod output;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use secrecy::SecretString;
use sentinel_config::{Config, ConfigLoader, normalize_base_url};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() {
    // Load .env BEFORE CLI parsing so clap env defaults can read .env values
    if let Err(e) = ConfigLoader::new().load_dotenv() {
        eprintln!("Failed to load environment: {}", e);
        std::process::exit(ExitCode::GeneralError.as_i32());
    }

    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(ExitCode::GeneralError.as_i32());
        }
    };

    let exit_code = match run_command(&cli, &config).await {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("Request failed: {}", output::format_error(&e));
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}

/// Load configuration from the environment and key files, then layer the
/// CLI's global overrides on top.
fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = ConfigLoader::new().load()?;

    if let Some(ref url) = cli.base_url {
        config.connection.base_url = normalize_base_url(url)?;
    }
    if let Some(ref username) = cli.username {
        config.auth.username = username.clone();
    }
    if let Some(ref password) = cli.password {
        config.auth.password = SecretString::new(password.clone().into());
    }
    if cli.skip_verify {
        config.connection.skip_verify = true;
    }
    if let Some(timeout_secs) = cli.timeout {
        config.connection.timeout = std::time::Duration::from_secs(timeout_secs);
    }
    if let Some(max_wait_secs) = cli.max_wait {
        config.search.max_wait = std::time::Duration::from_secs(max_wait_secs);
    }

    Ok(config)
}

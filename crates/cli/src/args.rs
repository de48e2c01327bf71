//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Parse command-line arguments and environment variables.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).
//! - Does not handle config loading (see the config crate).

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "sentinel")]
#[command(about = "Splunk Sentinel - ask your security logs questions", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  sentinel failed-logins 1h\n  sentinel errors\n  sentinel suspicious-process 4h\n  sentinel ask which hosts saw brute force attempts today?\n  sentinel search 'search index=main sourcetype=sshd | head 20'\n"
)]
pub struct Cli {
    /// Base URL of the Splunk server (e.g., https://localhost:8089)
    #[arg(short, long, global = true, env = "SPLUNK_BASE_URL")]
    pub base_url: Option<String>,

    /// Username for session token authentication
    #[arg(short, long, global = true, env = "SPLUNK_USERNAME")]
    pub username: Option<String>,

    /// Password for session token authentication
    #[arg(short, long, global = true, env = "SPLUNK_PASSWORD")]
    pub password: Option<String>,

    /// Skip TLS certificate verification (for self-signed certificates)
    #[arg(long, global = true)]
    pub skip_verify: bool,

    /// Per-request timeout in seconds
    #[arg(long, global = true, env = "REQUEST_TIMEOUT_SECONDS")]
    pub timeout: Option<u64>,

    /// Total seconds to wait for a search job to complete
    #[arg(long, global = true, env = "SPLUNK_QUERY_MAX_WAIT_SECONDS")]
    pub max_wait: Option<u64>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Count failed SSH logins by host and user
    FailedLogins {
        /// Lookback window, e.g. 15m, 4h, 1d (default 30m)
        window: Option<String>,
    },

    /// Count error and exception events by host and source
    Errors {
        /// Lookback window, e.g. 15m, 4h, 1d (default 15m)
        window: Option<String>,
    },

    /// Flag process events matching common attack tooling patterns
    SuspiciousProcess {
        /// Lookback window, e.g. 15m, 4h, 1d (default 1h)
        window: Option<String>,
    },

    /// Ask a free-text question; the advisor turns it into SPL
    Ask {
        /// The question, as plain words (quoting is optional)
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },

    /// Run a raw SPL query as-is
    Search {
        /// The SPL query to execute (e.g., 'search index=main | head 10')
        query: String,
    },
}

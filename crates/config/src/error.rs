//! Configuration error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating configuration.
///
/// All of these are fatal at startup; nothing in this crate retries.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    /// The Splunk base URL could not be normalized to `scheme://host[:port]`.
    #[error("Invalid Splunk base URL: {0}")]
    InvalidBaseUrl(String),

    /// A key file was missing, unreadable, or malformed.
    #[error("Key file {path}: {message}")]
    KeyFile { path: PathBuf, message: String },

    /// A required secret was found nowhere (env or key file).
    #[error("Missing required setting: {0}")]
    Missing(&'static str),
}

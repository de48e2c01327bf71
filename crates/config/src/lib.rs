//! Configuration management for Splunk Sentinel.
//!
//! This crate provides types and loaders for assembling the assistant's
//! runtime settings from environment variables, an optional `.env` file,
//! and JSON key files in the operator's keys directory.

pub mod constants;
mod error;
mod loader;
mod types;

pub use error::ConfigError;
pub use loader::{ConfigLoader, env_var_or_none, normalize_base_url};
pub use types::{AdvisorConfig, AuthConfig, Config, ConnectionConfig, SearchConfig};

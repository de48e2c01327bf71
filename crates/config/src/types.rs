//! Configuration type definitions.
//!
//! Responsibilities:
//! - Define the settings consumed by the client, advisor, and CLI crates.
//! - Keep secrets in `secrecy::SecretString` so they never hit logs.
//!
//! Does NOT handle:
//! - Loading from environment or key files (see `loader`).
//! - Network connections (see the client crate).

use secrecy::SecretString;
use std::time::Duration;

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_FETCH_COUNT, DEFAULT_MAX_WAIT_SECS, DEFAULT_MODEL,
    DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_SECS,
};

/// Connection settings for the Splunk management API.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Base URL of the Splunk server (e.g., `https://localhost:8089`).
    pub base_url: String,
    /// Whether to skip TLS certificate verification (self-signed certs).
    pub skip_verify: bool,
    /// Per-request timeout applied to every HTTP call.
    pub timeout: Duration,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// Splunk credentials. One pair per client instance.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub username: String,
    pub password: SecretString,
}

/// Search job polling and fetch settings.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Fixed interval between job status checks.
    pub poll_interval: Duration,
    /// Total budget for a job to reach done before the client gives up.
    pub max_wait: Duration,
    /// Cap on the number of result rows fetched for a completed job.
    pub fetch_count: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_wait: Duration::from_secs(DEFAULT_MAX_WAIT_SECS),
            fetch_count: DEFAULT_FETCH_COUNT,
        }
    }
}

/// Settings for the LLM advisor.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_key: SecretString,
    pub model: String,
}

/// Complete assistant configuration.
#[derive(Debug, Clone)]
pub struct Config {
    pub connection: ConnectionConfig,
    pub auth: AuthConfig,
    pub search: SearchConfig,
    pub advisor: AdvisorConfig,
}

impl Config {
    /// Convenience constructor used by tests and examples.
    pub fn with_credentials(base_url: String, username: String, password: SecretString) -> Self {
        Self {
            connection: ConnectionConfig {
                base_url,
                ..ConnectionConfig::default()
            },
            auth: AuthConfig { username, password },
            search: SearchConfig::default(),
            advisor: AdvisorConfig {
                api_key: SecretString::new(String::new().into()),
                model: DEFAULT_MODEL.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_defaults() {
        let conn = ConnectionConfig::default();
        assert_eq!(conn.base_url, DEFAULT_BASE_URL);
        assert!(!conn.skip_verify);
        assert_eq!(conn.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn test_search_defaults() {
        let search = SearchConfig::default();
        assert_eq!(search.poll_interval, Duration::from_millis(1000));
        assert_eq!(search.max_wait, Duration::from_secs(60));
        assert_eq!(search.fetch_count, 50);
    }

    #[test]
    fn test_password_not_exposed_in_debug() {
        let config = Config::with_credentials(
            "https://localhost:8089".to_string(),
            "admin".to_string(),
            SecretString::new("hunter2".to_string().into()),
        );
        let debug_output = format!("{:?}", config);
        assert!(!debug_output.contains("hunter2"));
        assert!(debug_output.contains("admin"));
    }
}

//! Client builder for constructing [`SplunkClient`] instances.
//!
//! This module is responsible for:
//! - Providing a fluent builder API for client configuration
//! - Validating required configuration (base_url, credentials)
//! - Normalizing the base URL (removing trailing slashes)
//! - Configuring the underlying HTTP client (timeout, TLS verification)
//!
//! # Invariants
//! - `base_url` and `credentials` are required and checked at `build()`
//! - The per-call timeout is set once on the shared `reqwest::Client`
//! - `skip_verify` only affects HTTPS connections and is never enabled
//!   implicitly; HTTP URLs log a warning

use std::time::Duration;

use sentinel_config::Config;
use sentinel_config::constants::{
    DEFAULT_FETCH_COUNT, DEFAULT_MAX_WAIT_SECS, DEFAULT_POLL_INTERVAL_MS, DEFAULT_TIMEOUT_SECS,
};

use crate::auth::{Credentials, Session};
use crate::client::SplunkClient;
use crate::error::{ClientError, Result};

/// Builder for creating a new [`SplunkClient`].
///
/// All options have defaults except `base_url` and `credentials`.
pub struct SplunkClientBuilder {
    base_url: Option<String>,
    credentials: Option<Credentials>,
    skip_verify: bool,
    timeout: Duration,
    poll_interval: Duration,
    max_wait: Duration,
    fetch_count: u64,
}

impl Default for SplunkClientBuilder {
    fn default() -> Self {
        Self {
            base_url: None,
            credentials: None,
            skip_verify: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_wait: Duration::from_secs(DEFAULT_MAX_WAIT_SECS),
            fetch_count: DEFAULT_FETCH_COUNT,
        }
    }
}

impl SplunkClientBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL of the Splunk server, e.g. `https://localhost:8089`.
    /// Trailing slashes are removed.
    pub fn base_url(mut self, url: String) -> Self {
        self.base_url = Some(url);
        self
    }

    /// Set the username/password pair the client authenticates with.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Set whether to skip TLS certificate verification.
    ///
    /// # Security Warning
    /// Only use this for lab servers with self-signed certificates.
    /// Disabling verification exposes the connection to man-in-the-middle
    /// attacks. It has no effect on plain-HTTP URLs.
    pub fn skip_verify(mut self, skip: bool) -> Self {
        self.skip_verify = skip;
        self
    }

    /// Set the per-request timeout. Default is 45 seconds.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the fixed interval between job status checks. Default is 1 second.
    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    /// Set the total completion budget for a search job. Default is 60 seconds.
    pub fn max_wait(mut self, max_wait: Duration) -> Self {
        self.max_wait = max_wait;
        self
    }

    /// Set the cap on rows fetched for a completed job. Default is 50.
    pub fn fetch_count(mut self, count: u64) -> Self {
        self.fetch_count = count;
        self
    }

    /// Pre-configure the builder from loaded configuration.
    ///
    /// Centralizes the conversion from config types so callers don't
    /// duplicate field-by-field wiring.
    pub fn from_config(mut self, config: &Config) -> Self {
        self.base_url = Some(config.connection.base_url.clone());
        self.credentials = Some(Credentials::new(
            config.auth.username.clone(),
            config.auth.password.clone(),
        ));
        self.skip_verify = config.connection.skip_verify;
        self.timeout = config.connection.timeout;
        self.poll_interval = config.search.poll_interval;
        self.max_wait = config.search.max_wait;
        self.fetch_count = config.search.fetch_count;
        self
    }

    /// Normalize a base URL by removing trailing slashes, preventing double
    /// slashes when concatenating endpoint paths.
    fn normalize_base_url(url: String) -> String {
        url.trim_end_matches('/').to_string()
    }

    /// Build the [`SplunkClient`] with the configured options.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::InvalidUrl`] if `base_url` was not provided.
    /// Returns [`ClientError::AuthFailed`] if `credentials` were not provided.
    pub fn build(self) -> Result<SplunkClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::InvalidUrl("base_url is required".to_string()))?;
        let base_url = Self::normalize_base_url(base_url);

        let credentials = self
            .credentials
            .ok_or_else(|| ClientError::AuthFailed("credentials are required".to_string()))?;

        let mut http_builder = reqwest::Client::builder().timeout(self.timeout);

        if self.skip_verify {
            if base_url.starts_with("https://") {
                // Verification warnings are suppressed here by construction:
                // the connector simply accepts the certificate.
                http_builder = http_builder.danger_accept_invalid_certs(true);
            } else {
                tracing::warn!(
                    "skip_verify=true has no effect on HTTP URLs. TLS verification only applies to HTTPS connections."
                );
            }
        }

        let http = http_builder.build()?;

        Ok(SplunkClient {
            http,
            base_url,
            credentials,
            session: Session::default(),
            poll_interval: self.poll_interval,
            max_wait: self.max_wait,
            fetch_count: self.fetch_count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn config_fixture() -> Config {
        Config::with_credentials(
            "https://splunk.example.com:8089".to_string(),
            "soc".to_string(),
            SecretString::new("pass".to_string().into()),
        )
    }

    #[test]
    fn test_from_config_maps_connection_fields() {
        let mut config = config_fixture();
        config.connection.skip_verify = true;
        config.connection.timeout = Duration::from_secs(120);
        config.search.poll_interval = Duration::from_millis(250);
        config.search.max_wait = Duration::from_secs(90);
        config.search.fetch_count = 25;

        let builder = SplunkClient::builder().from_config(&config);

        assert_eq!(
            builder.base_url,
            Some("https://splunk.example.com:8089".to_string())
        );
        assert!(builder.skip_verify);
        assert_eq!(builder.timeout, Duration::from_secs(120));
        assert_eq!(builder.poll_interval, Duration::from_millis(250));
        assert_eq!(builder.max_wait, Duration::from_secs(90));
        assert_eq!(builder.fetch_count, 25);
    }

    #[test]
    fn test_from_config_builds() {
        let client = SplunkClient::builder()
            .from_config(&config_fixture())
            .build();
        assert!(client.is_ok());
        assert_eq!(
            client.unwrap().base_url(),
            "https://splunk.example.com:8089"
        );
    }

    #[test]
    fn test_normalize_base_url_trailing_slash() {
        assert_eq!(
            SplunkClientBuilder::normalize_base_url("https://localhost:8089/".to_string()),
            "https://localhost:8089"
        );
    }

    #[test]
    fn test_normalize_base_url_multiple_trailing_slashes() {
        assert_eq!(
            SplunkClientBuilder::normalize_base_url("https://example.com:8089//".to_string()),
            "https://example.com:8089"
        );
    }
}

//! Error types for the Splunk client.

use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Splunk client operations.
///
/// Nothing here is retried internally; the client fails fast and leaves
/// retry decisions to the caller.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Login succeeded at the HTTP level but no usable session key came back.
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Network-level failure: connect, TLS, or the per-call timeout.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Any response with status >= 400 from any endpoint.
    #[error("Request failed ({status}) at {url}: {body}")]
    RequestFailed {
        status: u16,
        url: String,
        body: String,
    },

    /// Job submission returned no sid. Carries the raw response body for
    /// diagnostics.
    #[error("Could not obtain job handle from response: {raw}")]
    MissingSid { raw: String },

    /// The poll deadline elapsed before the job reported done. Carries the
    /// sid so the caller can investigate the job out-of-band.
    #[error("Search job {sid} did not complete within {waited:?}")]
    SearchTimeout { sid: String, waited: Duration },

    /// Response body could not be parsed into the expected shape.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Malformed base URL at construction time.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Self::AuthFailed(_))
            || matches!(self, Self::RequestFailed { status, .. } if *status == 401 || *status == 403)
    }

    /// Check if this error is the poll-deadline timeout.
    pub fn is_search_timeout(&self) -> bool {
        matches!(self, Self::SearchTimeout { .. })
    }
}

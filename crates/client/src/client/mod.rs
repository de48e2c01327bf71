//! Main Splunk search client.
//!
//! This module provides [`SplunkClient`], which composes the endpoint
//! functions into the submit / poll / fetch lifecycle.
//!
//! # Submodules
//! - [`builder`]: Client construction and configuration
//! - `session`: Login and lazy authentication (private module)
//! - `search`: Search job lifecycle methods
//!
//! # What this module does NOT handle:
//! - Direct HTTP request implementation (delegated to [`crate::endpoints`])
//! - Retry or re-authentication policy: there is none. A revoked token
//!   surfaces as a request error; the caller decides whether to rebuild
//!   the client and try again.
//!
//! # Invariants
//! - Operations that may authenticate take `&mut self`: one search flows
//!   through a client at a time. Concurrent searches need one client each.

pub mod builder;
mod search;
mod session;

use std::time::Duration;

use crate::auth::{Credentials, Session};

/// Splunk search job client.
///
/// Owns a single session token and HTTP connection pool; it serves one
/// credential pair and one search at a time. Construct with
/// [`SplunkClient::builder()`].
#[derive(Debug)]
pub struct SplunkClient {
    pub(crate) http: reqwest::Client,
    pub(crate) base_url: String,
    pub(crate) credentials: Credentials,
    pub(crate) session: Session,
    pub(crate) poll_interval: Duration,
    pub(crate) max_wait: Duration,
    pub(crate) fetch_count: u64,
}

impl SplunkClient {
    /// Create a new client builder.
    pub fn builder() -> builder::SplunkClientBuilder {
        builder::SplunkClientBuilder::new()
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// True once a login has stored a session token.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_authenticated()
    }
}

//! Splunk search job client.
//!
//! This crate provides an asynchronous job-based search client for the
//! Splunk REST API: it submits a search, polls for completion under a
//! deadline, and retrieves a bounded result set, so callers see a single
//! awaited call with clear timeout and failure semantics.

mod auth;
pub mod client;
pub mod endpoints;
pub mod error;
mod models;

pub use auth::{Credentials, Session};
pub use client::SplunkClient;
pub use client::builder::SplunkClientBuilder;
pub use error::{ClientError, Result};
pub use models::{JobStatus, Row, SearchOutcome};

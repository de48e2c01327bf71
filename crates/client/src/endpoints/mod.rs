//! Low-level HTTP endpoint functions for the Splunk REST API.
//!
//! Each function here maps to one wire call. Session state, composition,
//! and polling policy live in [`crate::client`].

pub mod auth;
pub mod jobs;
mod request;

pub use auth::login;
pub use jobs::{create_job, get_job_status, get_results, wait_for_job};
pub use request::send_request;

//! Search job endpoints: create, status, wait, results.
//!
//! # What this module handles:
//! - Submitting a search and obtaining its job handle
//! - Polling job status until done or a deadline elapses
//! - Retrieving a bounded page of result rows
//!
//! # What this module does NOT handle:
//! - Session state (tokens are passed in by [`crate::client`])
//! - Query syntax; the search string is opaque to the client
//!
//! # Invariants
//! - The poll deadline is computed once, before the first status query.
//! - The deadline is checked only at loop top; a slow status call near the
//!   deadline may overrun it by up to the transport timeout.
//! - Errors during polling propagate immediately and end the loop.

use std::time::{Duration, Instant};

use reqwest::Client;
use tracing::debug;

use crate::endpoints::request::{send_request, with_auth};
use crate::error::{ClientError, Result};
use crate::models::{JobStatus, Row};

/// Submit a search and return the job handle (`sid`).
///
/// The job runs asynchronously on the engine (`exec_mode=normal`). A
/// response without a non-empty `sid` fails with [`ClientError::MissingSid`]
/// carrying the raw body; an empty handle is never returned.
pub async fn create_job(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    query: &str,
) -> Result<String> {
    debug!("Creating search job");

    let url = format!("{}/services/search/jobs", base_url);
    let builder = with_auth(client.post(&url), Some(auth_token)).form(&[
        ("search", query),
        ("output_mode", "json"),
        ("exec_mode", "normal"),
    ]);
    let response = send_request(builder).await?;

    let payload: serde_json::Value = response.json().await?;
    let sid = payload
        .get("sid")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ClientError::MissingSid {
            raw: payload.to_string(),
        })?;

    debug!("Created search job {}", sid);
    Ok(sid.to_string())
}

/// Get the status of a search job.
///
/// The job counts as done when the status response has at least one entry
/// and that entry's content carries `isDone: true`. Anything else, including
/// a missing or empty `entry` array, reads as still running.
pub async fn get_job_status(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
) -> Result<JobStatus> {
    let url = format!("{}/services/search/jobs/{}", base_url, sid);
    let builder = with_auth(client.get(&url), Some(auth_token)).query(&[("output_mode", "json")]);
    let response = send_request(builder).await?;

    let payload: serde_json::Value = response.json().await?;
    let is_done = payload
        .get("entry")
        .and_then(|e| e.get(0))
        .and_then(|entry| entry.get("content"))
        .and_then(|content| content.get("isDone"))
        .and_then(|v| v.as_bool())
        .unwrap_or(false);

    Ok(JobStatus { is_done })
}

/// Wait for a search job to complete.
///
/// Polls at a fixed interval until the job reports done or `max_wait`
/// elapses. Returns immediately on done with no trailing sleep. On
/// deadline, fails with [`ClientError::SearchTimeout`] carrying the sid.
/// Transport or HTTP errors are not retried; they end the loop.
pub async fn wait_for_job(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
    poll_interval: Duration,
    max_wait: Duration,
) -> Result<()> {
    let deadline = Instant::now() + max_wait;

    while Instant::now() < deadline {
        let status = get_job_status(client, base_url, auth_token, sid).await?;
        if status.is_done {
            debug!("Job {} completed", sid);
            return Ok(());
        }
        tokio::time::sleep(poll_interval).await;
    }

    Err(ClientError::SearchTimeout {
        sid: sid.to_string(),
        waited: max_wait,
    })
}

/// Retrieve up to `count` result rows for a completed job.
///
/// Only mapping-shaped entries of `results` are kept, in their original
/// order; malformed entries are dropped silently. A response without a
/// list-shaped `results` field yields an empty vec, not an error.
pub async fn get_results(
    client: &Client,
    base_url: &str,
    auth_token: &str,
    sid: &str,
    count: u64,
) -> Result<Vec<Row>> {
    debug!("Getting results for job {}", sid);

    let url = format!("{}/services/search/jobs/{}/results", base_url, sid);
    let builder = with_auth(client.get(&url), Some(auth_token))
        .query(&[("output_mode", "json"), ("count", &count.to_string())]);
    let response = send_request(builder).await?;

    let payload: serde_json::Value = response.json().await?;
    let rows = match payload.get("results").and_then(|v| v.as_array()) {
        Some(entries) => entries
            .iter()
            .filter_map(|entry| entry.as_object().cloned())
            .collect(),
        None => Vec::new(),
    };

    Ok(rows)
}

//! Search job lifecycle methods for [`SplunkClient`].
//!
//! # What this module handles:
//! - The composed submit -> poll -> fetch operation
//! - Individual lifecycle steps for callers that need them
//!
//! # What this module does NOT handle:
//! - Query validation; the search string is opaque
//! - Pagination beyond the initial bounded fetch
//! - Cancellation; once polling starts, the wait ends only on done or
//!   deadline

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use crate::models::{JobStatus, Row, SearchOutcome};

impl SplunkClient {
    /// Run a search end to end: submit the query, wait for the job to
    /// complete, and fetch a bounded page of rows.
    ///
    /// Authenticates lazily on first use. Any stage error propagates as a
    /// typed [`crate::error::ClientError`]; nothing is retried internally.
    pub async fn submit_and_wait(&mut self, query: &str) -> Result<SearchOutcome> {
        self.ensure_authenticated().await?;
        let sid = self.submit(query).await?;
        self.wait_for_job(&sid).await?;
        let rows = self.fetch_results(&sid).await?;
        Ok(SearchOutcome { sid, rows })
    }

    /// Submit a search and return its job handle without waiting.
    pub async fn submit(&mut self, query: &str) -> Result<String> {
        self.ensure_authenticated().await?;
        endpoints::create_job(&self.http, &self.base_url, self.token(), query).await
    }

    /// Poll a job at the configured interval until it reports done or the
    /// configured completion budget elapses.
    pub async fn wait_for_job(&mut self, sid: &str) -> Result<()> {
        self.ensure_authenticated().await?;
        endpoints::wait_for_job(
            &self.http,
            &self.base_url,
            self.token(),
            sid,
            self.poll_interval,
            self.max_wait,
        )
        .await
    }

    /// Get a single status snapshot for a job.
    pub async fn job_status(&mut self, sid: &str) -> Result<JobStatus> {
        self.ensure_authenticated().await?;
        endpoints::get_job_status(&self.http, &self.base_url, self.token(), sid).await
    }

    /// Fetch up to the configured row cap for a completed job.
    pub async fn fetch_results(&mut self, sid: &str) -> Result<Vec<Row>> {
        self.ensure_authenticated().await?;
        endpoints::get_results(
            &self.http,
            &self.base_url,
            self.token(),
            sid,
            self.fetch_count,
        )
        .await
    }
}

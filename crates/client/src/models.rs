//! Data types returned by the Splunk client.

use serde_json::{Map, Value};

/// One result row of dynamic shape. Splunk guarantees no fixed schema
/// across searches, so rows stay as loosely-typed field maps.
pub type Row = Map<String, Value>;

/// Status snapshot of a search job.
///
/// The client only tracks the binary done flag; intermediate progress,
/// cancellation, and engine-side failure states are not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobStatus {
    pub is_done: bool,
}

/// Result of a completed search: the job handle plus an ordered, bounded
/// set of rows. Rows beyond the fetch cap are silently not retrieved.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Opaque job identifier assigned by Splunk. Safe to log.
    pub sid: String,
    /// Result rows in the order Splunk returned them.
    pub rows: Vec<Row>,
}

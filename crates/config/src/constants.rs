//! Centralized constants for the Splunk Sentinel workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication and improve maintainability.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default HTTP request timeout in seconds (applies to a single call).
pub const DEFAULT_TIMEOUT_SECS: u64 = 45;

/// Default Splunk management port.
pub const DEFAULT_SPLUNK_PORT: u16 = 8089;

/// Splunk web UI port. URLs pointing here are redirected to the
/// management port, since app routes answer with HTML/404.
pub const SPLUNK_WEB_PORT: u16 = 8000;

/// Default Splunk management base URL.
pub const DEFAULT_BASE_URL: &str = "https://localhost:8089";

// =============================================================================
// Search & Polling Defaults
// =============================================================================

/// Default polling interval for job status checks in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 1000;

/// Default maximum time to wait for search job completion in seconds.
pub const DEFAULT_MAX_WAIT_SECS: u64 = 60;

/// Default cap on the number of result rows fetched for a completed job.
pub const DEFAULT_FETCH_COUNT: u64 = 50;

// =============================================================================
// Advisor Defaults
// =============================================================================

/// Default chat model for SPL generation and result explanation.
pub const DEFAULT_MODEL: &str = "gpt-5";

/// Maximum number of rows forwarded to the model when explaining results.
pub const EXPLAIN_ROW_LIMIT: usize = 20;

// =============================================================================
// Output Defaults
// =============================================================================

/// Maximum characters per emitted output chunk.
pub const MAX_MESSAGE_CHARS: usize = 3500;

/// Maximum characters of an error shown to the operator.
pub const MAX_ERROR_CHARS: usize = 500;

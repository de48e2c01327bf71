//! Error types for the advisor.

use thiserror::Error;

/// Result type alias for advisor operations.
pub type Result<T> = std::result::Result<T, AdvisorError>;

/// Errors that can occur talking to the chat-completions API.
#[derive(Error, Debug)]
pub enum AdvisorError {
    /// Network-level failure or the per-call timeout.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// Non-success status from the API, with the response body.
    #[error("Chat API request failed ({status}): {body}")]
    ApiError { status: u16, body: String },

    /// Response parsed but carried no usable completion content.
    #[error("Invalid chat response: {0}")]
    InvalidResponse(String),
}

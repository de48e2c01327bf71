//! LLM glue for Splunk Sentinel.
//!
//! Turns an operator's free-text question into a single SPL query and
//! summarizes result rows into a short security-focused briefing. Speaks
//! the OpenAI chat-completions wire format; the model's raw output is
//! never trusted as SPL without passing through [`normalize_spl`].

mod client;
mod error;
mod normalize;

pub use client::AdvisorClient;
pub use error::{AdvisorError, Result};
pub use normalize::normalize_spl;

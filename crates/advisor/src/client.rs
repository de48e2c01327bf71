//! Chat-completions client for SPL generation and result explanation.

use secrecy::{ExposeSecret, SecretString};
use sentinel_client::Row;
use sentinel_config::constants::EXPLAIN_ROW_LIMIT;
use tracing::debug;

use crate::error::{AdvisorError, Result};
use crate::normalize::normalize_spl;

/// Default chat-completions API host.
const DEFAULT_API_BASE: &str = "https://api.openai.com";

/// System prompt for turning a question into SPL.
const GENERATE_SYSTEM_PROMPT: &str = "You are a Splunk security analyst. Convert the user's \
    question into a single SPL query. Return only the SPL query and nothing else. Assume \
    index=main when user does not specify an index.";

/// System prompt for explaining result rows.
const EXPLAIN_SYSTEM_PROMPT: &str =
    "You are a SOC assistant. Be concise, practical, and security-focused.";

/// Client for the OpenAI chat-completions API.
#[derive(Debug)]
pub struct AdvisorClient {
    http: reqwest::Client,
    base_url: String,
    api_key: SecretString,
    model: String,
}

impl AdvisorClient {
    /// Create a client for the given API key and model.
    pub fn new(api_key: SecretString, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: DEFAULT_API_BASE.to_string(),
            api_key,
            model: model.into(),
        }
    }

    /// Override the API host. Used by tests and proxy deployments.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Convert an operator question into a single runnable SPL line.
    pub async fn generate_spl(&self, question: &str) -> Result<String> {
        let raw = self
            .chat(GENERATE_SYSTEM_PROMPT, question.to_string(), 0.1)
            .await?;
        let spl = normalize_spl(&raw);
        debug!("Generated SPL: {}", spl);
        Ok(spl)
    }

    /// Summarize result rows into a short security briefing.
    ///
    /// Only the first rows (up to the explain limit) reach the model. The
    /// returned text may be empty when the model declines to answer; the
    /// caller decides what to show in that case.
    pub async fn explain_results(
        &self,
        question: &str,
        spl_query: &str,
        rows: &[Row],
    ) -> Result<String> {
        let compact_rows = &rows[..rows.len().min(EXPLAIN_ROW_LIMIT)];
        let rows_json = serde_json::to_string(compact_rows)
            .map_err(|e| AdvisorError::InvalidResponse(e.to_string()))?;

        let user_prompt = format!(
            "User question: {question}\n\n\
             SPL query used:\n{spl_query}\n\n\
             Splunk rows (JSON):\n{rows_json}\n\n\
             Provide:\n\
             1) short finding summary\n\
             2) risk level: Low/Medium/High\n\
             3) top 2-4 recommended actions\n\
             4) confidence note in one line.\n\
             Keep it concise and formatted for a terminal."
        );

        let answer = self.chat(EXPLAIN_SYSTEM_PROMPT, user_prompt, 0.2).await?;
        Ok(answer.trim().to_string())
    }

    /// One chat-completions round trip, returning the first choice's content.
    async fn chat(&self, system: &str, user: String, temperature: f64) -> Result<String> {
        let mut body = serde_json::json!({
            "model": self.model,
            "messages": [
                { "role": "system", "content": system },
                { "role": "user", "content": user },
            ],
        });
        // GPT-5 chat endpoints do not accept temperature.
        if !self.model.to_lowercase().starts_with("gpt-5") {
            body["temperature"] = serde_json::json!(temperature);
        }

        let url = format!("{}/v1/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .header(
                "Authorization",
                format!("Bearer {}", self.api_key.expose_secret()),
            )
            .json(&body)
            .send()
            .await?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error response body".to_string());
            return Err(AdvisorError::ApiError { status, body });
        }

        let payload: serde_json::Value = response.json().await?;
        payload
            .get("choices")
            .and_then(|c| c.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|v| v.as_str())
            .map(|s| s.to_string())
            .ok_or_else(|| {
                AdvisorError::InvalidResponse("missing completion content".to_string())
            })
    }
}

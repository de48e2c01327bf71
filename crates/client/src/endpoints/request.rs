//! The single request primitive shared by all endpoints.

use reqwest::{RequestBuilder, Response};

use crate::error::{ClientError, Result};

/// Splunk's Authorization header scheme for session tokens.
const AUTH_SCHEME: &str = "Splunk";

/// Attach the session token to a request when one is held.
///
/// Unauthenticated calls (login) pass `None` and send no header.
pub(crate) fn with_auth(builder: RequestBuilder, token: Option<&str>) -> RequestBuilder {
    match token {
        Some(token) => builder.header("Authorization", format!("{} {}", AUTH_SCHEME, token)),
        None => builder,
    }
}

/// Send a request and convert non-success statuses into a uniform error.
///
/// Network-level failures (connection refused, TLS, the per-call timeout
/// configured on the `reqwest::Client`) surface as [`ClientError::HttpError`].
/// Any response with status >= 400 becomes [`ClientError::RequestFailed`]
/// carrying the status code and body text.
pub async fn send_request(builder: RequestBuilder) -> Result<Response> {
    let response = builder.send().await?;
    let status = response.status();
    if status.as_u16() >= 400 {
        let url = response.url().to_string();
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| "Could not read error response body".to_string());
        return Err(ClientError::RequestFailed {
            status: status.as_u16(),
            url,
            body,
        });
    }
    Ok(response)
}

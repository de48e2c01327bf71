//! Authentication endpoint.

use reqwest::Client;
use tracing::debug;

use crate::endpoints::send_request;
use crate::error::{ClientError, Result};

/// Login to Splunk with username and password, returning the session key.
///
/// A response without a non-empty `sessionKey` string is a fatal
/// credential/configuration error; it is not retried here.
pub async fn login(
    client: &Client,
    base_url: &str,
    username: &str,
    password: &str,
) -> Result<String> {
    debug!("Logging in to Splunk as {}", username);

    let url = format!("{}/services/auth/login", base_url);
    let builder = client.post(&url).form(&[
        ("username", username),
        ("password", password),
        ("output_mode", "json"),
    ]);
    let response = send_request(builder).await?;

    let payload: serde_json::Value = response.json().await?;
    payload
        .get("sessionKey")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .ok_or_else(|| ClientError::AuthFailed("missing sessionKey in login response".to_string()))
}

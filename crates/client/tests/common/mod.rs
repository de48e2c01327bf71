//! Common test utilities for client integration tests.
//!
//! Provides a client factory with fast polling settings and a login mock
//! helper so individual tests stay focused on the behavior under test.

use std::time::Duration;

use secrecy::SecretString;
use sentinel_client::{Credentials, SplunkClient};

#[allow(unused_imports)]
pub use wiremock::{Mock, MockServer, ResponseTemplate};

/// Session token returned by [`mount_login`].
#[allow(dead_code)]
pub const TEST_TOKEN: &str = "test-session-token";

/// Build a client against the mock server with fast polling settings.
#[allow(dead_code)]
pub fn build_client(base_url: &str) -> SplunkClient {
    build_client_with_budget(base_url, Duration::from_millis(50), Duration::from_millis(400))
}

/// Build a client with explicit poll interval and completion budget.
#[allow(dead_code)]
pub fn build_client_with_budget(
    base_url: &str,
    poll_interval: Duration,
    max_wait: Duration,
) -> SplunkClient {
    SplunkClient::builder()
        .base_url(base_url.to_string())
        .credentials(Credentials::new(
            "admin",
            SecretString::new("changeme".to_string().into()),
        ))
        .poll_interval(poll_interval)
        .max_wait(max_wait)
        .build()
        .expect("client should build")
}

/// Mount a login endpoint that always hands out [`TEST_TOKEN`].
#[allow(dead_code)]
pub async fn mount_login(server: &MockServer) {
    Mock::given(wiremock::matchers::method("POST"))
        .and(wiremock::matchers::path("/services/auth/login"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({ "sessionKey": TEST_TOKEN })),
        )
        .mount(server)
        .await;
}

//! Login and lazy authentication for [`SplunkClient`].
//!
//! # What this module does NOT handle:
//! - Token expiry detection. The client cannot tell "token expired" apart
//!   from any other 4xx; if Splunk revokes the session mid-flight, the
//!   next call fails with [`crate::error::ClientError::RequestFailed`] and
//!   is not retried. Known limitation, kept on purpose.
//!
//! # Invariants
//! - `login()` always re-authenticates and overwrites any held token.
//! - `ensure_authenticated()` logs in only when no token is held, so a
//!   failed login leaves the session empty and the next call tries again.

use crate::client::SplunkClient;
use crate::endpoints;
use crate::error::Result;
use secrecy::ExposeSecret;

impl SplunkClient {
    /// Exchange the configured credentials for a session token.
    ///
    /// Idempotent in effect: a repeat login replaces the held token.
    ///
    /// # Errors
    ///
    /// Returns [`crate::error::ClientError::AuthFailed`] when the response
    /// carries no usable session key; HTTP and transport failures
    /// propagate unchanged.
    pub async fn login(&mut self) -> Result<()> {
        let token = endpoints::login(
            &self.http,
            &self.base_url,
            &self.credentials.username,
            self.credentials.password.expose_secret(),
        )
        .await?;

        self.session.set_token(token);
        Ok(())
    }

    /// Login only if no session token is currently held.
    pub(crate) async fn ensure_authenticated(&mut self) -> Result<()> {
        if !self.session.is_authenticated() {
            self.login().await?;
        }
        Ok(())
    }

    /// The held session token. Callable only after `ensure_authenticated`.
    pub(crate) fn token(&self) -> &str {
        self.session.token().unwrap_or_default()
    }
}

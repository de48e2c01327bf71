//! Credentials and session token state.

use secrecy::{ExposeSecret, SecretString};

/// Username/password pair supplied at construction. Immutable; the
/// password is never logged.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}

/// Holds at most one active session token.
///
/// Absent at construction, set by a successful login, and only ever
/// replaced by another login. There is no expiry tracking: if Splunk
/// revokes the token, subsequent calls fail with a request error rather
/// than silently re-authenticating.
#[derive(Debug, Default)]
pub struct Session {
    token: Option<SecretString>,
}

impl Session {
    /// True once a login has stored a token.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// The bearer token for authenticated calls, if one is held.
    pub fn token(&self) -> Option<&str> {
        self.token.as_ref().map(|t| t.expose_secret())
    }

    /// Store the token from a login response, overwriting any previous one.
    pub fn set_token(&mut self, token: String) {
        self.token = Some(SecretString::new(token.into()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_starts_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.token().is_none());
    }

    #[test]
    fn test_set_token_overwrites() {
        let mut session = Session::default();
        session.set_token("first".to_string());
        assert_eq!(session.token(), Some("first"));
        session.set_token("second".to_string());
        assert_eq!(session.token(), Some("second"));
    }

    #[test]
    fn test_token_not_exposed_in_debug() {
        let mut session = Session::default();
        session.set_token("secret-session-token".to_string());
        let debug_output = format!("{:?}", session);
        assert!(!debug_output.contains("secret-session-token"));
    }

    #[test]
    fn test_password_not_exposed_in_debug() {
        let creds = Credentials::new(
            "admin",
            SecretString::new("secret-password".to_string().into()),
        );
        let debug_output = format!("{:?}", creds);
        assert!(!debug_output.contains("secret-password"));
        assert!(debug_output.contains("admin"));
    }
}

//! Environment and key-file configuration loading.
//!
//! Responsibilities:
//! - Read settings from environment variables (optionally seeded from `.env`).
//! - Fall back to JSON key files in the operator's keys directory.
//! - Normalize the Splunk base URL before any network use.
//!
//! Does NOT handle:
//! - Secret storage or encryption (key files are plain JSON by design).
//! - Connection validation (the client surfaces those failures).
//!
//! Invariants:
//! - Environment variables take precedence over key-file values.
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Passwords and API keys are wrapped in `SecretString` immediately.

use secrecy::SecretString;
use serde_json::Value;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::constants::{
    DEFAULT_MAX_WAIT_SECS, DEFAULT_MODEL, DEFAULT_POLL_INTERVAL_MS, DEFAULT_SPLUNK_PORT,
    DEFAULT_TIMEOUT_SECS, SPLUNK_WEB_PORT,
};
use crate::error::ConfigError;
use crate::types::{AdvisorConfig, AuthConfig, Config, ConnectionConfig, SearchConfig};

/// Key file holding the OpenAI API key.
const OPENAI_KEY_FILE: &str = "openaikey.json";

/// Optional key file holding Splunk connection overrides.
const SPLUNK_KEY_FILE: &str = "splunk.json";

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. The returned value is trimmed.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Probe a JSON object for the first key holding a non-empty string.
fn first_str(data: &HashMap<String, Value>, keys: &[&str]) -> Option<String> {
    for key in keys {
        if let Some(Value::String(s)) = data.get(*key) {
            let trimmed = s.trim();
            if !trimmed.is_empty() {
                return Some(trimmed.to_string());
            }
        }
    }
    None
}

/// Interpret a human-entered boolean string.
fn truthy(value: &str) -> bool {
    matches!(
        value.trim().to_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    )
}

/// Parse a JSON key file into a string-keyed map.
///
/// Returns an error if the file cannot be read or is not a JSON object.
fn read_key_file(path: &Path) -> Result<HashMap<String, Value>, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| ConfigError::KeyFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    let value: Value = serde_json::from_str(&raw).map_err(|e| ConfigError::KeyFile {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    match value {
        Value::Object(map) => Ok(map.into_iter().collect()),
        _ => Err(ConfigError::KeyFile {
            path: path.to_path_buf(),
            message: "expected a JSON object".to_string(),
        }),
    }
}

/// Normalize a Splunk base URL to `scheme://host[:port]`.
///
/// - A missing scheme defaults to `https`.
/// - Trailing slashes and any path are dropped.
/// - The web UI port (8000) is redirected to the management port (8089),
///   since app routes answer with HTML/404 instead of REST responses.
pub fn normalize_base_url(input: &str) -> Result<String, ConfigError> {
    let trimmed = input.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::InvalidBaseUrl(input.to_string()));
    }
    let candidate = if trimmed.contains("://") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed)
    };

    let parsed =
        Url::parse(&candidate).map_err(|_| ConfigError::InvalidBaseUrl(input.to_string()))?;
    let host = parsed
        .host_str()
        .ok_or_else(|| ConfigError::InvalidBaseUrl(input.to_string()))?;

    let mut scheme = parsed.scheme().to_string();
    let mut port = parsed.port();
    if port == Some(SPLUNK_WEB_PORT) {
        port = Some(DEFAULT_SPLUNK_PORT);
        scheme = "https".to_string();
    }

    Ok(match port {
        Some(p) => format!("{}://{}:{}", scheme, host, p),
        None => format!("{}://{}", scheme, host),
    })
}

/// Loads assistant configuration from the environment and key files.
pub struct ConfigLoader {
    keys_dir: PathBuf,
}

impl ConfigLoader {
    /// Create a loader targeting the default keys directory (`~/keys`).
    pub fn new() -> Self {
        let keys_dir = directories::UserDirs::new()
            .map(|d| d.home_dir().join("keys"))
            .unwrap_or_else(|| PathBuf::from("keys"));
        Self { keys_dir }
    }

    /// Override the keys directory. Used by tests and non-standard layouts.
    pub fn with_keys_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.keys_dir = dir.into();
        self
    }

    /// Load a `.env` file if one exists in the working directory tree.
    ///
    /// Missing files are fine; anything else (permissions, malformed
    /// content) is surfaced.
    pub fn load_dotenv(&self) -> Result<(), ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => {
                tracing::debug!("Loaded environment from {}", path.display());
                Ok(())
            }
            Err(e) if e.not_found() => Ok(()),
            Err(e) => Err(ConfigError::InvalidValue {
                var: ".env".to_string(),
                message: e.to_string(),
            }),
        }
    }

    /// Assemble the full configuration.
    ///
    /// Precedence per setting: environment variable, then key file, then
    /// built-in default. The OpenAI API key has no default and must be
    /// present in the environment or in `openaikey.json`.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let splunk_overrides = {
            let path = self.keys_dir.join(SPLUNK_KEY_FILE);
            if path.exists() {
                read_key_file(&path)?
            } else {
                HashMap::new()
            }
        };

        let base_url = env_var_or_none("SPLUNK_BASE_URL")
            .or_else(|| first_str(&splunk_overrides, &["SPLUNK_BASE_URL", "base_url", "url"]))
            .unwrap_or_else(|| crate::constants::DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&base_url)?;

        let username = env_var_or_none("SPLUNK_USERNAME")
            .or_else(|| first_str(&splunk_overrides, &["SPLUNK_USERNAME", "username", "user"]))
            .unwrap_or_else(|| "admin".to_string());
        let password = env_var_or_none("SPLUNK_PASSWORD")
            .or_else(|| first_str(&splunk_overrides, &["SPLUNK_PASSWORD", "password", "pass"]))
            .unwrap_or_else(|| "changeme".to_string());

        // TLS verification defaults off for lab deployments with self-signed
        // certs; enabling it is an explicit choice either way.
        let verify_tls = env_var_or_none("SPLUNK_VERIFY_TLS")
            .or_else(|| first_str(&splunk_overrides, &["SPLUNK_VERIFY_TLS"]))
            .map(|v| truthy(&v))
            .unwrap_or(false);

        let timeout_secs = parse_u64("REQUEST_TIMEOUT_SECONDS", DEFAULT_TIMEOUT_SECS)?;
        let poll_seconds = parse_f64(
            "SPLUNK_QUERY_POLL_SECONDS",
            DEFAULT_POLL_INTERVAL_MS as f64 / 1000.0,
        )?;
        let max_wait_secs = parse_u64("SPLUNK_QUERY_MAX_WAIT_SECONDS", DEFAULT_MAX_WAIT_SECS)?;

        let api_key = env_var_or_none("OPENAI_API_KEY")
            .map(Ok)
            .unwrap_or_else(|| {
                let path = self.keys_dir.join(OPENAI_KEY_FILE);
                if !path.exists() {
                    return Err(ConfigError::Missing("OPENAI_API_KEY"));
                }
                let data = read_key_file(&path)?;
                first_str(
                    &data,
                    &["OPENAI_API_KEY", "openai_api_key", "api_key", "key"],
                )
                .ok_or(ConfigError::Missing("OPENAI_API_KEY"))
            })?;

        let model =
            env_var_or_none("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string());

        Ok(Config {
            connection: ConnectionConfig {
                base_url,
                skip_verify: !verify_tls,
                timeout: Duration::from_secs(timeout_secs),
            },
            auth: AuthConfig {
                username,
                password: SecretString::new(password.into()),
            },
            search: SearchConfig {
                poll_interval: Duration::from_secs_f64(poll_seconds),
                max_wait: Duration::from_secs(max_wait_secs),
                ..SearchConfig::default()
            },
            advisor: AdvisorConfig {
                api_key: SecretString::new(api_key.into()),
                model,
            },
        })
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_u64(var: &str, default: u64) -> Result<u64, ConfigError> {
    match env_var_or_none(var) {
        Some(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
            var: var.to_string(),
            message: "must be a non-negative integer".to_string(),
        }),
        None => Ok(default),
    }
}

fn parse_f64(var: &str, default: f64) -> Result<f64, ConfigError> {
    match env_var_or_none(var) {
        Some(raw) => {
            let value: f64 = raw.parse().map_err(|_| ConfigError::InvalidValue {
                var: var.to_string(),
                message: "must be a number".to_string(),
            })?;
            if value.is_sign_negative() || !value.is_finite() {
                return Err(ConfigError::InvalidValue {
                    var: var.to_string(),
                    message: "must be a non-negative number".to_string(),
                });
            }
            Ok(value)
        }
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url_plain_host() {
        assert_eq!(
            normalize_base_url("splunk.example.com").unwrap(),
            "https://splunk.example.com"
        );
    }

    #[test]
    fn test_normalize_base_url_keeps_port() {
        assert_eq!(
            normalize_base_url("https://splunk.example.com:8089").unwrap(),
            "https://splunk.example.com:8089"
        );
    }

    #[test]
    fn test_normalize_base_url_redirects_web_port() {
        assert_eq!(
            normalize_base_url("http://splunk.example.com:8000").unwrap(),
            "https://splunk.example.com:8089"
        );
    }

    #[test]
    fn test_normalize_base_url_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://localhost:8089/").unwrap(),
            "https://localhost:8089"
        );
    }

    #[test]
    fn test_normalize_base_url_rejects_empty() {
        assert!(matches!(
            normalize_base_url("   "),
            Err(ConfigError::InvalidBaseUrl(_))
        ));
    }

    #[test]
    fn test_truthy_values() {
        for v in ["1", "true", "YES", " y ", "On"] {
            assert!(truthy(v), "{v} should be truthy");
        }
        for v in ["0", "false", "no", "", "off"] {
            assert!(!truthy(v), "{v} should be falsy");
        }
    }

    #[test]
    fn test_first_str_skips_non_strings_and_empties() {
        let mut data = HashMap::new();
        data.insert("a".to_string(), Value::Bool(true));
        data.insert("b".to_string(), Value::String("  ".to_string()));
        data.insert("c".to_string(), Value::String(" token ".to_string()));
        assert_eq!(first_str(&data, &["a", "b", "c"]), Some("token".to_string()));
        assert_eq!(first_str(&data, &["a", "b"]), None);
    }
}

//! Integration tests for the configuration loader.
//!
//! These tests exercise the env-over-key-file precedence, key-file probing,
//! and numeric parsing. Environment-touching tests are serialized because
//! the process environment is global state.

use secrecy::ExposeSecret;
use sentinel_config::ConfigLoader;
use serial_test::serial;
use std::time::Duration;

/// Env vars the loader reads; cleared around every test.
const LOADER_VARS: &[&str] = &[
    "SPLUNK_BASE_URL",
    "SPLUNK_USERNAME",
    "SPLUNK_PASSWORD",
    "SPLUNK_VERIFY_TLS",
    "REQUEST_TIMEOUT_SECONDS",
    "SPLUNK_QUERY_POLL_SECONDS",
    "SPLUNK_QUERY_MAX_WAIT_SECONDS",
    "OPENAI_API_KEY",
    "OPENAI_MODEL",
];

fn with_clean_env<F: FnOnce()>(overrides: &[(&str, &str)], f: F) {
    let kvs: Vec<(String, Option<String>)> = LOADER_VARS
        .iter()
        .map(|var| {
            let value = overrides
                .iter()
                .find(|(k, _)| k == var)
                .map(|(_, v)| v.to_string());
            (var.to_string(), value)
        })
        .collect();
    temp_env::with_vars(kvs, f);
}

fn empty_keys_dir() -> tempfile::TempDir {
    tempfile::tempdir().expect("tempdir")
}

#[test]
#[serial]
fn test_env_only_configuration() {
    let keys = empty_keys_dir();
    with_clean_env(
        &[
            ("SPLUNK_BASE_URL", "https://splunk.internal:8089"),
            ("SPLUNK_USERNAME", "soc"),
            ("SPLUNK_PASSWORD", "s3cret"),
            ("SPLUNK_VERIFY_TLS", "true"),
            ("REQUEST_TIMEOUT_SECONDS", "10"),
            ("SPLUNK_QUERY_POLL_SECONDS", "0.5"),
            ("SPLUNK_QUERY_MAX_WAIT_SECONDS", "30"),
            ("OPENAI_API_KEY", "sk-test"),
            ("OPENAI_MODEL", "gpt-4o"),
        ],
        || {
            let config = ConfigLoader::new()
                .with_keys_dir(keys.path())
                .load()
                .expect("load config");

            assert_eq!(config.connection.base_url, "https://splunk.internal:8089");
            assert!(!config.connection.skip_verify);
            assert_eq!(config.connection.timeout, Duration::from_secs(10));
            assert_eq!(config.auth.username, "soc");
            assert_eq!(config.auth.password.expose_secret(), "s3cret");
            assert_eq!(config.search.poll_interval, Duration::from_millis(500));
            assert_eq!(config.search.max_wait, Duration::from_secs(30));
            assert_eq!(config.advisor.api_key.expose_secret(), "sk-test");
            assert_eq!(config.advisor.model, "gpt-4o");
        },
    );
}

#[test]
#[serial]
fn test_defaults_with_key_file_api_key() {
    let keys = empty_keys_dir();
    std::fs::write(
        keys.path().join("openaikey.json"),
        r#"{"api_key": "sk-from-file"}"#,
    )
    .unwrap();

    with_clean_env(&[], || {
        let config = ConfigLoader::new()
            .with_keys_dir(keys.path())
            .load()
            .expect("load config");

        assert_eq!(config.connection.base_url, "https://localhost:8089");
        // TLS verification defaults off, so skip_verify is on.
        assert!(config.connection.skip_verify);
        assert_eq!(config.auth.username, "admin");
        assert_eq!(config.advisor.api_key.expose_secret(), "sk-from-file");
        assert_eq!(config.advisor.model, "gpt-5");
    });
}

#[test]
#[serial]
fn test_splunk_key_file_overrides_defaults_but_not_env() {
    let keys = empty_keys_dir();
    std::fs::write(
        keys.path().join("splunk.json"),
        r#"{"base_url": "https://file.example:8089", "username": "filer", "password": "filepass"}"#,
    )
    .unwrap();
    std::fs::write(keys.path().join("openaikey.json"), r#"{"key": "sk-x"}"#).unwrap();

    with_clean_env(&[("SPLUNK_USERNAME", "env-user")], || {
        let config = ConfigLoader::new()
            .with_keys_dir(keys.path())
            .load()
            .expect("load config");

        assert_eq!(config.connection.base_url, "https://file.example:8089");
        assert_eq!(config.auth.username, "env-user");
        assert_eq!(config.auth.password.expose_secret(), "filepass");
    });
}

#[test]
#[serial]
fn test_missing_api_key_is_fatal() {
    let keys = empty_keys_dir();
    with_clean_env(&[], || {
        let err = ConfigLoader::new()
            .with_keys_dir(keys.path())
            .load()
            .expect_err("should fail without an API key");
        assert!(err.to_string().contains("OPENAI_API_KEY"));
    });
}

#[test]
#[serial]
fn test_malformed_key_file_is_fatal() {
    let keys = empty_keys_dir();
    std::fs::write(keys.path().join("splunk.json"), "not json").unwrap();

    with_clean_env(&[("OPENAI_API_KEY", "sk-test")], || {
        let err = ConfigLoader::new()
            .with_keys_dir(keys.path())
            .load()
            .expect_err("should fail on malformed key file");
        assert!(err.to_string().contains("splunk.json"));
    });
}

#[test]
#[serial]
fn test_invalid_poll_seconds_rejected() {
    let keys = empty_keys_dir();
    with_clean_env(
        &[
            ("OPENAI_API_KEY", "sk-test"),
            ("SPLUNK_QUERY_POLL_SECONDS", "fast"),
        ],
        || {
            let err = ConfigLoader::new()
                .with_keys_dir(keys.path())
                .load()
                .expect_err("should reject non-numeric poll interval");
            assert!(err.to_string().contains("SPLUNK_QUERY_POLL_SECONDS"));
        },
    );
}

#[test]
#[serial]
fn test_web_port_redirected_to_management_port() {
    let keys = empty_keys_dir();
    with_clean_env(
        &[
            ("OPENAI_API_KEY", "sk-test"),
            ("SPLUNK_BASE_URL", "http://splunk.lab:8000"),
        ],
        || {
            let config = ConfigLoader::new()
                .with_keys_dir(keys.path())
                .load()
                .expect("load config");
            assert_eq!(config.connection.base_url, "https://splunk.lab:8089");
        },
    );
}

//! Pre-built SPL for the common SOC triage hunts.
//!
//! Each builder takes a validated lookback window and returns a complete
//! SPL string. The window is interpolated into `earliest=-{window}`, so
//! anything that fails validation falls back to the command's default
//! instead of reaching the query.

use regex::Regex;
use std::sync::LazyLock;

/// Default window for the failed-logins hunt.
pub const FAILED_LOGINS_DEFAULT_WINDOW: &str = "30m";

/// Default window for the errors hunt.
pub const ERRORS_DEFAULT_WINDOW: &str = "15m";

/// Default window for the suspicious-process hunt.
pub const SUSPICIOUS_PROCESS_DEFAULT_WINDOW: &str = "1h";

static WINDOW_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+[smhd]$").expect("valid window regex"));

/// Validate a user-supplied lookback window.
///
/// Accepts `<digits><s|m|h|d>` (e.g. `15m`, `4h`, `1d`), case-insensitive.
/// Anything else, including a missing argument, yields the default.
pub fn parse_window(arg: Option<&str>, default: &str) -> String {
    match arg {
        Some(raw) => {
            let value = raw.trim().to_lowercase();
            if WINDOW_RE.is_match(&value) {
                value
            } else {
                default.to_string()
            }
        }
        None => default.to_string(),
    }
}

/// SPL counting failed SSH password attempts by host and user.
pub fn failed_logins_spl(window: &str) -> String {
    format!(
        "search index=main \"Failed password\" earliest=-{window} \
         | stats count as failed_attempts by host user \
         | sort - failed_attempts"
    )
}

/// SPL counting error and exception events by host and source.
pub fn errors_spl(window: &str) -> String {
    format!(
        "search index=main (error OR ERROR OR exception OR Exception) earliest=-{window} \
         | stats count as error_count by host source sourcetype \
         | sort - error_count"
    )
}

/// SPL flagging process events that match common attack tooling patterns
/// (encoded PowerShell, reverse shells, remote downloads, loose chmod).
pub fn suspicious_process_spl(window: &str) -> String {
    format!(
        "search index=main (process OR cmdline OR CommandLine) earliest=-{window} \
         | regex _raw=\"(?i)(powershell.*-enc|nc\\s+-e|wget\\s+http|curl\\s+http|chmod\\s+777)\" \
         | stats count by host user process cmdline \
         | sort - count"
    )
}

//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish
//!   failure modes.
//! - Map client error variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (see `output::format_error`).
//!
//! Invariants:
//! - Exit codes 1-4 are reserved for specific error categories.

use sentinel_client::ClientError;

/// Structured exit codes for the sentinel binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// Authentication failure - invalid credentials or a rejected session.
    ///
    /// Scripts should refresh credentials before retrying.
    AuthenticationFailed = 2,

    /// Connection error - network, DNS, TLS, or per-request timeout.
    ///
    /// Scripts may retry with backoff.
    ConnectionError = 3,

    /// Search timeout - the job did not finish within the completion
    /// budget. The job may still be running server-side.
    SearchTimeout = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::AuthFailed(_) => ExitCode::AuthenticationFailed,
            ClientError::RequestFailed {
                status: 401 | 403, ..
            } => ExitCode::AuthenticationFailed,

            ClientError::SearchTimeout { .. } => ExitCode::SearchTimeout,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::RequestFailed { .. }
            | ClientError::MissingSid { .. }
            | ClientError::InvalidResponse(_) => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    ///
    /// Returns ExitCode::GeneralError if no client error is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(client_err) = cause.downcast_ref::<ClientError>() {
                return ExitCode::from(client_err);
            }
        }
        ExitCode::GeneralError
    }
}

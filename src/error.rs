// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Error types for the rekku execution engine
//!
//! One variant per failure class: validation, construction, body encoding,
//! HTTP status failures (which still carry the full execution result), and
//! transport failures (which carry nothing but a message).

use thiserror::Error;

use crate::descriptor::ValidationReport;
use crate::result::ExecutionResult;

/// Result type alias for rekku operations
pub type Result<T> = std::result::Result<T, Error>;

/// Default HTTP status reported for failures with no response available
pub const DEFAULT_FAILURE_STATUS: u16 = 502;

/// Main error type for rekku
#[derive(Error, Debug)]
pub enum Error {
    /// Descriptor failed schema validation; no attempt was made
    #[error("validation failed: {report}")]
    Validation {
        /// Every field violation, not just the first
        report: ValidationReport,
    },

    /// Malformed URL or similarly unrecoverable construction issue
    #[error("configuration error: {0}")]
    Config(String),

    /// Body mode `json` with an unparseable payload
    #[error("invalid request body: {0}")]
    InvalidBody(String),

    /// Attempt completed but the status was outside [200, 300)
    #[error("request failed with status {status}")]
    HttpStatus {
        status: u16,
        /// Full execution result so the caller can render the response
        result: Box<ExecutionResult>,
    },

    /// Network-level failure (DNS, connect, timeout, abort) with no response
    #[error("transport error: {message}")]
    Transport { message: String },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create an invalid-body error
    pub fn invalid_body(msg: impl Into<String>) -> Self {
        Error::InvalidBody(msg.into())
    }

    /// Create a transport error
    pub fn transport(msg: impl Into<String>) -> Self {
        Error::Transport {
            message: msg.into(),
        }
    }

    /// Create a status failure from a finished (non-2xx) execution result
    pub fn http_status(result: ExecutionResult) -> Self {
        Error::HttpStatus {
            status: result.metadata.status,
            result: Box::new(result),
        }
    }

    /// Whether the retry loop may try again after this failure
    ///
    /// Validation, config and body errors are deterministic, so retrying
    /// cannot help; status and transport failures participate in the
    /// retry count.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Error::HttpStatus { .. } | Error::Transport { .. })
    }

    /// HTTP status the API surface reports for this error
    ///
    /// Validation maps to 400, status failures keep their own status,
    /// everything else falls back to the 502 default.
    pub fn http_equivalent(&self) -> u16 {
        match self {
            Error::Validation { .. } => 400,
            Error::HttpStatus { status, .. } => *status,
            _ => DEFAULT_FAILURE_STATUS,
        }
    }

    /// Execution result payload, if this failure carries one
    pub fn payload(&self) -> Option<&ExecutionResult> {
        match self {
            Error::HttpStatus { result, .. } => Some(result),
            _ => None,
        }
    }

    /// Consume the error, extracting the execution result payload
    pub fn into_payload(self) -> Option<ExecutionResult> {
        match self {
            Error::HttpStatus { result, .. } => Some(*result),
            _ => None,
        }
    }
}

impl From<url::ParseError> for Error {
    fn from(e: url::ParseError) -> Self {
        Error::Config(format!("invalid URL: {}", e))
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Transport {
            message: e.to_string(),
        }
    }
}

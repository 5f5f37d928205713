//! Error types module
//!
//! The `AppError` enum is the unified error type for the ingest flow.
//! Validation and encoder errors surface to the caller as HTTP failures;
//! best-effort publish steps carry their own error types and are swallowed
//! at the call site, so they never appear here.

use std::io;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Encoder not found: {0}")]
    EncoderMissing(String),

    #[error("Encoder failed with status {status}: {stderr}")]
    EncoderFailed { status: i32, stderr: String },

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code this error maps to.
    pub fn http_status_code(&self) -> u16 {
        match self {
            AppError::BadRequest(_) => 400,
            AppError::NotFound(_) => 404,
            AppError::EncoderMissing(_) => 500,
            AppError::EncoderFailed { .. } => 500,
            AppError::Internal(_) => 500,
        }
    }

    /// Machine-readable error code.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::BadRequest(_) => "bad_request",
            AppError::NotFound(_) => "not_found",
            AppError::EncoderMissing(_) => "encoder_missing",
            AppError::EncoderFailed { .. } => "encoder_failed",
            AppError::Internal(_) => "internal_error",
        }
    }

    /// Log level used when reporting this error server-side.
    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::BadRequest(_) | AppError::NotFound(_) => LogLevel::Debug,
            AppError::EncoderMissing(_) => LogLevel::Error,
            AppError::EncoderFailed { .. } => LogLevel::Error,
            AppError::Internal(_) => LogLevel::Error,
        }
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}

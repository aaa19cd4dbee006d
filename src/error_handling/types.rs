//! Error type definitions.
//!
//! Typed errors for initialization and the driver, plus the categories a
//! failed lookup is counted under.

use std::path::PathBuf;

use log::SetLoggerError;
use reqwest::Error as ReqwestError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),

    /// Error initializing the HTTP client.
    #[error("HTTP client initialization error: {0}")]
    HttpClientError(#[from] ReqwestError),

    /// The configured lookup endpoint is not a valid URL.
    #[error("Invalid API URL '{url}': {source}")]
    InvalidApiUrlError {
        /// The rejected value
        url: String,
        /// Parse failure
        source: url::ParseError,
    },
}

/// Errors returned by a run.
#[derive(Error, Debug)]
pub enum RunError {
    /// The input file does not exist. Not fatal: the caller reports it and exits cleanly.
    #[error("CSV path not set or file missing: {}", .0.display())]
    InputMissing(PathBuf),

    /// Anything else that stops a run (unreadable input, client set-up, cache save).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<InitializationError> for RunError {
    fn from(e: InitializationError) -> Self {
        RunError::Other(e.into())
    }
}

/// Errors from a single live lookup, before categorization.
#[derive(Error, Debug)]
pub enum LookupError {
    /// Transport failure, non-2xx status, or a body that is not JSON.
    #[error(transparent)]
    Http(#[from] ReqwestError),

    /// The body is JSON but `data` is not an object.
    #[error("Unexpected response body: {0}")]
    Body(#[from] serde_json::Error),
}

/// Why a live lookup failed.
///
/// A failure never stops the run; it is recorded with the `"Error"`
/// placeholder and counted under one of these categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum FailureKind {
    HttpRequestBuilderError,
    HttpRequestTimeoutError,
    HttpRequestConnectError,
    HttpRequestUnauthorized,
    HttpRequestForbidden,
    HttpRequestTooManyRequests,
    HttpRequestServerError,
    HttpRequestStatusError,
    HttpRequestBodyError,
    HttpRequestDecodeError,
    HttpRequestOtherError,
}

impl FailureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::HttpRequestBuilderError => "HTTP request builder error",
            FailureKind::HttpRequestTimeoutError => "HTTP request timeout error",
            FailureKind::HttpRequestConnectError => "HTTP request connect error",
            FailureKind::HttpRequestUnauthorized => "Unauthorized (check the API key)",
            FailureKind::HttpRequestForbidden => "Forbidden",
            FailureKind::HttpRequestTooManyRequests => "Too many requests",
            FailureKind::HttpRequestServerError => "Server error",
            FailureKind::HttpRequestStatusError => "HTTP request status error",
            FailureKind::HttpRequestBodyError => "HTTP request body error",
            FailureKind::HttpRequestDecodeError => "Response decode error",
            FailureKind::HttpRequestOtherError => "HTTP request other error",
        }
    }
}

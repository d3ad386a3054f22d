//! Error types for the SWAPI demo
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Fetch Error Enum ==
/// Failure of a single `SwapiClient::fetch` call.
///
/// Every variant increments the client's error counter exactly once.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Request did not complete within the configured timeout
    #[error("Timeout for {0}")]
    Timeout(String),

    /// Upstream answered with a status code >= 400
    #[error("Request failed with status code {0}")]
    HttpStatus(u16),

    /// Network-level failure (DNS, connection reset, TLS, ...)
    #[error("Transport error: {0}")]
    Transport(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Response body was not valid JSON
    #[error("Failed to parse response body: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Wraps any transport-level error.
    pub fn transport<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        FetchError::Transport(err.into())
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::transport(err)
    }
}

// == Report Error Enum ==
/// Failure of a report run. Aborts the remaining steps of that run.
#[derive(Error, Debug)]
pub enum ReportError {
    /// One of the fetch steps failed
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// A payload was fetched but does not have the expected shape
    #[error("Unexpected payload for {endpoint}: {source}")]
    Decode {
        endpoint: String,
        #[source]
        source: serde_json::Error,
    },
}

// == Config Error Enum ==
/// Invalid startup configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number
    #[error("Invalid PORT value: {0}")]
    InvalidPort(String),

    /// Base URL must be an http(s) URL
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

// == Result Type Alias ==
/// Convenience Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

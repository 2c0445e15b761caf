//! HTTP client error types.

use thiserror::Error;

/// Errors that can occur when making HTTP requests.
#[derive(Error, Debug)]
pub enum FetchError {
    /// Failed to send the request or read the response.
    #[error("Request failed: {0}")]
    RequestError(String),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// HTTP error response.
    #[error("HTTP {status}: {message}")]
    HttpError { status: u16, message: String },

    /// Failed to parse response body.
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Request timeout.
    #[error("Request timed out")]
    Timeout,
}

impl From<reqwest::Error> for FetchError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            FetchError::Timeout
        } else if e.is_builder() {
            FetchError::InvalidUrl(e.to_string())
        } else {
            FetchError::RequestError(e.to_string())
        }
    }
}

/// Why a single catalogue record was left out of a load.
#[derive(Error, Debug)]
pub enum RecordError {
    /// The record does not have the expected shape (missing name or price,
    /// wrong field types, not an object).
    #[error("Malformed record: {0}")]
    Malformed(String),

    /// Neither `_id` nor `id` is present.
    #[error("Record has no id")]
    MissingId,

    /// Price is negative or not a finite number.
    #[error("Invalid price: {0}")]
    InvalidPrice(f64),
}

impl From<serde_json::Error> for RecordError {
    fn from(e: serde_json::Error) -> Self {
        RecordError::Malformed(e.to_string())
    }
}

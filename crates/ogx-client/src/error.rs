//! Read API client error types.

use thiserror::Error;

/// Errors that can occur when talking to the read API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The read API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the service.
        status: u16,
        /// Response body, if any.
        message: String,
    },

    /// The read API returned 429 Too Many Requests.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The response body could not be read as JSON.
    #[error("parse error: {0}")]
    Parse(String),

    /// The configured base URL is unusable.
    #[error("invalid base URL: {0}")]
    InvalidUrl(String),

    /// Request parameters failed validation before anything was sent.
    #[error(transparent)]
    Validation(#[from] ogx_core::CoreError),
}

//! Error types for catalog retrieval.
//!
//! A `RetrievalError` is the only error that propagates to the top of the
//! pipeline; it aborts the whole run.

use thiserror::Error;

/// Errors that can occur while fetching a catalog page.
#[derive(Debug, Error)]
pub enum RetrievalError {
    /// Network-level error (DNS resolution, connection refused, TLS errors, etc.)
    #[error("network error fetching catalog page {page}: {source}")]
    Network {
        /// The 1-based page number that failed.
        page: u32,
        /// The underlying network error.
        #[source]
        source: reqwest::Error,
    },

    /// Request timed out before completion.
    #[error("timeout fetching catalog page {page}")]
    Timeout {
        /// The 1-based page number that timed out.
        page: u32,
    },

    /// HTTP error response (4xx client errors, 5xx server errors).
    #[error("HTTP {status} fetching catalog page {page}")]
    HttpStatus {
        /// The 1-based page number that failed.
        page: u32,
        /// The HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded as a catalog page.
    #[error("undecodable catalog page {page}: {source}")]
    Decode {
        /// The 1-based page number with the undecodable body.
        page: u32,
        /// The underlying decode error.
        #[source]
        source: reqwest::Error,
    },
}

impl RetrievalError {
    /// Creates a network or timeout error from a reqwest error.
    pub fn request(page: u32, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { page }
        } else {
            Self::Network { page, source }
        }
    }

    /// Creates an HTTP status error.
    pub fn http_status(page: u32, status: u16) -> Self {
        Self::HttpStatus { page, status }
    }

    /// Creates a decode error.
    pub fn decode(page: u32, source: reqwest::Error) -> Self {
        Self::Decode { page, source }
    }
}

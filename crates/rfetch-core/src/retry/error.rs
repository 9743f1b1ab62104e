//! Fetch attempt error type for retry classification.

use thiserror::Error;

/// Error from a single fetch attempt (transport failure or HTTP error status).
/// Kept structured through the retry loop so that on exhaustion the caller
/// receives the final attempt's failure with its original classification and
/// diagnostic detail, not a generic "retries failed" wrapper.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The transport reported an error (timeout, connection refused, DNS,
    /// closed mid-body, etc.).
    #[error("{0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status. The body is retained for
    /// diagnostics.
    #[error("HTTP {status}: {body}")]
    Http {
        /// Response status code.
        status: u16,
        /// Response body as text (may be empty or truncated by the server).
        body: String,
    },
}

impl FetchError {
    /// Status code for HTTP errors, `None` for transport failures.
    pub fn status(&self) -> Option<u16> {
        match self {
            FetchError::Http { status, .. } => Some(*status),
            FetchError::Network(_) => None,
        }
    }
}

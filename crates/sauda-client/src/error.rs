//! # Client Error Types
//!
//! Network and API failures, reduced to two classes: the request never
//! completed (transport), or the backend answered non-2xx (status).
//! Neither is retried; the triggering user action is terminal and the
//! user re-attempts manually.

use thiserror::Error;

/// Errors from talking to the backend API.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The request could not be sent or the response body could not be
    /// read or decoded.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The backend answered with a non-success status. 4xx and 5xx are
    /// not distinguished further; `message` is the backend's `detail`
    /// when it sent one.
    #[error("API error ({status}): {message}")]
    Status { status: u16, message: String },
}

/// Convenience alias for Results with ClientError.
pub type ClientResult<T> = Result<T, ClientError>;

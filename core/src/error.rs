//! Error types for the request-execution pipeline.

use thiserror::Error;

/// Reasons a send can fail.
///
/// Every variant funnels into the same outcome — the configured
/// [`ErrorHandler`](crate::ErrorHandler) is notified once and the caller
/// receives no result. The variants exist so the handler's diagnostic
/// output can distinguish them, not so callers can branch on them.
#[derive(Debug, Error)]
pub enum SendError {
    /// The transport-native request could not be constructed
    #[error("failed to build request: {0}")]
    BuildFailed(String),

    /// The transport failed to complete the exchange (connectivity,
    /// timeout, cancellation, or a failure reading the response body)
    #[error("request failed: {0}")]
    RequestFailed(String),

    /// The server answered with a non-2xx status
    #[error("unexpected status {status}: {body}")]
    UnexpectedStatus {
        /// HTTP status code of the response
        status: u16,
        /// Raw response body, kept for diagnostics
        body: String,
    },

    /// The response text could not be mapped to the typed result
    #[error("failed to decode response: {0}")]
    DecodeFailed(String),
}

/// Failure raised by [`Request::map_response`](crate::Request::map_response).
///
/// Carries only a message; the client converts it into
/// [`SendError::DecodeFailed`] at the catch boundary.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DecodeError {
    message: String,
}

impl DecodeError {
    /// Create a decode error with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(error: serde_json::Error) -> Self {
        Self::new(error.to_string())
    }
}

impl From<DecodeError> for SendError {
    fn from(error: DecodeError) -> Self {
        Self::DecodeFailed(error.to_string())
    }
}

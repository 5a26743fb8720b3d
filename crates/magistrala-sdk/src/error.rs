//! Uniform error type of every SDK call.

use magistrala_core::QueryError;
use magistrala_proto::{CipherError, TopicError};

/// Errors returned by SDK operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The server answered with a non-2xx status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Message reported by the server
        message: String,
        /// Underlying error reported by the server, if any
        detail: Option<String>,
    },
    /// The request could not be sent or the response not received
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    /// HTTP client construction failed
    #[error("client init error: {0}")]
    Init(String),
    /// Configuration is invalid
    #[error("config error: {0}")]
    Config(String),
    /// Response body did not match the expected record
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
    /// A required argument was missing or malformed
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    /// Query parameters could not be rendered
    #[error(transparent)]
    Query(#[from] QueryError),
    /// Bootstrap payload could not be encrypted or decrypted
    #[error("cipher error: {0}")]
    Cipher(#[from] CipherError),
    /// Publish topic was malformed
    #[error("topic error: {0}")]
    Topic(#[from] TopicError),
    /// Health check target is not a known service
    #[error("unknown service: {0}")]
    UnknownService(String),
}

impl Error {
    /// HTTP status of an API error.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Api { status, .. } => Some(*status),
            Error::Request(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Whether this is an API error with the given status.
    #[must_use]
    pub fn is_status(&self, status: u16) -> bool {
        matches!(self, Error::Api { status: s, .. } if *s == status)
    }
}

/// Build the error for a non-2xx response.
#[must_use]
pub fn handle_error(message: impl Into<String>, status: u16, detail: Option<String>) -> Error {
    Error::Api {
        status,
        message: message.into(),
        detail,
    }
}

/// Result alias used throughout the SDK.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_error_keeps_status_and_message() {
        let err = handle_error("entity not found", 404, Some("not found".to_string()));
        assert_eq!(err.status(), Some(404));
        assert!(err.is_status(404));
        assert_eq!(
            err.to_string(),
            "API error (status 404): entity not found"
        );
        match err {
            Error::Api { detail, .. } => assert_eq!(detail.as_deref(), Some("not found")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_api_errors_have_no_status() {
        let err = Error::InvalidArgument("user id is required".to_string());
        assert_eq!(err.status(), None);
        assert!(!err.is_status(400));
    }
}

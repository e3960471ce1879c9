//! Error types for RPC operations.

use std::io;
use std::time::Duration;

/// Result type for RPC operations.
pub type Result<T> = std::result::Result<T, Error>;

/// JSON-RPC error code for an unknown method.
pub const METHOD_NOT_FOUND: i64 = -32601;

/// Errors that can occur while talking to the switch services.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// I/O error from socket operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The service did not answer in time.
    #[error("{service}: request timed out after {timeout:?}")]
    Timeout {
        /// The service that timed out.
        service: &'static str,
        /// The configured request timeout.
        timeout: Duration,
    },

    /// The service closed the connection before answering.
    #[error("{service}: connection closed")]
    ConnectionClosed {
        /// The service that closed the connection.
        service: &'static str,
    },

    /// The remote service reported a domain error.
    #[error("{service} error: {message} (code {code})")]
    Service {
        /// The service that reported the error.
        service: &'static str,
        /// The error code from the service.
        code: i64,
        /// Human-readable error message.
        message: String,
    },

    /// The remote service does not implement the requested method.
    #[error("operation not supported: {0}")]
    NotSupported(String),

    /// Response id did not match the request id.
    #[error("sequence mismatch: expected {expected}, got {actual}")]
    SequenceMismatch {
        /// Request id that was sent.
        expected: u64,
        /// Response id that was received.
        actual: u64,
    },

    /// Response was well-formed JSON but not a valid reply.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// A command was called with arguments it cannot act on.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl Error {
    /// Build an error from a JSON-RPC error object.
    pub fn from_rpc(service: &'static str, method: &str, code: i64, message: String) -> Self {
        if code == METHOD_NOT_FOUND {
            Self::NotSupported(format!("{} on {}", method, service))
        } else {
            Self::Service {
                service,
                code,
                message,
            }
        }
    }

    /// Check if the remote service does not support the operation.
    ///
    /// Older transceiver services answer unknown methods this way.
    pub fn is_not_supported(&self) -> bool {
        matches!(self, Self::NotSupported(_))
    }

    /// Check if this is a domain error reported by the service.
    pub fn is_service_error(&self) -> bool {
        matches!(self, Self::Service { .. })
    }

    /// Get the service error code, if any.
    pub fn code(&self) -> Option<i64> {
        match self {
            Self::Service { code, .. } => Some(*code),
            Self::NotSupported(_) => Some(METHOD_NOT_FOUND),
            _ => None,
        }
    }
}

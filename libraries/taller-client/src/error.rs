//! Error types for the Taller client.

use taller_core::ApiError;
use thiserror::Error;

/// Errors that can occur when talking to the profile backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Server returned a non-success status
    #[error("Server error ({status})")]
    ServerError {
        status: u16,
        /// `message` from the JSON body, if any
        message: Option<String>,
    },

    /// Server answered `success: false`
    #[error("Server rejected the request: {}", .message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },

    /// Invalid server URL
    #[error("Invalid server URL: {0}")]
    InvalidUrl(String),

    /// Failed to parse server response
    #[error("Failed to parse response: {0}")]
    ParseError(String),

    /// Server is offline or unreachable
    #[error("Server unreachable: {0}")]
    ServerUnreachable(String),
}

impl ClientError {
    /// Classify a transport error, separating connection failures
    pub(crate) fn from_send(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            Self::ServerUnreachable(e.to_string())
        } else {
            Self::Request(e)
        }
    }
}

impl From<ClientError> for ApiError {
    fn from(err: ClientError) -> Self {
        match err {
            ClientError::ServerError { status, message } => ApiError::Status { status, message },
            ClientError::Rejected { message } => ApiError::Rejected { message },
            ClientError::ServerUnreachable(msg) => ApiError::Unreachable(msg),
            ClientError::ParseError(msg) => ApiError::InvalidResponse(msg),
            ClientError::Request(e) => ApiError::Transport(e.to_string()),
            ClientError::InvalidUrl(msg) => ApiError::Transport(msg),
        }
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

//! Error types for the proxy client.

use crate::transport::HttpResponse;
use http::StatusCode;
use thiserror::Error;

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors that can occur while proxying a call.
#[derive(Error, Debug)]
pub enum ClientError {
    /// The server answered with a non-success status. The response,
    /// body included, is preserved verbatim.
    #[error("http error: status {}", .response.status)]
    Http {
        /// The response the server returned.
        response: HttpResponse,
    },

    /// The transport failed before any response was received.
    #[error("transport error: {0}")]
    Transport(String),

    /// A payload or wire body could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(String),

    /// The identity source could not produce branch or machine ids.
    #[error("identity error: {0}")]
    Identity(String),
}

impl ClientError {
    /// Wraps a non-success response as an HTTP error.
    pub fn http(response: HttpResponse) -> Self {
        Self::Http { response }
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// The status code this error maps to in a call result: the server's
    /// status for HTTP errors, 500 for everything else.
    pub fn status(&self) -> StatusCode {
        match self {
            ClientError::Http { response } => response.status,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<teleproxy_protocol::ProtocolError> for ClientError {
    fn from(err: teleproxy_protocol::ProtocolError) -> Self {
        ClientError::Serialization(err.to_string())
    }
}

//! Error types for protocol encoding.

use thiserror::Error;

/// Result type for protocol operations.
pub type ProtocolResult<T> = Result<T, ProtocolError>;

/// Errors that can occur while encoding protocol messages.
#[derive(Error, Debug)]
pub enum ProtocolError {
    /// Message could not be encoded to its wire form.
    #[error("encode error: {0}")]
    Encode(String),
}

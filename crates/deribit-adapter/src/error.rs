/*
[INPUT]:  Error sources (connection, transport, wire protocol, exchange API)
[OUTPUT]: Structured error types with context
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use thiserror::Error;

/// Main error type for the Deribit adapter
#[derive(Error, Debug)]
pub enum DeribitError {
    /// Resolution, socket, TLS or upgrade handshake failure while connecting
    #[error("connection failed: {0}")]
    Connection(String),

    /// Send or receive attempted on a disconnected channel
    #[error("not connected to exchange")]
    NotConnected,

    /// Write or read failure on an otherwise connected channel
    #[error("transport failure: {0}")]
    Transport(String),

    /// Received frame could not be interpreted as a structured response
    #[error("malformed response: {0}")]
    Protocol(String),

    /// Exchange returned a well-formed error response
    #[error("API error (code {code}): {message}")]
    Operation { code: i64, message: String },

    /// Outbound envelope could not be encoded
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),
}

impl DeribitError {
    /// Check if the error indicates the channel is unusable until reconnected
    pub fn is_connectivity_error(&self) -> bool {
        matches!(
            self,
            DeribitError::Connection(_) | DeribitError::NotConnected | DeribitError::Transport(_)
        )
    }

    /// Get the exchange error code, if this is an API-level rejection
    pub fn operation_code(&self) -> Option<i64> {
        match self {
            DeribitError::Operation { code, .. } => Some(*code),
            _ => None,
        }
    }
}

/// Result type alias for adapter operations
pub type Result<T> = std::result::Result<T, DeribitError>;

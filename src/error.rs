//! Error types for wiredis
//!
//! Provides a unified error type for decoding, encoding, and transport
//! operations.

use thiserror::Error;

/// Result type alias using ProtocolError
pub type Result<T> = std::result::Result<T, ProtocolError>;

/// Unified error type for wiredis operations
///
/// Every decode failure is terminal for the session: the caller must reset
/// the decoder (and, unless the failure is `Remote`, treat the connection as
/// desynchronized) before issuing another command. Nothing is retried
/// internally.
#[derive(Debug, Error)]
pub enum ProtocolError {
    // -------------------------------------------------------------------------
    // Server-Reported Errors
    // -------------------------------------------------------------------------
    /// The server answered with an error reply (`-message`). The connection
    /// itself is still in a usable state; the session may be reset and reused.
    #[error("server error: {0}")]
    Remote(String),

    // -------------------------------------------------------------------------
    // Malformed Protocol Input
    // -------------------------------------------------------------------------
    #[error("malformed integer: {0:?}")]
    MalformedInteger(String),

    #[error("malformed length: {0:?}")]
    MalformedLength(String),

    #[error("unknown type prefix: {0:?}")]
    UnknownTypePrefix(char),

    /// Bulk payload length did not match the declared length. The byte
    /// stream is desynchronized from the protocol framing.
    #[error("bulk string length mismatch: declared {expected}, got {actual}")]
    BulkLengthMismatch { expected: usize, actual: usize },

    // -------------------------------------------------------------------------
    // Session Misuse
    // -------------------------------------------------------------------------
    /// A line was fed to a session that already holds a complete value.
    #[error("input fed to a completed decoder session")]
    OverfeedAfterCompletion,

    /// A fed buffer did not end on a CRLF boundary. Partial trailing data
    /// belongs to the caller's buffering, not the decoder.
    #[error("input does not end on a line terminator boundary")]
    UnterminatedInput,

    // -------------------------------------------------------------------------
    // Command Preconditions
    // -------------------------------------------------------------------------
    #[error("empty command")]
    EmptyCommand,

    #[error("command too large: {size} bytes (max {max})")]
    CommandTooLarge { size: usize, max: usize },

    // -------------------------------------------------------------------------
    // Transport Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The peer closed the stream before a complete reply was decoded.
    #[error("connection closed before a complete reply")]
    ConnectionClosed,
}

impl ProtocolError {
    /// Whether the session may be reset and the connection reused.
    ///
    /// Only `Remote` is recoverable: it is a well-formed reply, so the stream
    /// is still aligned on a frame boundary. Every other failure means the
    /// framing state is unknown and the connection should be discarded.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, ProtocolError::Remote(_))
    }
}

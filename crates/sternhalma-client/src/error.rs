//! Error types for the session client.

use sternhalma_protocol::{FramingError, ProtocolError};

/// Errors that can occur while establishing or driving a session.
///
/// Lower-layer errors pass through transparently (`#[from]`), so callers
/// can still match on the framing distinction between a clean close and
/// a truncated one.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Every connection attempt failed with a transient error and the
    /// attempt budget ran out.
    #[error("failed to connect to the server after {attempts} attempts")]
    RetriesExhausted { attempts: u32 },

    /// The server answered the handshake with `reject`. Fatal to this
    /// session; the caller may start over with a fresh `hello`.
    #[error("connection refused by server: {0}")]
    Refused(String),

    /// A single read or write exceeded the configured per-operation
    /// timeout. Distinct from a clean disconnect so the caller can
    /// decide between reconnecting and aborting.
    #[error("{operation} timed out")]
    Timeout { operation: &'static str },

    /// The byte stream broke (clean close, truncation, write failure).
    #[error(transparent)]
    Framing(#[from] FramingError),

    /// A frame arrived but its content was wrong (decode failure,
    /// unknown type, missing field).
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A non-transient I/O failure during connection establishment.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}

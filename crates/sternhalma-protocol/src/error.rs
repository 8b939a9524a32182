//! Error types for the protocol layer.
//!
//! Framing and message-model failures are deliberately separate enums:
//! a [`FramingError`] means the byte stream itself broke (the connection
//! is unusable), while a [`ProtocolError`] means a complete frame arrived
//! but its content was wrong.

/// Errors in the framing layer: reading or writing one length-prefixed
/// frame on the wire.
#[derive(Debug, thiserror::Error)]
pub enum FramingError {
    /// The peer closed the connection before sending any byte of the
    /// length prefix. This is the orderly "peer hung up" case and is
    /// reported distinctly from mid-frame truncation.
    #[error("connection closed by peer")]
    ConnectionClosed,

    /// The peer closed the connection mid-frame — after at least one
    /// byte of the prefix or payload had arrived. Unlike a clean close,
    /// this signals wire corruption or a crashed peer.
    #[error("stream truncated mid-frame: expected {expected} bytes, read {read}")]
    Truncated { expected: usize, read: usize },

    /// The length prefix announced a payload larger than the frame
    /// size limit. Protects against garbage prefixes causing huge
    /// allocations.
    #[error("frame of {0} bytes exceeds the maximum frame size")]
    Oversized(usize),

    /// Writing the prefix or payload failed. The caller may retry the
    /// whole frame under its connection-level retry policy.
    #[error("write failed: {0}")]
    WriteFailed(#[source] std::io::Error),

    /// Reading failed for a reason other than end-of-stream.
    #[error("read failed: {0}")]
    Io(#[source] std::io::Error),
}

/// Errors in the message model: encoding outbound messages and parsing
/// decoded records into typed messages.
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    /// Serialization of an outbound message failed. Should not occur
    /// for the closed set of client message variants.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// The payload bytes were not valid for the codec at all.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// A well-formed record arrived whose `type` tag is unknown or
    /// whose required fields are missing. Never silently coerced into
    /// a default variant.
    #[error("unexpected message: {0}")]
    UnexpectedMessage(String),
}

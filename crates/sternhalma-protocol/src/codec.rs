//! Codec trait and implementations for serializing message payloads.
//!
//! The framing layer moves opaque byte payloads; a codec decides what
//! those bytes look like. The wire contract only requires a
//! self-describing structured encoding that both ends of a deployment
//! agree on — [`JsonCodec`] is the provided implementation, and a binary
//! codec (CBOR shares the same data model) could be swapped in without
//! touching any other layer.

use serde::{Serialize, de::DeserializeOwned};

use crate::ProtocolError;

/// Encodes values to payload bytes and decodes them back.
///
/// `Send + Sync + 'static` because a codec is held across `.await` points
/// by tasks that may migrate between runtime threads.
pub trait Codec: Send + Sync + 'static {
    /// Serializes a value into payload bytes.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Encode`] if the value cannot be
    /// represented in this format.
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError>;

    /// Deserializes payload bytes back into a value.
    ///
    /// # Errors
    /// Returns [`ProtocolError::Decode`] if the bytes are malformed or
    /// do not match the expected shape.
    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError>;
}

/// A [`Codec`] that uses JSON via `serde_json`.
///
/// Human-readable, which makes captured frames trivial to inspect while
/// debugging against a live server. Behind the `json` feature flag
/// (enabled by default).
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCodec;

#[cfg(feature = "json")]
impl Codec for JsonCodec {
    fn encode<T: Serialize>(
        &self,
        value: &T,
    ) -> Result<Vec<u8>, ProtocolError> {
        serde_json::to_vec(value).map_err(ProtocolError::Encode)
    }

    fn decode<T: DeserializeOwned>(
        &self,
        data: &[u8],
    ) -> Result<T, ProtocolError> {
        serde_json::from_slice(data).map_err(ProtocolError::Decode)
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;

    #[test]
    fn test_json_codec_round_trips_a_record() {
        let codec = JsonCodec;
        let value = serde_json::json!({"type": "hello"});
        let bytes = codec.encode(&value).unwrap();
        let back: serde_json::Value = codec.decode(&bytes).unwrap();
        assert_eq!(back, value);
    }

    #[test]
    fn test_json_codec_decode_garbage_returns_decode_error() {
        let codec = JsonCodec;
        let result: Result<serde_json::Value, _> =
            codec.decode(b"\x9f\x02not a record");
        assert!(matches!(result, Err(ProtocolError::Decode(_))));
    }
}

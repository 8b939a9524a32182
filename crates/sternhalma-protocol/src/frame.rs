//! Length-prefixed framing over an async byte stream.
//!
//! One frame is a 4-byte big-endian length `L` followed by exactly `L`
//! payload bytes. [`read_frame`] and [`write_frame`] are generic over any
//! `AsyncRead`/`AsyncWrite` stream, so they work identically for TCP and
//! Unix-domain sockets (and for in-memory duplex pipes in tests).
//!
//! The read side distinguishes two end-of-stream cases that callers must
//! treat very differently:
//!
//! - EOF before any prefix byte → [`FramingError::ConnectionClosed`],
//!   the peer hung up between frames (orderly shutdown).
//! - EOF after at least one byte of the frame → [`FramingError::Truncated`],
//!   the stream died mid-frame (corruption or crash).

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use crate::FramingError;

/// Upper bound on payload size. A frame this large can only be a garbage
/// length prefix; real messages are a few kilobytes at most.
pub const MAX_FRAME_SIZE: usize = 16 * 1024 * 1024;

/// Outcome of trying to fill a buffer from the stream.
enum Fill {
    /// The buffer was filled completely.
    Complete,
    /// The stream ended after `read` of the wanted bytes.
    Eof { read: usize },
}

/// Reads until `buf` is full or the stream ends.
async fn read_full<R: AsyncRead + Unpin>(
    stream: &mut R,
    buf: &mut [u8],
) -> Result<Fill, FramingError> {
    let mut filled = 0;
    while filled < buf.len() {
        let n = stream
            .read(&mut buf[filled..])
            .await
            .map_err(FramingError::Io)?;
        if n == 0 {
            return Ok(Fill::Eof { read: filled });
        }
        filled += n;
    }
    Ok(Fill::Complete)
}

/// Reads exactly one frame and returns its payload.
///
/// Suspends the calling task while waiting for bytes; never blocks a
/// runtime thread.
///
/// # Errors
/// - [`FramingError::ConnectionClosed`] — EOF with zero frame bytes read.
/// - [`FramingError::Truncated`] — EOF mid-prefix or mid-payload.
/// - [`FramingError::Oversized`] — prefix announces an absurd length.
/// - [`FramingError::Io`] — any other read failure.
pub async fn read_frame<R: AsyncRead + Unpin>(
    stream: &mut R,
) -> Result<Vec<u8>, FramingError> {
    let mut prefix = [0u8; 4];
    match read_full(stream, &mut prefix).await? {
        Fill::Complete => {}
        Fill::Eof { read: 0 } => return Err(FramingError::ConnectionClosed),
        Fill::Eof { read } => {
            return Err(FramingError::Truncated { expected: 4, read });
        }
    }

    let length = u32::from_be_bytes(prefix) as usize;
    tracing::trace!(length, "frame length prefix read");
    if length > MAX_FRAME_SIZE {
        return Err(FramingError::Oversized(length));
    }

    let mut payload = vec![0u8; length];
    match read_full(stream, &mut payload).await? {
        Fill::Complete => Ok(payload),
        Fill::Eof { read } => Err(FramingError::Truncated {
            expected: length,
            read,
        }),
    }
}

/// Writes one frame: the 4-byte big-endian length prefix, the payload,
/// then a flush so the frame actually leaves the process.
///
/// # Errors
/// [`FramingError::Oversized`] if the payload does not fit a `u32`
/// length; [`FramingError::WriteFailed`] for any write or flush failure
/// (the caller may retry the whole frame).
pub async fn write_frame<W: AsyncWrite + Unpin>(
    stream: &mut W,
    payload: &[u8],
) -> Result<(), FramingError> {
    let length = u32::try_from(payload.len())
        .map_err(|_| FramingError::Oversized(payload.len()))?;

    stream
        .write_all(&length.to_be_bytes())
        .await
        .map_err(FramingError::WriteFailed)?;
    stream
        .write_all(payload)
        .await
        .map_err(FramingError::WriteFailed)?;
    stream.flush().await.map_err(FramingError::WriteFailed)?;

    tracing::trace!(length, "frame written");
    Ok(())
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    //! Framing tests run over `tokio::io::duplex`, an in-memory pipe:
    //! dropping one half produces EOF on the other, which lets us
    //! exercise every close/truncation case deterministically without
    //! a real socket.

    use tokio::io::AsyncWriteExt;

    use super::*;

    #[tokio::test]
    async fn test_write_then_read_round_trips_payload() {
        let (mut tx, mut rx) = tokio::io::duplex(1024);

        write_frame(&mut tx, b"hello sternhalma").await.unwrap();
        let payload = read_frame(&mut rx).await.unwrap();

        assert_eq!(payload, b"hello sternhalma");
    }

    #[tokio::test]
    async fn test_round_trip_empty_payload() {
        let (mut tx, mut rx) = tokio::io::duplex(64);

        write_frame(&mut tx, b"").await.unwrap();
        let payload = read_frame(&mut rx).await.unwrap();

        assert!(payload.is_empty());
    }

    #[tokio::test]
    async fn test_consecutive_frames_keep_their_boundaries() {
        let (mut tx, mut rx) = tokio::io::duplex(1024);

        write_frame(&mut tx, b"first").await.unwrap();
        write_frame(&mut tx, b"second").await.unwrap();

        assert_eq!(read_frame(&mut rx).await.unwrap(), b"first");
        assert_eq!(read_frame(&mut rx).await.unwrap(), b"second");
    }

    #[tokio::test]
    async fn test_write_frame_emits_big_endian_prefix() {
        let (mut tx, mut rx) = tokio::io::duplex(64);

        write_frame(&mut tx, b"abc").await.unwrap();
        drop(tx);

        let mut wire = Vec::new();
        tokio::io::AsyncReadExt::read_to_end(&mut rx, &mut wire)
            .await
            .unwrap();
        assert_eq!(wire, [0, 0, 0, 3, b'a', b'b', b'c']);
    }

    #[tokio::test]
    async fn test_eof_before_any_byte_is_connection_closed() {
        let (tx, mut rx) = tokio::io::duplex(64);
        drop(tx); // peer closes without sending anything

        let result = read_frame(&mut rx).await;

        assert!(matches!(result, Err(FramingError::ConnectionClosed)));
    }

    #[tokio::test]
    async fn test_eof_mid_prefix_is_truncated() {
        let (mut tx, mut rx) = tokio::io::duplex(64);
        tx.write_all(&[0, 0]).await.unwrap(); // two of four prefix bytes
        drop(tx);

        let result = read_frame(&mut rx).await;

        assert!(matches!(
            result,
            Err(FramingError::Truncated { expected: 4, read: 2 })
        ));
    }

    #[tokio::test]
    async fn test_eof_mid_payload_is_truncated() {
        let (mut tx, mut rx) = tokio::io::duplex(64);
        tx.write_all(&[0, 0, 0, 10]).await.unwrap(); // promises 10 bytes
        tx.write_all(b"abc").await.unwrap(); // delivers 3
        drop(tx);

        let result = read_frame(&mut rx).await;

        assert!(matches!(
            result,
            Err(FramingError::Truncated { expected: 10, read: 3 })
        ));
    }

    #[tokio::test]
    async fn test_absurd_length_prefix_is_rejected() {
        let (mut tx, mut rx) = tokio::io::duplex(64);
        tx.write_all(&u32::MAX.to_be_bytes()).await.unwrap();

        let result = read_frame(&mut rx).await;

        assert!(matches!(result, Err(FramingError::Oversized(_))));
    }
}

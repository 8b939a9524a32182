//! The session client: connect, handshake, and typed message exchange.
//!
//! One [`Client`] owns one socket and one logical session. The protocol
//! is strictly request/response from the client's side — there is never
//! more than one unanswered send in flight — so the client needs no
//! internal locking: the task that owns it drives everything.

use std::fmt;
use std::io;

use tokio::net::TcpStream;
#[cfg(unix)]
use tokio::net::UnixStream;

use sternhalma_protocol::{
    ClientMessage, Codec, FramingError, JsonCodec, ProtocolError, Record,
    ServerMessage, read_frame, write_frame,
};

use crate::{ClientConfig, ClientError, ServerAddr};

// ---------------------------------------------------------------------------
// SessionState
// ---------------------------------------------------------------------------

/// Lifecycle of a session.
///
/// ```text
/// Disconnected → Connecting → Handshaking → Ready
///                                 │           │
///                                 ▼           ▼
///                              Faulted    Disconnected
/// ```
///
/// `Faulted` means the handshake or a later exchange failed in a way
/// that makes the session unusable; `Disconnected` is the orderly state
/// before a connection exists or after [`Client::close`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Disconnected,
    Connecting,
    Handshaking,
    Ready,
    Faulted,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Disconnected => "Disconnected",
            Self::Connecting => "Connecting",
            Self::Handshaking => "Handshaking",
            Self::Ready => "Ready",
            Self::Faulted => "Faulted",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Stream
// ---------------------------------------------------------------------------

/// The connected socket, TCP or Unix-domain. Identical at the framing
/// layer; only dialing differs.
#[derive(Debug)]
enum Stream {
    Tcp(TcpStream),
    #[cfg(unix)]
    Unix(UnixStream),
}

impl Stream {
    async fn read_frame(&mut self) -> Result<Vec<u8>, FramingError> {
        match self {
            Self::Tcp(s) => read_frame(s).await,
            #[cfg(unix)]
            Self::Unix(s) => read_frame(s).await,
        }
    }

    async fn write_frame(
        &mut self,
        payload: &[u8],
    ) -> Result<(), FramingError> {
        match self {
            Self::Tcp(s) => write_frame(s, payload).await,
            #[cfg(unix)]
            Self::Unix(s) => write_frame(s, payload).await,
        }
    }

    async fn shutdown(&mut self) -> io::Result<()> {
        use tokio::io::AsyncWriteExt;
        match self {
            Self::Tcp(s) => s.shutdown().await,
            #[cfg(unix)]
            Self::Unix(s) => s.shutdown().await,
        }
    }
}

/// Whether a dial failure is worth retrying.
///
/// Refused means the server is not up yet; not-found means the socket
/// file has not been created yet. Both are the normal "client started
/// before server" races. Anything else is fatal immediately.
fn is_transient(error: &io::Error) -> bool {
    matches!(
        error.kind(),
        io::ErrorKind::ConnectionRefused | io::ErrorKind::NotFound
    )
}

/// Dials the configured endpoint under the bounded-retry policy.
async fn dial(config: &ClientConfig) -> Result<Stream, ClientError> {
    tracing::info!(addr = %config.addr, "connecting to server");

    for attempt in 1..=config.attempts {
        let result = match &config.addr {
            ServerAddr::Tcp(addr) => {
                TcpStream::connect(addr.as_str()).await.map(Stream::Tcp)
            }
            #[cfg(unix)]
            ServerAddr::Unix(path) => {
                UnixStream::connect(path).await.map(Stream::Unix)
            }
        };

        match result {
            Ok(stream) => {
                tracing::info!("connection established");
                return Ok(stream);
            }
            Err(e) if is_transient(&e) => {
                tracing::error!(
                    error = %e,
                    attempt,
                    attempts = config.attempts,
                    "connection attempt failed, retrying"
                );
                tokio::time::sleep(config.retry_delay).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to connect");
                return Err(ClientError::Io(e));
            }
        }
    }

    Err(ClientError::RetriesExhausted {
        attempts: config.attempts,
    })
}

// ---------------------------------------------------------------------------
// Client
// ---------------------------------------------------------------------------

/// A connected, handshaken session with the game server.
///
/// Created by [`Client::connect`]; already `Ready` when you hold one.
/// Generic over the payload [`Codec`] ([`JsonCodec`] by default) so a
/// deployment can swap the encoding without touching session logic.
#[derive(Debug)]
pub struct Client<C: Codec = JsonCodec> {
    config: ClientConfig,
    codec: C,
    stream: Stream,
    session_id: Option<String>,
    state: SessionState,
}

impl Client {
    /// Connects with the default [`JsonCodec`], retrying per the config,
    /// and performs the `hello` → `welcome` handshake.
    ///
    /// # Errors
    /// - [`ClientError::RetriesExhausted`] — the server never answered.
    /// - [`ClientError::Refused`] — the server answered `reject`.
    /// - [`ClientError::Protocol`] — the server answered with anything
    ///   other than `welcome` or `reject`.
    pub async fn connect(config: ClientConfig) -> Result<Self, ClientError> {
        Self::connect_with_codec(config, JsonCodec).await
    }
}

impl<C: Codec> Client<C> {
    /// Like [`Client::connect`] but with an explicit codec.
    pub async fn connect_with_codec(
        config: ClientConfig,
        codec: C,
    ) -> Result<Self, ClientError> {
        let stream = dial(&config).await?;
        let mut client = Self {
            config,
            codec,
            stream,
            session_id: None,
            state: SessionState::Handshaking,
        };
        client.handshake().await?;
        Ok(client)
    }

    /// Tears down the current socket and re-establishes the session.
    ///
    /// If a session id is held from a previous `welcome`, the new
    /// handshake opens with `reconnect{session_id}` so the server can
    /// resume the same game.
    pub async fn reconnect(&mut self) -> Result<(), ClientError> {
        self.state = SessionState::Connecting;
        match dial(&self.config).await {
            Ok(stream) => self.stream = stream,
            Err(e) => {
                self.state = SessionState::Disconnected;
                return Err(e);
            }
        }
        self.state = SessionState::Handshaking;
        self.handshake().await
    }

    /// Sends the opening message and blocks for exactly one reply.
    async fn handshake(&mut self) -> Result<(), ClientError> {
        let opening = match &self.session_id {
            Some(id) => ClientMessage::Reconnect {
                session_id: id.clone(),
            },
            None => ClientMessage::Hello,
        };
        tracing::debug!(kind = opening.kind(), "starting handshake");
        self.send_message(&opening).await?;

        match self.receive_message().await {
            Ok(ServerMessage::Welcome { session_id }) => {
                tracing::info!(%session_id, "session established");
                self.session_id = Some(session_id);
                self.state = SessionState::Ready;
                Ok(())
            }
            Ok(ServerMessage::Reject { reason }) => {
                tracing::error!(%reason, "server rejected the session");
                self.state = SessionState::Faulted;
                Err(ClientError::Refused(reason))
            }
            Ok(other) => {
                self.state = SessionState::Faulted;
                Err(ProtocolError::UnexpectedMessage(format!(
                    "expected welcome or reject during handshake, got {}",
                    other.kind()
                ))
                .into())
            }
            Err(e) => {
                self.state = SessionState::Faulted;
                Err(e)
            }
        }
    }

    /// Encodes and writes one message under the per-operation timeout.
    ///
    /// Not retried here: once past the handshake, a failed write means
    /// the connection is gone, and retrying belongs to the
    /// connection-level policy ([`reconnect`](Self::reconnect)), not to
    /// individual messages.
    pub async fn send_message(
        &mut self,
        message: &ClientMessage,
    ) -> Result<(), ClientError> {
        tracing::debug!(kind = message.kind(), "sending message");
        let payload = self.codec.encode(message)?;
        tokio::time::timeout(
            self.config.io_timeout,
            self.stream.write_frame(&payload),
        )
        .await
        .map_err(|_| ClientError::Timeout { operation: "send" })??;
        Ok(())
    }

    /// Reads one frame, decodes it, and parses it into a typed message,
    /// all under the per-operation timeout.
    ///
    /// A clean close (peer hung up between frames) surfaces as
    /// [`FramingError::ConnectionClosed`], distinct from mid-frame
    /// truncation — the former is orderly, the latter is corruption.
    pub async fn receive_message(
        &mut self,
    ) -> Result<ServerMessage, ClientError> {
        tracing::debug!("waiting for server");
        let payload = tokio::time::timeout(
            self.config.io_timeout,
            self.stream.read_frame(),
        )
        .await
        .map_err(|_| ClientError::Timeout {
            operation: "receive",
        })??;

        let record: Record = self.codec.decode(&payload)?;
        let message = ServerMessage::parse(record)?;
        tracing::debug!(kind = message.kind(), "received message");
        Ok(message)
    }

    /// Flushes and shuts the socket down, best-effort.
    ///
    /// Teardown failures are logged and swallowed so they never mask
    /// whatever caused the session to end in the first place.
    pub async fn close(&mut self) {
        if let Err(e) = self.stream.shutdown().await {
            tracing::debug!(error = %e, "error during teardown, ignored");
        }
        self.state = SessionState::Disconnected;
        tracing::info!("connection closed");
    }

    /// The id the server issued at `welcome`, if the handshake has
    /// succeeded at least once.
    pub fn session_id(&self) -> Option<&str> {
        self.session_id.as_deref()
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_state_display() {
        assert_eq!(SessionState::Ready.to_string(), "Ready");
        assert_eq!(SessionState::Faulted.to_string(), "Faulted");
    }

    #[test]
    fn test_is_transient_classification() {
        assert!(is_transient(&io::Error::from(
            io::ErrorKind::ConnectionRefused
        )));
        assert!(is_transient(&io::Error::from(io::ErrorKind::NotFound)));
        assert!(!is_transient(&io::Error::from(
            io::ErrorKind::PermissionDenied
        )));
    }
}

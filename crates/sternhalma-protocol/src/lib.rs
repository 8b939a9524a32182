//! Wire protocol for the Sternhalma game server.
//!
//! Three pieces, each independent of the socket that carries them:
//!
//! - **Framing** ([`read_frame`], [`write_frame`]) — one message per
//!   4-byte big-endian length-prefixed frame.
//! - **Codec** ([`Codec`] trait, [`JsonCodec`]) — how a payload's bytes
//!   map to a structured record.
//! - **Messages** ([`ServerMessage`], [`ClientMessage`], [`GameResult`])
//!   — the closed, `type`-tagged taxonomy both ends speak.
//!
//! # Architecture
//!
//! The protocol layer sits between the raw stream and the session client.
//! It knows nothing about retries, handshakes, or boards beyond the
//! board types its messages carry.
//!
//! ```text
//! Stream (bytes) → Framing (payload) → Codec (record) → Message (typed)
//! ```

mod codec;
mod error;
mod frame;
mod message;

pub use codec::Codec;
#[cfg(feature = "json")]
pub use codec::JsonCodec;
pub use error::{FramingError, ProtocolError};
pub use frame::{MAX_FRAME_SIZE, read_frame, write_frame};
#[cfg(feature = "json")]
pub use message::Record;
pub use message::{ClientMessage, GameResult, ServerMessage};

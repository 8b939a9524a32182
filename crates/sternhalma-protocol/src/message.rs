//! The closed message taxonomy spoken between client and server.
//!
//! Every message is a record with a `type` discriminant string plus the
//! variant's own fields. The enums here are internally tagged
//! (`#[serde(tag = "type")]`), so the dispatch-on-`type` table lives in
//! the derived implementation rather than a hand-written match.
//!
//! Parsing is strict: an unrecognized `type`, or a recognized one with a
//! required field missing, is a [`ProtocolError::UnexpectedMessage`] —
//! never silently dropped and never coerced into a default variant.
//! Consumers that want to tolerate stray messages (the agent loop does,
//! mid-game) opt into that themselves.

use serde::{Deserialize, Serialize};
use sternhalma_board::{Movement, Player, Scores};

use crate::ProtocolError;

/// A decoded-but-untyped message record, as produced by a
/// [`Codec`](crate::Codec) before dispatch.
#[cfg(feature = "json")]
pub type Record = serde_json::Value;

// ---------------------------------------------------------------------------
// GameResult
// ---------------------------------------------------------------------------

/// How a game ended. Carried inside [`ServerMessage::GameFinished`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameResult {
    /// The turn limit was reached before anyone finished.
    MaxTurns { total_turns: u32, scores: Scores },

    /// A player moved all pieces into the opposing triangle.
    Finished {
        winner: Player,
        total_turns: u32,
        scores: Scores,
    },
}

// ---------------------------------------------------------------------------
// ServerMessage
// ---------------------------------------------------------------------------

/// Messages the server sends to the client.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ServerMessage {
    /// The server accepted the connection and issued a session id.
    /// The only positive answer to `hello` / `reconnect`.
    Welcome { session_id: String },

    /// The server refused the connection (e.g. the game is full).
    Reject { reason: String },

    /// The server asks the client to disconnect.
    Disconnect,

    /// It is the client's turn; `movements` lists every legal move.
    /// The client must answer with exactly one [`ClientMessage::Choice`].
    Turn { movements: Vec<Movement> },

    /// Some player's movement was applied to the shared board.
    Movement {
        player: Player,
        movement: Movement,
        scores: Scores,
    },

    /// The game is over.
    GameFinished { result: GameResult },
}

impl ServerMessage {
    /// Parses a decoded record into a typed message, dispatching on the
    /// `type` field.
    ///
    /// # Errors
    /// [`ProtocolError::UnexpectedMessage`] on an unknown `type` or a
    /// missing required field. This includes the legacy `assign`
    /// handshake message from an earlier protocol revision, which is
    /// deliberately not special-cased.
    #[cfg(feature = "json")]
    pub fn parse(record: Record) -> Result<Self, ProtocolError> {
        serde_json::from_value(record)
            .map_err(|e| ProtocolError::UnexpectedMessage(e.to_string()))
    }

    /// The `type` tag of this message, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Welcome { .. } => "welcome",
            Self::Reject { .. } => "reject",
            Self::Disconnect => "disconnect",
            Self::Turn { .. } => "turn",
            Self::Movement { .. } => "movement",
            Self::GameFinished { .. } => "game_finished",
        }
    }
}

// ---------------------------------------------------------------------------
// ClientMessage
// ---------------------------------------------------------------------------

/// Messages the client sends to the server.
///
/// Each variant serializes to a record with exactly its declared fields
/// plus the `type` tag — no extras, nothing omitted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ClientMessage {
    /// Open a fresh session. The very first frame on a new connection.
    Hello,

    /// Resume an existing session after a transient disconnect.
    Reconnect { session_id: String },

    /// Answer to [`ServerMessage::Turn`]: the index of the chosen
    /// movement within the list the server just offered.
    Choice { movement_index: usize },
}

impl ClientMessage {
    /// The `type` tag of this message, for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Hello => "hello",
            Self::Reconnect { .. } => "reconnect",
            Self::Choice { .. } => "choice",
        }
    }
}

// =========================================================================
// Tests
// =========================================================================

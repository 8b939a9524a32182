//! Hexagonal board model for Sternhalma (Chinese checkers).
//!
//! Two layers, both free of any networking concern:
//!
//! - **Geometry** ([`BoardIndex`], [`hexagonal_distance`],
//!   [`VALID_POSITIONS`], the starting triangles) — pure functions and
//!   `const` layout data, immutable for the life of the process.
//! - **Board** ([`Board`], [`Position`], [`Movement`]) — the mutable
//!   occupancy grid a session mirrors game state onto.
//!
//! # Architecture
//!
//! This is the leaf crate of the stack. The protocol layer carries these
//! types inside messages; the client layer applies server-declared
//! movements to an owned [`Board`].
//!
//! ```text
//! Client (session + agent) → Protocol (messages) → Board (this crate)
//! ```

mod board;
mod geometry;

pub use board::{Board, Movement, Position};
pub use geometry::{
    BoardIndex, GRID_SIZE, PLAYER1_STARTING_POSITIONS,
    PLAYER2_STARTING_POSITIONS, Player, Scores, VALID_POSITIONS,
    euclidean_distance, hexagonal_distance,
};

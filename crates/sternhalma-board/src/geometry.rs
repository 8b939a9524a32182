//! Axial coordinates, distance metrics, and the fixed board layout.
//!
//! Everything in this module is pure and immutable: the star-shaped set of
//! playable cells and each player's home triangle are `const` data shared
//! by every session in the process, and the distance functions are total
//! over all coordinate pairs.

use std::fmt;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Player
// ---------------------------------------------------------------------------

/// One of the two competing sides.
///
/// On the wire a player is the plain integer `1` or `2`, so serde goes
/// through `u8` rather than a string tag (`#[serde(into/try_from)]`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    /// Returns the other side.
    pub fn opponent(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Starting cells of this player's home triangle.
    ///
    /// A player's home triangle is simultaneously the *goal* triangle of
    /// the opponent.
    pub fn starting_positions(self) -> &'static [BoardIndex; 15] {
        match self {
            Player::One => &PLAYER1_STARTING_POSITIONS,
            Player::Two => &PLAYER2_STARTING_POSITIONS,
        }
    }
}

impl From<Player> for u8 {
    fn from(player: Player) -> u8 {
        player as u8
    }
}

impl TryFrom<u8> for Player {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Player::One),
            2 => Ok(Player::Two),
            other => Err(format!("unknown player: {other}")),
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "player {}", *self as u8)
    }
}

// ---------------------------------------------------------------------------
// Scores
// ---------------------------------------------------------------------------

/// Per-side score pair, indexed by [`Player`].
///
/// `#[serde(transparent)]` keeps the wire shape a plain two-element array
/// (`[10, 8]`), matching what the server sends.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Scores(pub [i64; 2]);

impl Scores {
    /// The score of the given player.
    pub fn for_player(&self, player: Player) -> i64 {
        self.0[player as usize - 1]
    }
}

// ---------------------------------------------------------------------------
// BoardIndex
// ---------------------------------------------------------------------------

/// Axial `(q, r)` coordinate on the triangular hex grid.
///
/// A `BoardIndex` carries no validity of its own — a coordinate is playable
/// exactly when it is a member of [`VALID_POSITIONS`]. Serialized as the
/// two-element array `[q, r]`, the shape movements arrive in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct BoardIndex(pub i32, pub i32);

impl BoardIndex {
    /// First axial coordinate.
    pub fn q(self) -> i32 {
        self.0
    }

    /// Second axial coordinate.
    pub fn r(self) -> i32 {
        self.1
    }
}

impl fmt::Display for BoardIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

// ---------------------------------------------------------------------------
// Distance metrics
// ---------------------------------------------------------------------------

/// Hex-grid distance: the minimum number of adjacent-cell steps from `i`
/// to `j`.
///
/// On an axial grid the step count of a delta `(dq, dr)` is
/// `max(|dq|, |dr|, |dq + dr|)`.
pub fn hexagonal_distance(i: BoardIndex, j: BoardIndex) -> i32 {
    let dq = j.q() - i.q();
    let dr = j.r() - i.r();
    dq.abs().max(dr.abs()).max((dq + dr).abs())
}

/// Straight-line distance between two cells under the 60°-basis embedding
/// of the hex grid into the plane: `sqrt((dq + dr)² − dq·dr)`.
pub fn euclidean_distance(i: BoardIndex, j: BoardIndex) -> f64 {
    let dq = f64::from(j.q() - i.q());
    let dr = f64::from(j.r() - i.r());
    ((dq + dr).powi(2) - dq * dr).sqrt()
}

// ---------------------------------------------------------------------------
// Board layout constants
// ---------------------------------------------------------------------------

/// Side length of the square grid backing the board.
///
/// The star fits in a 17×17 bounding box; cells of the box that are not
/// part of the star are permanently invalid.
pub const GRID_SIZE: usize = 17;

/// The 121 playable cells of the star, row by row.
#[rustfmt::skip]
pub const VALID_POSITIONS: [BoardIndex; 121] = [
                                                                                                          BoardIndex(0, 12),
                                                                                       BoardIndex(1, 11), BoardIndex(1, 12),
                                                                    BoardIndex(2, 10), BoardIndex(2, 11), BoardIndex(2, 12),
                                                  BoardIndex(3, 9), BoardIndex(3, 10), BoardIndex(3, 11), BoardIndex(3, 12),
    BoardIndex(4, 4),  BoardIndex(4, 5),  BoardIndex(4, 6),  BoardIndex(4, 7),  BoardIndex(4, 8),
    BoardIndex(4, 9),  BoardIndex(4, 10), BoardIndex(4, 11), BoardIndex(4, 12), BoardIndex(4, 13),
    BoardIndex(4, 14), BoardIndex(4, 15), BoardIndex(4, 16),
    BoardIndex(5, 4),  BoardIndex(5, 5),  BoardIndex(5, 6),  BoardIndex(5, 7),  BoardIndex(5, 8),
    BoardIndex(5, 9),  BoardIndex(5, 10), BoardIndex(5, 11), BoardIndex(5, 12), BoardIndex(5, 13),
    BoardIndex(5, 14), BoardIndex(5, 15),
    BoardIndex(6, 4),  BoardIndex(6, 5),  BoardIndex(6, 6),  BoardIndex(6, 7),  BoardIndex(6, 8),
    BoardIndex(6, 9),  BoardIndex(6, 10), BoardIndex(6, 11), BoardIndex(6, 12), BoardIndex(6, 13),
    BoardIndex(6, 14),
    BoardIndex(7, 4),  BoardIndex(7, 5),  BoardIndex(7, 6),  BoardIndex(7, 7),  BoardIndex(7, 8),
    BoardIndex(7, 9),  BoardIndex(7, 10), BoardIndex(7, 11), BoardIndex(7, 12), BoardIndex(7, 13),
    BoardIndex(8, 4),  BoardIndex(8, 5),  BoardIndex(8, 6),  BoardIndex(8, 7),  BoardIndex(8, 8),
    BoardIndex(8, 9),  BoardIndex(8, 10), BoardIndex(8, 11), BoardIndex(8, 12),
    BoardIndex(9, 3),  BoardIndex(9, 4),  BoardIndex(9, 5),  BoardIndex(9, 6),  BoardIndex(9, 7),
    BoardIndex(9, 8),  BoardIndex(9, 9),  BoardIndex(9, 10), BoardIndex(9, 11), BoardIndex(9, 12),
    BoardIndex(10, 2), BoardIndex(10, 3), BoardIndex(10, 4), BoardIndex(10, 5), BoardIndex(10, 6),
    BoardIndex(10, 7), BoardIndex(10, 8), BoardIndex(10, 9), BoardIndex(10, 10), BoardIndex(10, 11),
    BoardIndex(10, 12),
    BoardIndex(11, 1), BoardIndex(11, 2), BoardIndex(11, 3), BoardIndex(11, 4), BoardIndex(11, 5),
    BoardIndex(11, 6), BoardIndex(11, 7), BoardIndex(11, 8), BoardIndex(11, 9), BoardIndex(11, 10),
    BoardIndex(11, 11), BoardIndex(11, 12),
    BoardIndex(12, 0), BoardIndex(12, 1), BoardIndex(12, 2), BoardIndex(12, 3), BoardIndex(12, 4),
    BoardIndex(12, 5), BoardIndex(12, 6), BoardIndex(12, 7), BoardIndex(12, 8), BoardIndex(12, 9),
    BoardIndex(12, 10), BoardIndex(12, 11), BoardIndex(12, 12),
                        BoardIndex(13, 4), BoardIndex(13, 5), BoardIndex(13, 6), BoardIndex(13, 7),
                                           BoardIndex(14, 4), BoardIndex(14, 5), BoardIndex(14, 6),
                                                              BoardIndex(15, 4), BoardIndex(15, 5),
                                                                                 BoardIndex(16, 4),
];

/// Player 1's home triangle (bottom of the star).
#[rustfmt::skip]
pub const PLAYER1_STARTING_POSITIONS: [BoardIndex; 15] = [
    BoardIndex(12, 4), BoardIndex(12, 5), BoardIndex(12, 6), BoardIndex(12, 7), BoardIndex(12, 8),
        BoardIndex(13, 4), BoardIndex(13, 5), BoardIndex(13, 6), BoardIndex(13, 7),
            BoardIndex(14, 4), BoardIndex(14, 5), BoardIndex(14, 6),
                BoardIndex(15, 4), BoardIndex(15, 5),
                    BoardIndex(16, 4),
];

/// Player 2's home triangle (top of the star).
#[rustfmt::skip]
pub const PLAYER2_STARTING_POSITIONS: [BoardIndex; 15] = [
                    BoardIndex(0, 12),
                BoardIndex(1, 11), BoardIndex(1, 12),
            BoardIndex(2, 10), BoardIndex(2, 11), BoardIndex(2, 12),
        BoardIndex(3, 9), BoardIndex(3, 10), BoardIndex(3, 11), BoardIndex(3, 12),
    BoardIndex(4, 8), BoardIndex(4, 9), BoardIndex(4, 10), BoardIndex(4, 11), BoardIndex(4, 12),
];

// =========================================================================
// Tests
// =========================================================================

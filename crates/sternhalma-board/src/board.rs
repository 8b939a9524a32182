//! The mutable board: cell occupancy and movement application.
//!
//! A [`Board`] is exclusively owned by the session that plays on it, so no
//! synchronization is needed — one task, one board. The client never
//! validates move legality itself; it trusts the movements the server
//! declares and mirrors them here.

use serde::{Deserialize, Serialize};

use crate::geometry::{
    BoardIndex, GRID_SIZE, PLAYER1_STARTING_POSITIONS,
    PLAYER2_STARTING_POSITIONS, Player, VALID_POSITIONS,
};

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// The occupancy of a single cell.
///
/// Cells inside [`VALID_POSITIONS`] are never `Invalid`; cells outside it
/// are always `Invalid`. The board constructors establish this invariant
/// and nothing in this crate breaks it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    /// Not part of the star — permanently unplayable.
    Invalid,
    /// Playable and unoccupied.
    Empty,
    /// Occupied by a piece of the given player.
    Occupied(Player),
}

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

/// A single piece relocation, `from` → `to`.
///
/// Serialized as the nested pair `[[q, r], [q, r]]`, the shape the server
/// uses in `turn` and `movement` messages.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize,
)]
pub struct Movement(pub BoardIndex, pub BoardIndex);

impl Movement {
    /// The cell the piece leaves.
    pub fn from(self) -> BoardIndex {
        self.0
    }

    /// The cell the piece arrives at.
    pub fn to(self) -> BoardIndex {
        self.1
    }
}

impl std::fmt::Display for Movement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.0, self.1)
    }
}

// ---------------------------------------------------------------------------
// Board
// ---------------------------------------------------------------------------

/// The full 17×17 bounding grid of the star-shaped board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Position; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// A board with every playable cell empty.
    pub fn empty() -> Self {
        let mut cells = [[Position::Invalid; GRID_SIZE]; GRID_SIZE];
        for cell in VALID_POSITIONS {
            let (q, r) = grid_offsets(cell);
            cells[q][r] = Position::Empty;
        }
        Self { cells }
    }

    /// A board with both players' home triangles populated (15 pieces
    /// each) and every other playable cell empty.
    pub fn two_players() -> Self {
        let mut board = Self::empty();
        for cell in PLAYER1_STARTING_POSITIONS {
            board.set(cell, Position::Occupied(Player::One));
        }
        for cell in PLAYER2_STARTING_POSITIONS {
            board.set(cell, Position::Occupied(Player::Two));
        }
        board
    }

    /// The occupancy of the cell at `idx`.
    ///
    /// # Panics
    /// Panics if `idx` lies outside the backing grid. Indices must come
    /// from server messages or [`VALID_POSITIONS`]; anything else is a
    /// programming error, not a recoverable condition.
    pub fn get(&self, idx: BoardIndex) -> Position {
        let (q, r) = grid_offsets(idx);
        self.cells[q][r]
    }

    /// Overwrites the cell at `idx`.
    ///
    /// # Panics
    /// Panics if `idx` lies outside the backing grid (see [`get`](Self::get)).
    pub fn set(&mut self, idx: BoardIndex, position: Position) {
        let (q, r) = grid_offsets(idx);
        self.cells[q][r] = position;
    }

    /// Relocates the occupant of `movement.from()` to `movement.to()` and
    /// empties the source cell.
    ///
    /// Performs no legality check — the server is trusted. Each movement
    /// must be applied exactly once, in the order the server declared it;
    /// re-applying one would overwrite the destination with `Empty`.
    pub fn apply_movement(&mut self, movement: Movement) {
        let piece = self.get(movement.from());
        self.set(movement.to(), piece);
        self.set(movement.from(), Position::Empty);
    }

    /// Number of cells currently occupied by `player`.
    pub fn count_pieces(&self, player: Player) -> usize {
        VALID_POSITIONS
            .iter()
            .filter(|&&cell| self.get(cell) == Position::Occupied(player))
            .count()
    }

    /// Deterministic multi-line rendering for debugging.
    ///
    /// One line per row, indented by the row index to reproduce the
    /// board's triangular skew. Not part of the wire protocol.
    pub fn render(&self) -> String {
        let mut out = String::new();
        for (q, row) in self.cells.iter().enumerate() {
            out.extend(std::iter::repeat_n(' ', q));
            for position in row {
                out.push_str(match position {
                    Position::Invalid => "   ",
                    Position::Empty => "⚫ ",
                    Position::Occupied(Player::One) => "🔵 ",
                    Position::Occupied(Player::Two) => "🔴 ",
                });
            }
            out.push('\n');
        }
        out
    }
}

/// Converts an axial index into offsets of the backing grid.
///
/// Panics on anything outside the 17×17 bounding box — an out-of-grid
/// index can only come from a caller bug.
fn grid_offsets(idx: BoardIndex) -> (usize, usize) {
    let range = 0..GRID_SIZE as i32;
    assert!(
        range.contains(&idx.q()) && range.contains(&idx.r()),
        "board index {idx} outside the {GRID_SIZE}x{GRID_SIZE} grid"
    );
    (idx.q() as usize, idx.r() as usize)
}

// =========================================================================
// Tests
// =========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_valid_cells_are_empty() {
        let board = Board::empty();
        for cell in VALID_POSITIONS {
            assert_eq!(board.get(cell), Position::Empty, "{cell}");
        }
    }

    #[test]
    fn test_empty_board_off_star_cells_are_invalid() {
        let board = Board::empty();
        // Corners of the bounding box are not part of the star.
        assert_eq!(board.get(BoardIndex(0, 0)), Position::Invalid);
        assert_eq!(board.get(BoardIndex(16, 16)), Position::Invalid);
        assert_eq!(board.get(BoardIndex(0, 16)), Position::Invalid);
    }

    #[test]
    fn test_two_players_board_has_15_pieces_per_side() {
        let board = Board::two_players();
        assert_eq!(board.count_pieces(Player::One), 15);
        assert_eq!(board.count_pieces(Player::Two), 15);
    }

    #[test]
    fn test_two_players_pieces_sit_in_their_own_triangle() {
        let board = Board::two_players();
        for cell in VALID_POSITIONS {
            match board.get(cell) {
                Position::Occupied(Player::One) => assert!(
                    PLAYER1_STARTING_POSITIONS.contains(&cell),
                    "stray player-1 piece at {cell}"
                ),
                Position::Occupied(Player::Two) => assert!(
                    PLAYER2_STARTING_POSITIONS.contains(&cell),
                    "stray player-2 piece at {cell}"
                ),
                _ => {}
            }
        }
    }

    #[test]
    fn test_apply_movement_relocates_the_piece() {
        let mut board = Board::two_players();
        let movement = Movement(BoardIndex(12, 4), BoardIndex(11, 4));
        assert_eq!(
            board.get(movement.from()),
            Position::Occupied(Player::One)
        );
        assert_eq!(board.get(movement.to()), Position::Empty);

        board.apply_movement(movement);

        assert_eq!(board.get(movement.from()), Position::Empty);
        assert_eq!(
            board.get(movement.to()),
            Position::Occupied(Player::One)
        );
    }

    #[test]
    fn test_apply_movement_conserves_piece_counts() {
        let mut board = Board::two_players();
        board.apply_movement(Movement(BoardIndex(4, 8), BoardIndex(5, 8)));
        assert_eq!(board.count_pieces(Player::One), 15);
        assert_eq!(board.count_pieces(Player::Two), 15);
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_get_out_of_grid_panics() {
        let board = Board::empty();
        let _ = board.get(BoardIndex(17, 0));
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn test_get_negative_index_panics() {
        let board = Board::empty();
        let _ = board.get(BoardIndex(-1, 3));
    }

    #[test]
    fn test_render_is_deterministic() {
        let board = Board::two_players();
        assert_eq!(board.render(), board.render());
    }

    #[test]
    fn test_render_indents_each_row_by_its_index() {
        let board = Board::empty();
        let rendered = board.render();
        for (q, line) in rendered.lines().enumerate() {
            let indent = line.len() - line.trim_start_matches(' ').len();
            // Row q starts with q skew spaces, then invalid-cell padding
            // (also spaces) up to the first playable cell.
            assert!(
                indent >= q,
                "row {q} should be indented at least {q} spaces"
            );
        }
    }

    #[test]
    fn test_movement_serializes_as_nested_pairs() {
        let movement = Movement(BoardIndex(0, 12), BoardIndex(1, 12));
        let json = serde_json::to_string(&movement).unwrap();
        assert_eq!(json, "[[0,12],[1,12]]");
        let back: Movement = serde_json::from_str(&json).unwrap();
        assert_eq!(back, movement);
    }
}

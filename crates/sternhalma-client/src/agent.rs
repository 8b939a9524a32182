//! The agent loop: drives a connected [`Client`] through a full game.
//!
//! The agent owns the local board mirror and a [`Strategy`]; the client
//! owns the socket. Each server message is handled in one place, so the
//! game flow reads top to bottom in [`Agent::play`].

use sternhalma_board::{Board, Movement};
use sternhalma_protocol::{
    ClientMessage, Codec, GameResult, ProtocolError, ServerMessage,
};

use crate::{Client, ClientError};

// ---------------------------------------------------------------------------
// Strategy
// ---------------------------------------------------------------------------

/// Picks one movement out of the legal set offered by the server.
///
/// Implementations return an index into `movements`; the agent
/// guarantees the slice is non-empty before calling.
pub trait Strategy: Send {
    fn select_movement(
        &mut self,
        board: &Board,
        movements: &[Movement],
    ) -> usize;
}

/// Always takes the first legal movement. Deterministic, useful for
/// tests and as a baseline opponent.
#[derive(Debug, Default)]
pub struct FirstStrategy;

impl Strategy for FirstStrategy {
    fn select_movement(&mut self, _: &Board, _: &[Movement]) -> usize {
        0
    }
}

/// Picks a legal movement uniformly at random.
#[derive(Debug, Default)]
pub struct BrownianStrategy;

impl Strategy for BrownianStrategy {
    fn select_movement(
        &mut self,
        _board: &Board,
        movements: &[Movement],
    ) -> usize {
        use rand::Rng;
        rand::rng().random_range(0..movements.len())
    }
}

// ---------------------------------------------------------------------------
// Agent
// ---------------------------------------------------------------------------

/// Plays one game over an established session.
pub struct Agent<S: Strategy> {
    board: Board,
    strategy: S,
}

impl<S: Strategy> Agent<S> {
    /// An agent with a fresh two-player board.
    pub fn new(strategy: S) -> Self {
        Self {
            board: Board::two_players(),
            strategy,
        }
    }

    /// The agent's mirror of the server's board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Runs the game loop until the server ends the game.
    ///
    /// Returns `Ok(Some(result))` when the server announces
    /// `game_finished`, and `Ok(None)` when it sends `disconnect`
    /// without a result. Transport and protocol failures abort the
    /// loop; an unexpected (but well-formed) message is logged and the
    /// loop keeps listening, since the server remains authoritative.
    pub async fn play<C: Codec>(
        &mut self,
        client: &mut Client<C>,
    ) -> Result<Option<GameResult>, ClientError> {
        loop {
            match client.receive_message().await? {
                ServerMessage::Turn { movements } => {
                    if movements.is_empty() {
                        return Err(ProtocolError::UnexpectedMessage(
                            "turn offered no movements".to_string(),
                        )
                        .into());
                    }
                    let movement_index = self
                        .strategy
                        .select_movement(&self.board, &movements);
                    tracing::info!(
                        movement = %movements[movement_index],
                        candidates = movements.len(),
                        "our turn, choosing movement"
                    );
                    client
                        .send_message(&ClientMessage::Choice {
                            movement_index,
                        })
                        .await?;
                }
                ServerMessage::Movement {
                    player,
                    movement,
                    scores,
                } => {
                    tracing::debug!(
                        %player,
                        %movement,
                        ?scores,
                        "applying movement"
                    );
                    self.board.apply_movement(movement);
                }
                ServerMessage::GameFinished { result } => {
                    tracing::info!(?result, "game finished");
                    return Ok(Some(result));
                }
                ServerMessage::Disconnect => {
                    tracing::info!("server asked us to disconnect");
                    return Ok(None);
                }
                other => {
                    tracing::error!(
                        kind = other.kind(),
                        "unexpected message during game, ignoring"
                    );
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sternhalma_board::{BoardIndex, Player, Position};

    fn sample_movements() -> Vec<Movement> {
        vec![
            Movement(BoardIndex(12, 4), BoardIndex(11, 5)),
            Movement(BoardIndex(12, 5), BoardIndex(11, 6)),
            Movement(BoardIndex(13, 4), BoardIndex(12, 4)),
        ]
    }

    #[test]
    fn test_first_strategy_always_picks_index_zero() {
        let board = Board::two_players();
        let movements = sample_movements();
        let mut strategy = FirstStrategy;
        for _ in 0..5 {
            assert_eq!(strategy.select_movement(&board, &movements), 0);
        }
    }

    #[test]
    fn test_brownian_strategy_stays_in_bounds() {
        let board = Board::two_players();
        let movements = sample_movements();
        let mut strategy = BrownianStrategy;
        for _ in 0..100 {
            let index = strategy.select_movement(&board, &movements);
            assert!(index < movements.len());
        }
    }

    #[test]
    fn test_agent_starts_with_full_starting_board() {
        let agent = Agent::new(FirstStrategy);
        assert_eq!(agent.board().count_pieces(Player::One), 15);
        assert_eq!(agent.board().count_pieces(Player::Two), 15);
    }

    #[test]
    fn test_agent_board_tracks_applied_movement() {
        let mut agent = Agent::new(FirstStrategy);
        let from = Player::One.starting_positions()[0];
        let to = BoardIndex(8, 8);
        assert_eq!(agent.board().get(to), Position::Empty);

        agent.board.apply_movement(Movement(from, to));
        assert_eq!(agent.board().get(from), Position::Empty);
        assert_eq!(agent.board().get(to), Position::Occupied(Player::One));
    }
}

//! Consistent status invariant: the status agrees with the board.

use super::Invariant;
use crate::rules::has_won;
use crate::{GameState, GameStatus, Player};

/// Invariant: The status is exactly what the board implies.
///
/// In progress means no line and a free square. A draw is a full board
/// without a line. A win means the winner, and only the winner, holds a
/// line, and the current player is frozen at the winner.
pub struct ConsistentStatusInvariant;

impl Invariant<GameState> for ConsistentStatusInvariant {
    fn holds(state: &GameState) -> bool {
        let board = state.board();
        match *state.status() {
            GameStatus::InProgress => {
                !has_won(board, Player::X)
                    && !has_won(board, Player::O)
                    && !board.is_full()
            }
            GameStatus::Draw => {
                !has_won(board, Player::X)
                    && !has_won(board, Player::O)
                    && board.is_full()
            }
            GameStatus::Won(winner) => {
                has_won(board, winner)
                    && !has_won(board, winner.opponent())
                    && state.current_player() == winner
            }
        }
    }

    fn description() -> &'static str {
        "Game status matches the board (win, draw or in progress)"
    }
}

//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::Invariant;
use crate::{GameState, Player};

/// Invariant: Players alternate turns, X first.
///
/// X has made as many moves as O, or one more. While the game runs the
/// player to move follows from those counts; once it is over the current
/// player stays frozen at whoever moved last.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Player::X);
        let o_count = state.board().count(Player::O);

        if x_count != o_count && x_count != o_count + 1 {
            return false;
        }

        let next_to_move = if x_count == o_count {
            Player::X
        } else {
            Player::O
        };

        if state.is_game_over() {
            state.current_player() == next_to_move.opponent()
        } else {
            state.current_player() == next_to_move
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

//! Wire record for [`GameState`], the shape front ends render.

use super::error::StateFormatError;
use super::invariants::{GameInvariants, InvariantSet};
use super::rules;
use super::types::{Board, GameState, GameStatus, Player, Square};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// `winner` value reported for a drawn game.
pub const DRAW: &str = "draw";

/// Game state as exchanged with a front end.
///
/// Field names and cardinality are a compatibility contract: `board` holds
/// 9 strings (`""` for empty), `winner` is `""` until the game is over.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GameStateView {
    /// Cells in row-major order: `""`, `"X"` or `"O"`.
    pub board: [String; 9],
    /// `"X"` or `"O"`.
    pub current_player: String,
    /// `""`, `"X"`, `"O"` or `"draw"`.
    pub winner: String,
    /// True once the game is won or drawn.
    pub game_over: bool,
}

impl From<GameState> for GameStateView {
    fn from(state: GameState) -> Self {
        let winner = match state.status() {
            GameStatus::InProgress => String::new(),
            GameStatus::Won(player) => player.as_mark().to_string(),
            GameStatus::Draw => DRAW.to_string(),
        };
        Self {
            board: state.board().squares().map(|sq| sq.as_mark().to_string()),
            current_player: state.current_player().as_mark().to_string(),
            winner,
            game_over: state.is_game_over(),
        }
    }
}

impl TryFrom<GameStateView> for GameState {
    type Error = StateFormatError;

    #[instrument(skip(view), fields(winner = %view.winner, game_over = view.game_over))]
    fn try_from(view: GameStateView) -> Result<Self, Self::Error> {
        let mut squares = [Square::Empty; 9];
        for (i, mark) in view.board.iter().enumerate() {
            squares[i] = Square::from_mark(mark).ok_or_else(|| {
                StateFormatError::new(format!("cell {i} holds unknown mark {mark:?}"))
            })?;
        }
        let board = Board::from_squares(squares);

        let current_player = Player::from_mark(&view.current_player).ok_or_else(|| {
            StateFormatError::new(format!(
                "unknown current player {:?}",
                view.current_player
            ))
        })?;

        let status = match (view.winner.as_str(), view.game_over) {
            ("", false) => GameStatus::InProgress,
            (DRAW, true) => GameStatus::Draw,
            (mark, true) => Player::from_mark(mark)
                .map(GameStatus::Won)
                .ok_or_else(|| StateFormatError::new(format!("unknown winner {mark:?}")))?,
            (winner, over) => {
                warn!("winner and gameOver disagree");
                return Err(StateFormatError::new(format!(
                    "winner {winner:?} inconsistent with gameOver={over}"
                )));
            }
        };

        let claimed = match status {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        };
        let line_owner = rules::check_winner(&board);
        if line_owner != claimed {
            warn!(?line_owner, "claimed winner does not match the board");
            return Err(StateFormatError::new(format!(
                "winner {:?} does not match board, which has a line for {}",
                view.winner,
                line_owner.map_or("nobody", Player::as_mark)
            )));
        }

        let state = GameState::from_parts(board, current_player, status);
        GameInvariants::check_all(&state).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            StateFormatError::new(format!("state violates invariants: {descriptions}"))
        })?;
        Ok(state)
    }
}

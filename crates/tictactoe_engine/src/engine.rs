//! Game engine for tic-tac-toe.

use super::contracts::LegalMove;
#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};
use super::error::MoveError;
use super::rules;
use super::types::{GameState, GameStatus};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Owns exactly one live [`GameState`]. Mutating operations take
/// `&mut self`, so calls are serialized by whoever owns the engine.
#[derive(Debug, Clone, Default)]
pub struct GameEngine {
    state: GameState,
}

impl GameEngine {
    /// Creates an engine holding a fresh game.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> GameState {
        self.state = GameState::new();
        info!("New game started");
        self.state
    }

    /// Starts over from the opening position. Identical to [`Self::new_game`].
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> GameState {
        self.new_game()
    }

    /// Returns the current game state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// Validation runs before anything changes: game over, then index
    /// range, then occupancy. A rejected move leaves the state untouched.
    ///
    /// # Errors
    ///
    /// Returns [`MoveError::GameOver`], [`MoveError::InvalidIndex`] or
    /// [`MoveError::CellOccupied`].
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn make_move(&mut self, index: i64) -> Result<GameState, MoveError> {
        let pos = LegalMove::check(&self.state, index).inspect_err(|e| {
            warn!(error = %e, kind = e.kind(), "Move rejected");
        })?;

        let mover = self.state.current_player();
        let mut next = self.state;
        next.place(pos, mover);

        // Win before draw: a full board with a line is a win.
        if rules::has_won(next.board(), mover) {
            next.set_status(GameStatus::Won(mover));
            info!(winner = %mover, "Game won");
        } else if rules::is_draw(next.board(), mover) {
            next.set_status(GameStatus::Draw);
            info!("Game drawn");
        } else {
            next.set_current_player(mover.opponent());
        }

        #[cfg(debug_assertions)]
        if let Err(violations) = MoveContract::post(&self.state, &next) {
            panic!("move postcondition violated: {violations:?}");
        }

        debug!(position = %pos, next = %next.current_player(), "Move applied");
        self.state = next;
        Ok(self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position, Square};

    #[test]
    fn test_first_move_places_x_and_passes_turn() {
        let mut engine = GameEngine::new();
        let state = engine.make_move(0).expect("legal move");
        assert_eq!(state.board().get(Position::TopLeft), Square::Occupied(Player::X));
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(engine.state(), state);
    }

    #[test]
    fn test_rejected_move_keeps_state() {
        let mut engine = GameEngine::new();
        engine.make_move(4).expect("legal move");
        let before = engine.state();

        assert_eq!(engine.make_move(4), Err(MoveError::CellOccupied(Position::Center)));
        assert_eq!(engine.make_move(9), Err(MoveError::InvalidIndex(9)));
        assert_eq!(engine.state(), before);
    }

    #[test]
    fn test_winner_freezes_current_player() {
        let mut engine = GameEngine::new();
        for index in [3, 0, 4, 1, 8] {
            engine.make_move(index).expect("legal move");
        }
        let state = engine.make_move(2).expect("winning move");
        assert_eq!(state.winner(), Some(Player::O));
        assert_eq!(state.current_player(), Player::O);
        assert_eq!(engine.make_move(5), Err(MoveError::GameOver));
    }

    /// Forces the mover for each step, so the final board matches a fixed
    /// X/O pattern regardless of turn order.
    #[test]
    fn test_forced_sequence_ends_in_draw() {
        use Player::{O, X};
        let mut engine = GameEngine::new();
        let moves = [
            (X, 0),
            (O, 1),
            (X, 2),
            (X, 3),
            (O, 4),
            (X, 5),
            (O, 6),
            (X, 7),
            (O, 8),
        ];
        let mut last = engine.state();
        for (player, index) in moves {
            engine.state.set_current_player(player);
            last = engine.make_move(index).expect("legal move");
        }
        assert!(last.is_game_over());
        assert_eq!(*last.status(), GameStatus::Draw);
        assert!(last.board().is_full());
    }

    #[test]
    fn test_reset_discards_finished_game() {
        let mut engine = GameEngine::new();
        for index in [0, 3, 1, 4, 2] {
            engine.make_move(index).expect("legal move");
        }
        assert!(engine.state().is_game_over());

        let state = engine.reset_game();
        assert_eq!(state, GameState::new());
        assert_eq!(engine.state(), GameState::new());
    }
}

//! Backend facade called by a desktop UI shell.

use crate::command::{Request, Response};
use derive_more::{Display, Error};
use tictactoe_engine::{GameEngine, GameState, MoveError};
use tracing::{debug, info, instrument};

/// The backend a UI shell binds to.
///
/// Holds one [`GameEngine`], created at startup and threaded explicitly
/// through the caller. Every operation returns the full state for the
/// shell to render.
#[derive(Debug, Clone, Default)]
pub struct App {
    engine: GameEngine,
}

impl App {
    /// Starts the backend with a fresh game.
    #[instrument]
    pub fn new() -> Self {
        let engine = GameEngine::new();
        info!("Backend started");
        Self { engine }
    }

    /// Discards the current game and starts a new one.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) -> GameState {
        self.engine.new_game()
    }

    /// State to render when the shell first draws.
    ///
    /// Returns the live state, which equals the startup state until the
    /// first move.
    #[instrument(skip(self))]
    pub fn get_initial_state(&self) -> GameState {
        self.engine.state()
    }

    /// Places the current player's mark at `index`.
    ///
    /// # Errors
    ///
    /// Returns the engine's [`MoveError`]; the state is unchanged.
    #[instrument(skip(self))]
    pub fn make_move(&mut self, index: i64) -> Result<GameState, MoveError> {
        self.engine.make_move(index)
    }

    /// Starts over. Same as [`Self::new_game`].
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) -> GameState {
        self.engine.reset_game()
    }

    /// Runs one request and wraps the outcome for the shell.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, request: Request) -> Response {
        debug!(?request, "Dispatching request");
        match request {
            Request::NewGame => self.new_game().into(),
            Request::GetInitialState => self.get_initial_state().into(),
            Request::MakeMove { index } => self.make_move(index).into(),
            Request::ResetGame => self.reset_game().into(),
        }
    }

    /// Applies `indices` in order, stopping at the first rejected move.
    ///
    /// # Errors
    ///
    /// Returns a [`SequenceError`] naming the rejected step; moves before it
    /// stay applied.
    #[instrument(skip(self))]
    pub fn play_sequence(&mut self, indices: &[i64]) -> Result<GameState, SequenceError> {
        let mut state = self.engine.state();
        for (step, &index) in indices.iter().enumerate() {
            state = self
                .make_move(index)
                .map_err(|source| SequenceError::new(step + 1, index, source))?;
        }
        Ok(state)
    }
}

/// A move in a scripted sequence was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("move {step} (index {index}) rejected: {source}")]
pub struct SequenceError {
    /// One-based position of the rejected move in the sequence.
    pub step: usize,
    /// The rejected index.
    pub index: i64,
    /// Why the engine rejected it.
    pub source: MoveError,
}

impl SequenceError {
    /// Creates a new sequence error.
    pub fn new(step: usize, index: i64, source: MoveError) -> Self {
        Self {
            step,
            index,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tictactoe_engine::Player;

    #[test]
    fn test_startup_state_is_opening_position() {
        let app = App::new();
        assert_eq!(app.get_initial_state(), GameState::new());
    }

    #[test]
    fn test_initial_state_tracks_live_game() {
        let mut app = App::new();
        let state = app.make_move(4).expect("legal move");
        assert_eq!(app.get_initial_state(), state);
        assert_eq!(app.get_initial_state().current_player(), Player::O);
    }

    #[test]
    fn test_play_sequence_reports_step() {
        let mut app = App::new();
        let err = app.play_sequence(&[0, 1, 0]).unwrap_err();
        assert_eq!(err.step, 3);
        assert_eq!(err.index, 0);
        assert_eq!(err.source.kind(), "CellOccupiedError");
        assert_eq!(
            err.to_string(),
            "move 3 (index 0) rejected: cell 0 (Top-left) already occupied"
        );
        // The two accepted moves stay on the board.
        assert_eq!(app.get_initial_state().board().count(Player::X), 1);
        assert_eq!(app.get_initial_state().board().count(Player::O), 1);
    }
}

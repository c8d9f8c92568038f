//! Error types for the rules engine.

use super::Position;
use derive_more::{Display, Error};
use tracing::instrument;

/// A rejected move.
///
/// Variants are checked in declaration order: a finished game rejects every
/// move before the index is even looked at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, strum::IntoStaticStr)]
pub enum MoveError {
    /// The game is already over.
    #[display("game is over")]
    #[strum(serialize = "GameOverError")]
    GameOver,

    /// The index does not name a cell (valid cells are 0-8).
    #[display("invalid move index {_0}: must be between 0 and 8")]
    #[strum(serialize = "InvalidIndexError")]
    InvalidIndex(i64),

    /// The cell already holds a mark.
    #[display("cell {_0} already occupied")]
    #[strum(serialize = "CellOccupiedError")]
    CellOccupied(Position),
}

impl MoveError {
    /// Stable name of the error kind, as reported to front ends.
    pub fn kind(&self) -> &'static str {
        self.into()
    }
}

impl std::error::Error for MoveError {}

/// A serialized game state that does not describe a reachable game.
#[derive(Debug, Clone, Display, Error)]
#[display("State format error: {} at {}:{}", message, file, line)]
pub struct StateFormatError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl StateFormatError {
    /// Creates a new state format error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

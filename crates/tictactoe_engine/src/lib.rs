//! Tic-tac-toe rules engine.
//!
//! Pure game logic with no I/O: board state, move validation, turn
//! alternation, win and draw detection, and reset.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{GameEngine, MoveError, Player, Position};
//!
//! let mut engine = GameEngine::new();
//! let state = engine.make_move(4).unwrap();
//! assert_eq!(state.current_player(), Player::O);
//! assert_eq!(engine.make_move(4), Err(MoveError::CellOccupied(Position::Center)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod contracts;
mod engine;
mod error;
mod position;
mod types;
mod view;

pub mod invariants;
pub mod rules;

pub use contracts::{CellIsEmpty, Contract, GameNotOver, IndexInRange, LegalMove, MoveContract};
pub use engine::GameEngine;
pub use error::{MoveError, StateFormatError};
pub use invariants::{GameInvariants, Invariant, InvariantSet, InvariantViolation};
pub use position::Position;
pub use types::{Board, GameState, GameStatus, Player, Square};
pub use view::{DRAW, GameStateView};

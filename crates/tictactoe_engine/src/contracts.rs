//! Contract-based validation for tic-tac-toe moves.
//!
//! Contracts define correctness through preconditions and postconditions:
//! {P(state, index)} make_move {Q(before, after)}.

use super::error::MoveError;
use super::invariants::{ConsistentStatusInvariant, Invariant, InvariantViolation};
use super::{GameState, Position, Square};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: The game must still be in progress.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects any move once the game is won or drawn.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        if state.is_game_over() {
            Err(MoveError::GameOver)
        } else {
            Ok(())
        }
    }
}

/// Precondition: The index must name one of the 9 cells.
pub struct IndexInRange;

impl IndexInRange {
    /// Resolves the index to a position.
    #[instrument]
    pub fn check(index: i64) -> Result<Position, MoveError> {
        Position::from_signed(index).ok_or(MoveError::InvalidIndex(index))
    }
}

/// Precondition: The target cell must be empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects a move onto an occupied cell.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, pos: Position) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition, checked in a fixed order:
/// game over, then index range, then occupancy.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and resolves the index to a position.
    #[instrument(skip(state))]
    pub fn check(state: &GameState, index: i64) -> Result<Position, MoveError> {
        GameNotOver::check(state)?;
        let pos = IndexInRange::check(index)?;
        CellIsEmpty::check(state, pos)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for a move at a cell index.
///
/// Postconditions:
/// - exactly one previously empty cell now holds the mover's mark,
///   and no other cell changed
/// - the turn passed to the opponent, or stayed with the mover if the game ended
/// - the status agrees with the board
pub struct MoveContract;

impl Contract<GameState, i64> for MoveContract {
    fn pre(state: &GameState, index: &i64) -> Result<(), MoveError> {
        LegalMove::check(state, *index).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        let mover = before.current_player();

        let mut placed = 0;
        for pos in Position::ALL {
            let old = before.board().get(pos);
            let new = after.board().get(pos);
            if old == new {
                continue;
            }
            if old == Square::Empty && new == Square::Occupied(mover) {
                placed += 1;
            } else {
                violations.push(InvariantViolation::new(format!(
                    "Cell {pos} changed from {old:?} to {new:?}"
                )));
            }
        }
        if placed != 1 {
            violations.push(InvariantViolation::new(format!(
                "Expected exactly one new mark, found {placed}"
            )));
        }

        let expected_turn = if after.is_game_over() {
            mover
        } else {
            mover.opponent()
        };
        if after.current_player() != expected_turn {
            violations.push(InvariantViolation::new(format!(
                "Expected {expected_turn} to be current player, found {}",
                after.current_player()
            )));
        }

        if !ConsistentStatusInvariant::holds(after) {
            violations.push(InvariantViolation::new(
                ConsistentStatusInvariant::description(),
            ));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            warn!(count = violations.len(), "Move postcondition violated");
            Err(violations)
        }
    }
}

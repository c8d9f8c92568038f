//! Draw detection logic for tic-tac-toe.

use super::win::has_won;
use crate::{Board, Player};
use tracing::instrument;

/// Checks if the board is full (all squares occupied).
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

/// A draw is a full board on which the last mover did not complete a line.
///
/// The win check must come first: a full board with a line is a win.
#[instrument(skip(board))]
pub fn is_draw(board: &Board, last_mover: Player) -> bool {
    !has_won(board, last_mover) && is_full(board)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Position, Square};

    fn fill(board: &mut Board, marks: [Player; 9]) {
        for (pos, player) in Position::ALL.into_iter().zip(marks) {
            board.set(pos, Square::Occupied(player));
        }
    }

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_draw() {
        let mut board = Board::new();
        board.set(Position::Center, Square::Occupied(Player::X));
        assert!(!is_draw(&board, Player::X));
    }

    #[test]
    fn test_draw_detection() {
        use Player::{O, X};
        let mut board = Board::new();
        // X O X / X O X / O X O
        fill(&mut board, [X, O, X, X, O, X, O, X, O]);
        assert!(is_draw(&board, O));
    }

    #[test]
    fn test_full_board_with_line_is_not_draw() {
        use Player::{O, X};
        let mut board = Board::new();
        // X X X / O O X / X O O
        fill(&mut board, [X, X, X, O, O, X, X, O, O]);
        assert!(is_full(&board));
        assert!(!is_draw(&board, X));
    }
}

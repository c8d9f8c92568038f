//! Core domain types for tic-tac-toe.

use super::position::Position;
use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Parses the wire form of a player mark (`"X"` or `"O"`).
    pub fn from_mark(mark: &str) -> Option<Self> {
        match mark {
            "X" => Some(Player::X),
            "O" => Some(Player::O),
            _ => None,
        }
    }

    /// Wire form of the player mark.
    pub fn as_mark(self) -> &'static str {
        match self {
            Player::X => "X",
            Player::O => "O",
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Wire form of the square: `""`, `"X"` or `"O"`.
    pub fn as_mark(self) -> &'static str {
        match self {
            Square::Empty => "",
            Square::Occupied(player) => player.as_mark(),
        }
    }

    /// Parses the wire form of a square.
    pub fn from_mark(mark: &str) -> Option<Self> {
        if mark.is_empty() {
            return Some(Square::Empty);
        }
        Player::from_mark(mark).map(Square::Occupied)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from squares in row-major order.
    pub(crate) fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Sets the square at the given position.
    pub(crate) fn set(&mut self, pos: Position, square: Square) {
        self.squares[pos.to_index()] = square;
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of squares holding the player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// With `hints`, empty squares show their index so a player knows what to type.
    pub fn display(&self, hints: bool) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty if hints => pos.to_string(),
                    Square::Empty => " ".to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

/// Complete game state.
///
/// Serializes to the record the front end renders:
/// `{ board, currentPlayer, winner, gameOver }`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "crate::GameStateView", try_from = "crate::GameStateView")]
pub struct GameState {
    /// The board.
    board: Board,
    /// Player to move, or the last mover once the game is over.
    current_player: Player,
    /// Game status.
    status: GameStatus,
}

impl GameState {
    /// Creates the opening state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
        }
    }

    pub(crate) fn from_parts(board: Board, current_player: Player, status: GameStatus) -> Self {
        Self {
            board,
            current_player,
            status,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Returns the winner, if the game was won.
    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            GameStatus::InProgress | GameStatus::Draw => None,
        }
    }

    /// True once the game is won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Empty positions, or none once the game is over.
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.is_game_over() {
            return Vec::new();
        }
        Position::valid_moves(&self.board)
    }

    pub(crate) fn place(&mut self, pos: Position, player: Player) {
        self.board.set(pos, Square::Occupied(player));
    }

    pub(crate) fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent_flips() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
    }

    #[test]
    fn test_square_marks() {
        assert_eq!(Square::Empty.as_mark(), "");
        assert_eq!(Square::Occupied(Player::O).as_mark(), "O");
        assert_eq!(Square::from_mark("X"), Some(Square::Occupied(Player::X)));
        assert_eq!(Square::from_mark(""), Some(Square::Empty));
        assert_eq!(Square::from_mark("x"), None);
        assert_eq!(Square::from_mark("draw"), None);
    }

    #[test]
    fn test_board_display_with_hints() {
        let mut board = Board::new();
        board.set(Position::TopLeft, Square::Occupied(Player::X));
        board.set(Position::Center, Square::Occupied(Player::O));
        assert_eq!(board.display(true), "X|1|2\n-+-+-\n3|O|5\n-+-+-\n6|7|8");
    }

    #[test]
    fn test_board_display_without_hints() {
        let mut board = Board::new();
        board.set(Position::BottomRight, Square::Occupied(Player::X));
        assert_eq!(board.display(false), " | | \n-+-+-\n | | \n-+-+-\n | |X");
    }

    #[test]
    fn test_count_and_full() {
        let mut board = Board::new();
        assert!(!board.is_full());
        for (i, pos) in Position::ALL.into_iter().enumerate() {
            let player = if i % 2 == 0 { Player::X } else { Player::O };
            board.set(pos, Square::Occupied(player));
        }
        assert!(board.is_full());
        assert_eq!(board.count(Player::X), 5);
        assert_eq!(board.count(Player::O), 4);
    }

    #[test]
    fn test_new_state() {
        let state = GameState::new();
        assert_eq!(state.current_player(), Player::X);
        assert_eq!(state.status(), &GameStatus::InProgress);
        assert_eq!(state.winner(), None);
        assert!(!state.is_game_over());
        assert_eq!(state.valid_moves().len(), 9);
    }

    #[test]
    fn test_finished_state_has_no_valid_moves() {
        let mut state = GameState::new();
        state.set_status(GameStatus::Draw);
        assert!(state.valid_moves().is_empty());
    }
}

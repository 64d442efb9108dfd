//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, in evaluation order: rows, columns, diagonals.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A decided board: who won and along which line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Winner {
    /// The player holding the line.
    pub player: Player,
    /// The three winning squares.
    pub line: [Position; 3],
}

impl Winner {
    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Checks if there is a winner on the board.
///
/// Returns the first line (in [`WINNING_LINES`] order) held entirely by one
/// player, or `None`.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Winner> {
    WINNING_LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => Some(Winner {
                player,
                line: [a, b, c],
            }),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_picture("XXX OO. ...");
        let winner = check_winner(&board).expect("top row");
        assert_eq!(winner.player, Player::X);
        assert_eq!(
            winner.line,
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board = Board::from_picture("XXO XO. O..");
        let winner = check_winner(&board).expect("anti-diagonal");
        assert_eq!(winner.player, Player::O);
        assert_eq!(
            winner.line,
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );
    }

    #[test]
    fn test_first_line_in_order_wins() {
        // Top row and left column both belong to X; rows are checked first.
        let board = Board::from_picture("XXX XOO XOO");
        let winner = check_winner(&board).expect("winner");
        assert_eq!(winner.line, WINNING_LINES[0]);
        assert!(winner.contains(Position::TopRight));
        assert!(!winner.contains(Position::MiddleLeft));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_picture("XX. O.. ...");
        assert_eq!(check_winner(&board), None);
    }
}

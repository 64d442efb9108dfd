//! Move application for tic-tac-toe.
//!
//! A move is checked against the board it targets and, when legal, yields a
//! fresh board. The input board is never modified.

use super::rules::check_winner;
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Creates a new move.
    pub fn new(player: Player, position: Position) -> Self {
        Self { player, position }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.position.coordinate())
    }
}

/// Why a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The board already has a winner.
    #[display("Game is already over")]
    GameOver,

    /// It's not this player's turn.
    #[display("It's not {}'s turn", _0)]
    WrongPlayer(#[error(not(source))] Player),

    /// A raw index outside 0-8.
    #[display("Position {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(#[error(not(source))] usize),
}

/// Result of a legal move: the new board and where the mark went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    /// Board after the move.
    pub board: Board,
    /// The square just played.
    pub location: Position,
}

/// Precondition: the target square must be empty.
pub struct SquareIsEmpty;

impl SquareIsEmpty {
    /// Checks the precondition.
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        if board.is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::SquareOccupied(pos))
        }
    }
}

/// Precondition: nobody has won yet.
pub struct NoWinnerYet;

impl NoWinnerYet {
    /// Checks the precondition.
    pub fn check(board: &Board) -> Result<(), MoveError> {
        match check_winner(board) {
            Some(_) => Err(MoveError::GameOver),
            None => Ok(()),
        }
    }
}

/// Composite precondition: a move is legal if the game is undecided and the
/// square is empty.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions for a move.
    pub fn check(board: &Board, pos: Position) -> Result<(), MoveError> {
        NoWinnerYet::check(board)?;
        SquareIsEmpty::check(board, pos)?;
        Ok(())
    }
}

/// Applies `player`'s mark at `pos` to a copy of `board`.
///
/// # Errors
///
/// [`MoveError::GameOver`] if the board is already won,
/// [`MoveError::SquareOccupied`] if the target is taken.
#[instrument(skip(board), fields(position = ?pos, player = %player))]
pub fn apply_move(board: &Board, pos: Position, player: Player) -> Result<Placement, MoveError> {
    LegalMove::check(board, pos)?;
    Ok(Placement {
        board: board.with_mark(pos, player),
        location: pos,
    })
}

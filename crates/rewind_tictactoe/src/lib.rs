//! Tic-tac-toe with move history and time travel.
//!
//! The crate holds only game logic; front ends drive it through three inputs
//! on [`Game`]:
//!
//! - [`Game::click`] places the next player's mark on the displayed board,
//!   discarding any history after the displayed step.
//! - [`Game::jump_to`] displays an earlier (or later) step.
//! - [`Game::toggle_order`] flips the move list between ascending and
//!   descending.
//!
//! Everything to draw is derived on demand: [`Game::board`],
//! [`Game::winning_squares`], [`Game::moves`] and [`Game::status`].
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::{Game, Position};
//!
//! let mut game = Game::new();
//! game.click(Position::Center);
//! assert_eq!(game.status().to_string(), "Next player: O");
//!
//! game.jump_to(0).unwrap();
//! assert_eq!(game.status().to_string(), "Next player: X");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod cursor;
mod game;
mod history;
pub mod invariants;
mod order;
mod position;
pub mod rules;
mod types;

pub use action::{LegalMove, Move, MoveError, NoWinnerYet, Placement, SquareIsEmpty, apply_move};
pub use cursor::StepCursor;
pub use game::{ClickOutcome, Game, GameError, GameStatus, MoveEntry, describe_step};
pub use history::{History, HistoryError, Snapshot};
pub use order::MoveOrder;
pub use position::Position;
pub use rules::{Winner, check_winner, is_draw, is_full};
pub use types::{Board, Player, Square};

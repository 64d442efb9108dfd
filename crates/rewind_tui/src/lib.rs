//! Terminal front end for rewind tic-tac-toe.
//!
//! Translates key presses into the three game inputs (play a square, jump to
//! a step, toggle the move-list order) and renders the game with `ratatui`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod settings;
pub mod ui;

pub use app::{App, Focus};
pub use cli::Cli;
pub use input::{digit_index, move_cursor, move_selection};
pub use settings::{ConfigError, Settings};

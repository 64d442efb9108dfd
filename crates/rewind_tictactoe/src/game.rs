//! Game orchestration: history, cursor and sort order behind three inputs.
//!
//! [`Game`] reacts to cell clicks, history jumps and order toggles, and
//! derives everything a front end needs to draw (board, winning squares,
//! move list, status) fresh on every read.

use super::action::{MoveError, apply_move};
use super::cursor::StepCursor;
use super::history::{History, HistoryError, Snapshot};
use super::invariants::assert_invariants;
use super::order::MoveOrder;
use super::rules::{Winner, check_winner, is_full};
use super::{Board, Player, Position};
use tracing::{debug, info, instrument};

/// Why a click did not produce a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error, derive_more::From)]
pub enum GameError {
    /// The move itself is illegal.
    #[display("{}", _0)]
    Move(MoveError),
    /// A step outside the history.
    #[display("{}", _0)]
    History(HistoryError),
}

/// What happened to a click.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// A mark was placed; the cursor now sits on `step`.
    Played {
        /// New tail step.
        step: usize,
        /// Square played.
        location: Position,
    },
    /// Nothing changed.
    Ignored(GameError),
}

impl ClickOutcome {
    /// True if the click placed a mark.
    pub fn is_played(&self) -> bool {
        matches!(self, ClickOutcome::Played { .. })
    }
}

/// Status line derived from the displayed board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    /// Someone holds a line.
    Won(Winner),
    /// Full board, no line.
    Draw,
    /// Game continues with this player.
    NextPlayer(Player),
}

impl std::fmt::Display for GameStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::Won(winner) => write!(f, "Winner: {}", winner.player),
            GameStatus::Draw => write!(f, "Cat's Game!"),
            GameStatus::NextPlayer(player) => write!(f, "Next player: {}", player),
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveEntry {
    /// History step this entry jumps to.
    pub step: usize,
    /// Button text.
    pub description: String,
    /// Whether this is the displayed step.
    pub is_current: bool,
}

/// Describes a history step for the move list.
pub fn describe_step(step: usize, location: Option<Position>) -> String {
    match location {
        Some(loc) if step > 0 => format!("Go to move #{} at {}", step, loc.coordinate()),
        _ => "Go to game start".to_string(),
    }
}

/// A tic-tac-toe game with time travel.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Game {
    pub(crate) history: History,
    pub(crate) cursor: StepCursor,
    pub(crate) order: MoveOrder,
}

impl Game {
    /// Fresh game, move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh game with the given move-list order.
    #[instrument]
    pub fn with_order(order: MoveOrder) -> Self {
        Self {
            order,
            ..Self::default()
        }
    }

    /// All snapshots, including any after the displayed step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// The displayed step.
    pub fn current_step(&self) -> usize {
        self.cursor.current_step()
    }

    /// Whose turn it is at the displayed step.
    pub fn next_player(&self) -> Player {
        self.cursor.next_player()
    }

    /// Current move-list order.
    pub fn order(&self) -> MoveOrder {
        self.order
    }

    /// The displayed snapshot.
    pub fn current(&self) -> &Snapshot {
        // The cursor only ever holds steps validated against this history.
        &self.history.as_slice()[self.cursor.current_step()]
    }

    /// The displayed board.
    pub fn board(&self) -> &Board {
        self.current().board()
    }

    /// Winner on the displayed board.
    pub fn winner(&self) -> Option<Winner> {
        check_winner(self.board())
    }

    /// Squares to highlight; empty unless the displayed board is won.
    pub fn winning_squares(&self) -> Vec<Position> {
        self.winner()
            .map(|winner| winner.line.to_vec())
            .unwrap_or_default()
    }

    /// Status of the displayed board.
    pub fn status(&self) -> GameStatus {
        if let Some(winner) = self.winner() {
            GameStatus::Won(winner)
        } else if is_full(self.board()) {
            GameStatus::Draw
        } else {
            GameStatus::NextPlayer(self.next_player())
        }
    }

    /// The move list in the current order. History itself is not reordered.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let current = self.cursor.current_step();
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(step, snapshot)| MoveEntry {
                step,
                description: describe_step(step, snapshot.location()),
                is_current: step == current,
            });
        self.order.arrange(entries)
    }

    /// Plays the displayed player's mark at `pos`.
    ///
    /// Illegal clicks (occupied square, decided board) change nothing and
    /// come back as [`ClickOutcome::Ignored`].
    #[instrument(skip(self), fields(step = self.cursor.current_step()))]
    pub fn click(&mut self, pos: Position) -> ClickOutcome {
        match self.try_click(pos) {
            Ok(step) => {
                debug!(step, location = %pos.coordinate(), "Move played");
                ClickOutcome::Played { step, location: pos }
            }
            Err(reason) => {
                debug!(%reason, "Ignoring click");
                ClickOutcome::Ignored(reason)
            }
        }
    }

    /// [`click`](Self::click) by raw board index; indices past 8 are ignored.
    pub fn click_index(&mut self, index: usize) -> ClickOutcome {
        match Position::from_index(index) {
            Some(pos) => self.click(pos),
            None => {
                debug!(index, "Ignoring click outside the board");
                ClickOutcome::Ignored(MoveError::OutOfBounds(index).into())
            }
        }
    }

    fn try_click(&mut self, pos: Position) -> Result<usize, GameError> {
        let step = self.cursor.current_step();
        let board = *self.history.get(step)?.board();
        let placement = apply_move(&board, pos, self.cursor.next_player())?;
        self.history
            .commit(Snapshot::after_move(placement.board, placement.location), step)?;
        self.cursor.jump_to(self.history.tail_step(), &self.history)?;
        assert_invariants(self);
        Ok(self.cursor.current_step())
    }

    /// Displays `step` without touching the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), HistoryError> {
        self.cursor.jump_to(step, &self.history)?;
        info!(step, next = %self.next_player(), "Jumped to step");
        Ok(())
    }

    /// Flips the move-list order.
    #[instrument(skip(self), fields(from = ?self.order))]
    pub fn toggle_order(&mut self) {
        self.order = self.order.toggle();
    }
}

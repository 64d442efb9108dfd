//! Which history step is on display.

use super::history::{History, HistoryError};
use super::Player;
use tracing::instrument;

/// Points at the displayed snapshot. The player to move is derived from the
/// step, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepCursor {
    pub(crate) current_step: usize,
}

impl StepCursor {
    /// Cursor at the game start.
    pub fn new() -> Self {
        Self::default()
    }

    /// The displayed step.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Whose turn it is at the displayed step.
    pub fn next_player(&self) -> Player {
        Player::for_step(self.current_step)
    }

    /// Moves the cursor to `step`, which must exist in `history`.
    #[instrument(skip(self, history), fields(from = self.current_step))]
    pub fn jump_to(&mut self, step: usize, history: &History) -> Result<(), HistoryError> {
        history.get(step)?;
        self.current_step = step;
        Ok(())
    }
}

//! Rooted history invariant: step 0 is the empty board.

use super::Invariant;
use crate::{Game, History, Snapshot};

/// Invariant: history is non-empty and starts from the empty board.
pub struct RootedHistoryInvariant;

impl Invariant<History> for RootedHistoryInvariant {
    fn holds(history: &History) -> bool {
        history.as_slice().first() == Some(&Snapshot::initial())
    }

    fn description() -> &'static str {
        "History starts with the empty board"
    }
}

impl Invariant<Game> for RootedHistoryInvariant {
    fn holds(game: &Game) -> bool {
        <Self as Invariant<History>>::holds(game.history())
    }

    fn description() -> &'static str {
        <Self as Invariant<History>>::description()
    }
}

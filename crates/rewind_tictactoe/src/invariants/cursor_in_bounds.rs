//! The displayed step exists.

use super::Invariant;
use crate::Game;

/// Invariant: the cursor addresses an existing snapshot.
pub struct CursorInBoundsInvariant;

impl Invariant<Game> for CursorInBoundsInvariant {
    fn holds(game: &Game) -> bool {
        game.cursor.current_step() < game.history().len()
    }

    fn description() -> &'static str {
        "Cursor points inside the history"
    }
}

//! Application state and key handling.

use crate::input::{digit_index, move_cursor, move_selection};
use crossterm::event::KeyCode;
use rewind_tictactoe::{ClickOutcome, Game, MoveEntry, Position};
use tracing::{debug, info, instrument, warn};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

impl Focus {
    /// The other pane.
    pub fn toggle(self) -> Self {
        match self {
            Focus::Board => Focus::Moves,
            Focus::Moves => Focus::Board,
        }
    }
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    should_quit: bool,
}

impl App {
    /// Creates a new application around `game`.
    pub fn new(game: Game) -> Self {
        let selected_step = game.current_step();
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::default(),
            selected_step,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Focused pane.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Move list as displayed, with the index of the selected entry.
    pub fn move_list(&self) -> (Vec<MoveEntry>, usize) {
        let moves = self.game.moves();
        let selected = moves
            .iter()
            .position(|entry| entry.step == self.selected_step)
            .unwrap_or(0);
        (moves, selected)
    }

    /// Handles one key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) {
        if let KeyCode::Char(c) = key
            && let Some(index) = digit_index(c)
        {
            let outcome = self.game.click_index(index);
            self.after_click(outcome);
            return;
        }

        match key {
            KeyCode::Char('q') | KeyCode::Esc => {
                info!("User quit");
                self.should_quit = true;
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.focus = self.focus.toggle();
                self.selected_step = self.game.current_step();
            }
            KeyCode::Char('s') => self.game.toggle_order(),
            KeyCode::Enter | KeyCode::Char(' ') => match self.focus {
                Focus::Board => {
                    let outcome = self.game.click(self.cursor);
                    self.after_click(outcome);
                }
                Focus::Moves => self.jump_to_selected(),
            },
            _ => match self.focus {
                Focus::Board => self.cursor = move_cursor(self.cursor, key),
                Focus::Moves => {
                    let (moves, selected) = self.move_list();
                    let next = move_selection(selected, moves.len(), key);
                    if let Some(entry) = moves.get(next) {
                        self.selected_step = entry.step;
                    }
                }
            },
        }
    }

    fn after_click(&mut self, outcome: ClickOutcome) {
        if let ClickOutcome::Played { step, location } = outcome {
            debug!(step, %location, "Move applied to UI state");
            self.cursor = location;
            self.selected_step = step;
        }
    }

    fn jump_to_selected(&mut self) {
        if let Err(err) = self.game.jump_to(self.selected_step) {
            warn!(%err, "Jump rejected");
            self.selected_step = self.game.current_step();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(app: &mut App, keys: &[KeyCode]) {
        for key in keys {
            app.handle_key(*key);
        }
    }

    #[test]
    fn test_enter_plays_under_cursor() {
        let mut app = App::new(Game::new());
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(app.game().current().location(), Some(Position::TopLeft));
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_occupied_cell_is_silently_ignored() {
        let mut app = App::new(Game::new());
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().history().len(), 2);
        assert!(!app.should_quit());
    }

    #[test]
    fn test_list_navigation_jumps() {
        let mut app = App::new(Game::new());
        press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('5'), KeyCode::Char('9')],
        );
        press(&mut app, &[KeyCode::Tab, KeyCode::Up, KeyCode::Up, KeyCode::Enter]);
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.game().current_step(), 1);
        assert_eq!(app.game().history().len(), 4);
    }

    #[test]
    fn test_list_navigation_follows_descending_order() {
        let mut app = App::new(Game::new());
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('5')]);
        press(&mut app, &[KeyCode::Char('s'), KeyCode::Tab, KeyCode::Down, KeyCode::Enter]);
        // Descending: [2, 1, 0]; one step down from 2 is 1.
        assert_eq!(app.game().current_step(), 1);
        let (_, selected) = app.move_list();
        assert_eq!(selected, 1);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::new(Game::new());
        app.handle_key(KeyCode::Esc);
        assert!(app.should_quit());
    }
}

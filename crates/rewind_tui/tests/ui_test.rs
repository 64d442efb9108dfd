//! Rendering tests against ratatui's test backend.

use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};
use rewind_tictactoe::{Game, MoveOrder};
use rewind_tui::{App, ui};

fn render(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 30)).expect("test terminal");
    terminal.draw(|frame| ui::draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content()
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn press(app: &mut App, keys: &[KeyCode]) {
    for key in keys {
        app.handle_key(*key);
    }
}

#[test]
fn test_initial_screen() {
    let screen = render(&App::new(Game::new()));
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Sort by: Ascending"));
    assert!(screen.contains("Go to game start"));
}

#[test]
fn test_move_list_and_status_after_moves() {
    let mut app = App::new(Game::new());
    press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);
    let screen = render(&app);
    assert!(screen.contains("Next player: X"));
    assert!(screen.contains("Go to move #1 at [1,1]"));
    assert!(screen.contains("Go to move #2 at [0,0]"));
}

#[test]
fn test_descending_order_lists_newest_first() {
    let mut app = App::new(Game::with_order(MoveOrder::Descending));
    press(&mut app, &[KeyCode::Char('5')]);
    let screen = render(&app);
    assert!(screen.contains("Sort by: Descending"));
    let newest = screen.find("Go to move #1").expect("move listed");
    let start = screen.find("Go to game start").expect("start listed");
    assert!(newest < start);
}

#[test]
fn test_rows_numbered_by_display_position() {
    let mut app = App::new(Game::new());
    press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1'), KeyCode::Char('s')]);
    let screen = render(&app);
    assert!(screen.contains("1. Go to move #2 at [0,0]"));
    assert!(screen.contains("2. Go to move #1 at [1,1]"));
    assert!(screen.contains("3. Go to game start"));
}

#[test]
fn test_winner_status() {
    let mut app = App::new(Game::new());
    press(
        &mut app,
        &[
            KeyCode::Char('1'),
            KeyCode::Char('2'),
            KeyCode::Char('5'),
            KeyCode::Char('3'),
            KeyCode::Char('9'),
        ],
    );
    assert!(render(&app).contains("Winner: X"));
}

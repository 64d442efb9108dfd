//! End-to-end scenarios driven through the public game API.

use rewind_tictactoe::{
    ClickOutcome, Game, GameError, GameStatus, MoveError, MoveOrder, Player, Position, Square,
};

fn play(game: &mut Game, indices: &[usize]) {
    for &idx in indices {
        assert!(game.click_index(idx).is_played(), "move {idx} should be legal");
    }
}

#[test]
fn test_center_opening() {
    let mut game = Game::new();
    play(&mut game, &[4]);

    assert_eq!(game.board().get(Position::Center), Square::Occupied(Player::X));
    assert_eq!(game.next_player(), Player::O);
    assert_eq!(game.status().to_string(), "Next player: O");
}

#[test]
fn test_x_wins_on_main_diagonal() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 4, 2, 8]);

    match game.status() {
        GameStatus::Won(winner) => {
            assert_eq!(winner.player, Player::X);
            assert_eq!(
                winner.line.map(Position::to_index),
                [0, 4, 8]
            );
        }
        other => panic!("expected a win, got {other:?}"),
    }
    assert_eq!(game.status().to_string(), "Winner: X");

    assert_eq!(
        game.click_index(6),
        ClickOutcome::Ignored(GameError::Move(MoveError::GameOver))
    );
    assert_eq!(game.history().len(), 6);
}

#[test]
fn test_full_board_without_line_is_cats_game() {
    let mut game = Game::new();
    play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
    assert_eq!(game.status().to_string(), "Cat's Game!");
}

#[test]
fn test_time_travel_branch_replaces_future() {
    let mut game = Game::new();
    play(&mut game, &[0, 4, 8]);
    game.jump_to(1).expect("step 1 exists");
    play(&mut game, &[2]);

    assert_eq!(game.history().len(), 3);
    assert_eq!(game.current_step(), 2);
    let locations: Vec<Option<Position>> =
        game.history().iter().map(|s| s.location()).collect();
    assert_eq!(
        locations,
        vec![None, Some(Position::TopLeft), Some(Position::TopRight)]
    );
    assert_eq!(game.board().get(Position::BottomRight), Square::Empty);
}

#[test]
fn test_jump_to_future_step_keeps_branch() {
    let mut game = Game::new();
    play(&mut game, &[0, 4, 8]);
    game.jump_to(0).expect("start exists");
    game.jump_to(3).expect("tail exists");
    assert_eq!(game.history().len(), 4);
    assert_eq!(game.next_player(), Player::O);
}

#[test]
fn test_move_list_follows_toggle() {
    let mut game = Game::new();
    play(&mut game, &[4, 0]);

    let labels = |game: &Game| -> Vec<String> {
        game.moves().into_iter().map(|m| m.description).collect()
    };

    assert_eq!(game.order().label(), "Sort by: Ascending");
    assert_eq!(
        labels(&game),
        vec!["Go to game start", "Go to move #1 at [1,1]", "Go to move #2 at [0,0]"]
    );

    game.toggle_order();
    assert_eq!(game.order(), MoveOrder::Descending);
    assert_eq!(game.order().label(), "Sort by: Descending");
    assert_eq!(
        labels(&game),
        vec!["Go to move #2 at [0,0]", "Go to move #1 at [1,1]", "Go to game start"]
    );
}

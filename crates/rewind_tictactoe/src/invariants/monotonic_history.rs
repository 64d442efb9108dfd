//! Monotonic history invariant: each step adds exactly one mark.

use super::Invariant;
use crate::{Game, History, Player, Square};

/// Invariant: every snapshot is its predecessor plus one mark.
///
/// The new mark sits on a previously empty square, belongs to the player
/// whose turn it was, and matches the snapshot's recorded location. Squares
/// therefore never revert, players alternate, and the board at step N is the
/// replay of moves 1..N.
pub struct MonotonicHistoryInvariant;

impl Invariant<History> for MonotonicHistoryInvariant {
    fn holds(history: &History) -> bool {
        history
            .as_slice()
            .windows(2)
            .enumerate()
            .all(|(step, pair)| {
                let (before, after) = (pair[0].board(), pair[1].board());
                let changed: Vec<usize> = (0..9)
                    .filter(|&i| before.squares()[i] != after.squares()[i])
                    .collect();
                match (changed.as_slice(), pair[1].location()) {
                    ([idx], Some(loc)) => {
                        *idx == loc.to_index()
                            && before.squares()[*idx] == Square::Empty
                            && after.squares()[*idx] == Square::Occupied(Player::for_step(step))
                    }
                    _ => false,
                }
            })
    }

    fn description() -> &'static str {
        "Each step places exactly one mark, alternating X and O"
    }
}

impl Invariant<Game> for MonotonicHistoryInvariant {
    fn holds(game: &Game) -> bool {
        <Self as Invariant<History>>::holds(game.history())
    }

    fn description() -> &'static str {
        <Self as Invariant<History>>::description()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Position, Snapshot};

    #[test]
    fn test_played_game_holds() {
        let mut game = Game::new();
        for idx in [4, 0, 8, 2] {
            game.click_index(idx);
        }
        assert!(MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_violates() {
        let mut game = Game::new();
        game.history.snapshots.push(Snapshot::after_move(
            Board::new().with_mark(Position::Center, Player::O),
            Position::Center,
        ));
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_mismatched_location_violates() {
        let mut game = Game::new();
        game.history.snapshots.push(Snapshot::after_move(
            Board::new().with_mark(Position::Center, Player::X),
            Position::TopLeft,
        ));
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }

    #[test]
    fn test_cleared_square_violates() {
        let mut game = Game::new();
        game.click_index(4);
        game.history.snapshots.push(Snapshot::initial());
        assert!(!MonotonicHistoryInvariant::holds(&game));
    }
}

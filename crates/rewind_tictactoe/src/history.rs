//! Board snapshots and the branch-truncating history store.

use super::action::{Move, MoveError, apply_move};
use super::invariants::{Invariant, MonotonicHistoryInvariant, RootedHistoryInvariant};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// A board state plus the square whose move produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub(crate) board: Board,
    pub(crate) location: Option<Position>,
}

impl Snapshot {
    /// The empty starting board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            location: None,
        }
    }

    /// Snapshot taken right after a move at `location`.
    pub fn after_move(board: Board, location: Position) -> Self {
        Self {
            board,
            location: Some(location),
        }
    }

    /// The board at this step.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The square just played, `None` for the initial snapshot.
    pub fn location(&self) -> Option<Position> {
        self.location
    }
}

/// Errors from addressing the history by step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum HistoryError {
    /// Step not in `0..len`.
    #[display("Step {} is out of range (history has {} snapshots)", step, len)]
    StepOutOfRange {
        /// Requested step.
        step: usize,
        /// History length at the time.
        len: usize,
    },

    /// Snapshots that no sequence of legal moves could produce.
    #[display("Malformed history: {}", reason)]
    Malformed {
        /// The broken invariant.
        reason: &'static str,
    },
}

/// Ordered snapshots from the empty board to the latest move.
///
/// Never empty: step 0 is always the empty board. Deserializes from a
/// snapshot list only when it is rooted at the empty board and every step
/// adds one alternating mark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Snapshot>", into = "Vec<Snapshot>")]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
}

impl History {
    /// History holding only the initial snapshot.
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
        }
    }

    /// Number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false: step 0 always exists.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the newest snapshot.
    pub fn tail_step(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// Snapshots in step order.
    pub fn as_slice(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Iterates snapshots from step 0.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Snapshot> + ExactSizeIterator {
        self.snapshots.iter()
    }

    /// Returns the snapshot at `step`.
    pub fn get(&self, step: usize) -> Result<&Snapshot, HistoryError> {
        self.snapshots.get(step).ok_or(HistoryError::StepOutOfRange {
            step,
            len: self.snapshots.len(),
        })
    }

    /// Discards everything after `at_step`, then appends `snapshot`.
    ///
    /// Afterwards `len() == at_step + 2`; snapshots up to `at_step` are
    /// untouched.
    #[instrument(skip(self, snapshot), fields(len = self.snapshots.len()))]
    pub fn commit(&mut self, snapshot: Snapshot, at_step: usize) -> Result<(), HistoryError> {
        self.get(at_step)?;
        let discarded = self.tail_step() - at_step;
        if discarded > 0 {
            debug!(discarded, "Truncating abandoned branch");
        }
        self.snapshots.truncate(at_step + 1);
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Rebuilds a history by playing `moves` in order from the empty board.
    ///
    /// Each move's player must match the alternation X, O, X, ...
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(moves: &[Move]) -> Result<Self, MoveError> {
        let mut history = Self::new();
        for mv in moves {
            let tail = history.tail_step();
            if mv.player != Player::for_step(tail) {
                return Err(MoveError::WrongPlayer(mv.player));
            }
            let board = *history.snapshots[tail].board();
            let placement = apply_move(&board, mv.position, mv.player)?;
            history
                .snapshots
                .push(Snapshot::after_move(placement.board, placement.location));
        }
        Ok(history)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<Vec<Snapshot>> for History {
    type Error = HistoryError;

    fn try_from(snapshots: Vec<Snapshot>) -> Result<Self, Self::Error> {
        let history = Self { snapshots };
        if !<RootedHistoryInvariant as Invariant<History>>::holds(&history) {
            return Err(HistoryError::Malformed {
                reason: <RootedHistoryInvariant as Invariant<History>>::description(),
            });
        }
        if !<MonotonicHistoryInvariant as Invariant<History>>::holds(&history) {
            return Err(HistoryError::Malformed {
                reason: <MonotonicHistoryInvariant as Invariant<History>>::description(),
            });
        }
        Ok(history)
    }
}

impl From<History> for Vec<Snapshot> {
    fn from(history: History) -> Self {
        history.snapshots
    }
}

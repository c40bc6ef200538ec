//! Monotonic board invariant: marks are never overwritten along history.

use super::Invariant;
use crate::{Board, GameState};

/// Invariant: each entry extends the previous one by exactly one mark.
///
/// The first entry is the empty board. Every later entry keeps all marks
/// of its predecessor and adds one at the entry's recorded (row, column).
pub struct MonotonicBoardInvariant;

impl MonotonicBoardInvariant {
    fn extends(before: &Board, after: &Board, row: usize, column: usize) -> bool {
        let placed = row * 3 + column;
        if row > 2 || column > 2 || !before.is_empty(placed) || after.is_empty(placed) {
            return false;
        }
        before
            .squares()
            .iter()
            .zip(after.squares())
            .enumerate()
            .all(|(i, (b, a))| i == placed || b == a)
    }
}

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();
        let Some(first) = history.first() else {
            return false;
        };
        if *first.board() != Board::new() {
            return false;
        }
        history.windows(2).all(|pair| {
            Self::extends(pair[0].board(), pair[1].board(), *pair[1].row(), *pair[1].column())
        })
    }

    fn description() -> &'static str {
        "Board squares transition Empty to Occupied one at a time, never back"
    }
}

//! History entries and move-list items.
//!
//! A [`Move`] is the board immediately after a play together with where
//! that play landed. The game keeps one per play, plus a synthetic first
//! entry for the empty board.

use crate::position::Coordinates;
use crate::types::Board;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// One history entry: the board after a play and the cell just played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize, new)]
pub struct Move {
    /// Board snapshot immediately after the play.
    board: Board,
    /// Row of the cell just played.
    row: usize,
    /// Column of the cell just played.
    column: usize,
}

impl Move {
    /// The synthetic pre-game entry: empty board, placeholder (0, 0).
    pub fn initial() -> Self {
        Self::new(Board::new(), 0, 0)
    }

    /// Creates an entry from a board and the coordinates of the last play.
    pub fn from_coordinates(board: Board, coordinates: Coordinates) -> Self {
        Self::new(board, coordinates.row, coordinates.column)
    }

    /// Coordinates of the cell just played.
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.row, self.column)
    }
}

impl Default for Move {
    fn default() -> Self {
        Self::initial()
    }
}

/// One line of the rendered move list.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct MoveEntry {
    /// Button text, e.g. `Go to move #2 (1, 1)`.
    label: String,
    /// History index a jump to this entry targets.
    step: usize,
}

impl MoveEntry {
    /// Label for the history entry at `step`.
    pub fn label_for(step: usize, entry: &Move) -> String {
        if step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{} ({}, {})", step, entry.row, entry.column)
        }
    }

    /// Builds the move-list item for the history entry at `step`.
    pub fn describe(step: usize, entry: &Move) -> Self {
        Self::new(Self::label_for(step, entry), step)
    }
}

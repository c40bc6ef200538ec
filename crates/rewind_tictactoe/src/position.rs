//! Board positions and the index to (row, column) mapping.

use crate::error::GameError;
use crate::types::Board;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Row and column of a cell, both in 0..=2.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, new)]
pub struct Coordinates {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub column: usize,
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Converts a linear cell index (0-8) to its row and column.
///
/// # Errors
///
/// Returns an invalid-argument error for indices outside 0..=8.
#[track_caller]
#[instrument]
pub fn to_row_column(index: usize) -> Result<Coordinates, GameError> {
    if index >= Board::SIZE {
        return Err(GameError::invalid_argument(format!(
            "cell index {} is outside 0..=8",
            index
        )));
    }
    Ok(Coordinates::new(index / 3, index % 3))
}

/// A position on the tic-tac-toe board (0-8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (position 0)
    TopLeft,
    /// Top-center (position 1)
    TopCenter,
    /// Top-right (position 2)
    TopRight,
    /// Middle-left (position 3)
    MiddleLeft,
    /// Center (position 4)
    Center,
    /// Middle-right (position 5)
    MiddleRight,
    /// Bottom-left (position 6)
    BottomLeft,
    /// Bottom-center (position 7)
    BottomCenter,
    /// Bottom-right (position 8)
    BottomRight,
}

impl Position {
    /// All 9 positions in index order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row and column of this position.
    pub fn coordinates(self) -> Coordinates {
        let index = self.to_index();
        Coordinates::new(index / 3, index % 3)
    }

    /// Creates position from row and column, `None` if either is past 2.
    pub fn from_coordinates(coordinates: Coordinates) -> Option<Self> {
        if coordinates.row > 2 || coordinates.column > 2 {
            return None;
        }
        Self::from_index(coordinates.row * 3 + coordinates.column)
    }
}

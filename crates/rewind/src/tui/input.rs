//! Cursor movement for keyboard navigation.

use crossterm::event::KeyCode;
use rewind_tictactoe::{Coordinates, Position};

/// Moves cursor based on arrow keys (or `hjkl`). The cursor stops at the
/// board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let Coordinates { row, column } = cursor.coordinates();

    let (row, column) = match key {
        KeyCode::Right | KeyCode::Char('l') => (row, (column + 1).min(2)),
        KeyCode::Left | KeyCode::Char('h') => (row, column.saturating_sub(1)),
        KeyCode::Down | KeyCode::Char('j') => ((row + 1).min(2), column),
        KeyCode::Up | KeyCode::Char('k') => (row.saturating_sub(1), column),
        _ => return cursor,
    };

    Position::from_coordinates(Coordinates::new(row, column)).unwrap_or(cursor)
}

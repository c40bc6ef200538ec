//! Board-full detection.
//!
//! A full board with no winner gets no special status text; the
//! presentation layer only uses this to hint that no moves remain.

use crate::types::Board;
use tracing::instrument;

/// Checks if every square on the board is occupied.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Player, Square};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(4, Square::Occupied(Player::X)).unwrap();
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for i in 0..9 {
            board.set(i, Square::Occupied(Player::X)).unwrap();
        }
        assert!(is_full(&board));
    }
}

//! History consistency invariant: entry `i` holds exactly `i` marks.

use super::Invariant;
use crate::{GameState, Player, Square};

/// Invariant: history entry `i` has `i` occupied squares, and the mark
/// added at entry `i` belongs to X for odd `i` and O for even `i`.
///
/// Together with [`MonotonicBoardInvariant`](super::MonotonicBoardInvariant)
/// this means history length is always the number of plays plus one.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        game.history().iter().enumerate().all(|(step, entry)| {
            if entry.board().occupied() != step {
                return false;
            }
            if step == 0 {
                return true;
            }
            let expected = if step % 2 == 1 { Player::X } else { Player::O };
            entry.board().get(entry.row() * 3 + entry.column()) == Some(Square::Occupied(expected))
        })
    }

    fn description() -> &'static str {
        "History entry i holds i marks, the newest placed by the right player"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Move;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_full_game_holds() {
        let mut game = GameState::new();
        for cell in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            game = game.play(cell).unwrap();
        }
        assert_eq!(game.history().len(), 10);
        assert!(HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut game = GameState::new().play(4).unwrap();
        let mut board = *game.history[1].board();
        board.set(0, Square::Occupied(Player::O)).unwrap();
        game.history[1] = Move::new(board, 1, 1);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }

    #[test]
    fn test_wrong_player_mark_violates() {
        let mut game = GameState::new().play(4).unwrap();
        let mut board = *game.history[1].board();
        board.set(4, Square::Occupied(Player::O)).unwrap();
        game.history[1] = Move::new(board, 1, 1);
        assert!(!HistoryConsistentInvariant::holds(&game));
    }
}

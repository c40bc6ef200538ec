//! Headless replay: apply a scripted session and render the outcome.

use rewind_tictactoe::{GameError, GameState, Snapshot};
use tracing::{info, instrument};

/// Replays `cells` from a fresh game, then applies the optional jump and
/// order toggle.
///
/// Occupied cells and plays after a win are skipped by the game itself, so
/// only out-of-range cells or steps fail.
#[instrument]
pub fn replay(
    cells: &[usize],
    jump: Option<usize>,
    toggle: bool,
    display_ascending: bool,
) -> Result<GameState, GameError> {
    let mut game = GameState::new();
    if !display_ascending {
        game = game.toggle_order();
    }
    for &cell in cells {
        game = game.play(cell)?;
    }
    if let Some(step) = jump {
        game = game.jump_to(step)?;
    }
    if toggle {
        game = game.toggle_order();
    }
    info!(steps = game.history().len(), status = %game.status(), "Replay finished");
    Ok(game)
}

/// Plain-text rendering of a snapshot: board, status, then the move list.
///
/// The active step is marked with `>`.
pub fn render_text(snapshot: &Snapshot) -> String {
    let direction = if snapshot.display_ascending {
        "ascending"
    } else {
        "descending"
    };
    let mut out = String::new();
    out.push_str(&snapshot.board.display());
    out.push_str("\n\n");
    out.push_str(&snapshot.status);
    out.push_str(&format!("\n\nMoves ({}):\n", direction));
    for entry in &snapshot.moves {
        let marker = if *entry.step() == snapshot.step_number {
            '>'
        } else {
            ' '
        };
        out.push_str(&format!("{} {}\n", marker, entry.label()));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replay_skips_occupied_cells() {
        let game = replay(&[4, 4, 0], None, false, true).unwrap();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.status(), "Next player: X");
    }

    #[test]
    fn test_replay_rejects_bad_jump() {
        let err = replay(&[4], Some(5), false, true).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_render_text_descending() {
        let game = replay(&[0, 4, 1, 5, 2], Some(3), true, true).unwrap();
        let text = render_text(&game.snapshot());
        let expected = "\
X|X|3
-+-+-
4|O|6
-+-+-
7|8|9

Next player: O

Moves (descending):
  Go to move #5 (0, 2)
  Go to move #4 (1, 2)
> Go to move #3 (0, 1)
  Go to move #2 (1, 1)
  Go to move #1 (0, 0)
  Go to game start
";
        assert_eq!(text, expected);
    }
}

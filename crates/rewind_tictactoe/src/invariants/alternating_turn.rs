//! Alternating turn invariant: X moves on even steps, O on odd ones.

use super::Invariant;
use crate::GameState;

/// Invariant: the next player follows the parity of the active step.
///
/// X opens, so after an even number of plays it is X's turn again. This
/// holds after jumps as well as plays.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        game.x_is_next() == (game.step_number() % 2 == 0)
    }

    fn description() -> &'static str {
        "Players alternate turns (X on even steps, O on odd steps)"
    }
}

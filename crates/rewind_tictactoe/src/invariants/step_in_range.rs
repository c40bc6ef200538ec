//! Step range invariant: the active step indexes an existing entry.

use super::Invariant;
use crate::GameState;

/// Invariant: history is never empty and the active step is inside it.
pub struct StepInRangeInvariant;

impl Invariant<GameState> for StepInRangeInvariant {
    fn holds(game: &GameState) -> bool {
        !game.history().is_empty() && game.step_number() < game.history().len()
    }

    fn description() -> &'static str {
        "Active step indexes an existing history entry"
    }
}

//! Contract-based validation for game transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::error::GameError;
use crate::game::GameState;
use crate::invariants::{InvariantSet, TicTacToeInvariants};
use crate::types::Board;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// Runs every game invariant against `game`.
///
/// The error location is this function, whichever transition was checked.
fn check_invariants(game: &GameState) -> Result<(), GameError> {
    match TicTacToeInvariants::check_all(game) {
        Ok(()) => Ok(()),
        Err(violations) => {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            warn!(%descriptions, "Postcondition failed");
            Err(GameError::invariant_violation(format!(
                "Postcondition failed: {}",
                descriptions
            )))
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Play
// ─────────────────────────────────────────────────────────────

/// Contract for [`GameState::play`].
///
/// Preconditions:
/// - Cell index is on the board
///
/// Postconditions:
/// - All game invariants hold
/// - History was cut after the old step and grew by exactly one entry
pub struct PlayContract;

impl Contract<GameState, usize> for PlayContract {
    #[instrument(skip(_game))]
    fn pre(_game: &GameState, cell: &usize) -> Result<(), GameError> {
        if *cell >= Board::SIZE {
            return Err(GameError::invalid_argument(format!(
                "cell {} is outside 0..=8",
                cell
            )));
        }
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        check_invariants(after)?;
        if after.history.len() != before.step_number + 2 {
            return Err(GameError::invariant_violation(format!(
                "history length {} after playing from step {}",
                after.history.len(),
                before.step_number
            )));
        }
        if after.history[..=before.step_number] != before.history[..=before.step_number] {
            return Err(GameError::invariant_violation(
                "play rewrote history before the active step",
            ));
        }
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump
// ─────────────────────────────────────────────────────────────

/// Contract for [`GameState::jump_to`].
///
/// Preconditions:
/// - Step is a valid history index
///
/// Postconditions:
/// - All game invariants hold
/// - History and display direction are unchanged
pub struct JumpContract;

impl Contract<GameState, usize> for JumpContract {
    #[instrument(skip(game))]
    fn pre(game: &GameState, step: &usize) -> Result<(), GameError> {
        if *step >= game.history.len() {
            return Err(GameError::invalid_argument(format!(
                "step {} is outside 0..={}",
                step,
                game.history.len() - 1
            )));
        }
        Ok(())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), GameError> {
        check_invariants(after)?;
        if after.history != before.history || after.display_ascending != before.display_ascending
        {
            return Err(GameError::invariant_violation(
                "jump changed history or display order",
            ));
        }
        Ok(())
    }
}

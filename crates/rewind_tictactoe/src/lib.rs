//! Rewind tic-tac-toe - pure game logic with a time-travel move history.
//!
//! # Architecture
//!
//! - **Types**: players, squares and the 3x3 board
//! - **Position**: mapping between linear cell indices and (row, column)
//! - **Rules**: win detection over the eight fixed lines
//! - **Game**: the history-keeping state machine (`play`, `jump_to`, `toggle_order`)
//! - **Invariants**: checkable properties every reachable state satisfies
//!
//! # Example
//!
//! ```
//! use rewind_tictactoe::GameState;
//!
//! # fn example() -> Result<(), rewind_tictactoe::GameError> {
//! let game = GameState::new()
//!     .play(0)?
//!     .play(4)?
//!     .play(1)?;
//! assert_eq!(game.status(), "Next player: O");
//!
//! // Travel back to the first move; history is kept until the next play.
//! let game = game.jump_to(1)?;
//! assert_eq!(game.history().len(), 4);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod game;
mod invariants;
mod position;
mod rules;
mod types;

pub use action::{Move, MoveEntry};
pub use contracts::{Contract, JumpContract, PlayContract};
pub use error::{GameError, GameErrorKind};
pub use game::{GameState, Snapshot};
pub use invariants::{
    AlternatingTurnInvariant, HistoryConsistentInvariant, Invariant, InvariantSet,
    InvariantViolation, MonotonicBoardInvariant, StepInRangeInvariant, TicTacToeInvariants,
};
pub use position::{Coordinates, Position, to_row_column};
pub use rules::{check_winner, is_full};
pub use types::{Board, Player, Square};

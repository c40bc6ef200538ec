//! History-keeping game state machine.
//!
//! [`GameState`] is replaced, never edited, by its three transitions:
//!
//! - [`GameState::play`] marks a cell, discarding any future that a
//!   previous [`GameState::jump_to`] left behind
//! - [`GameState::jump_to`] moves the active step within the current branch
//! - [`GameState::toggle_order`] flips the move-list display direction
//!
//! History is always stored in play order. The display direction only
//! affects [`GameState::moves`], so a step index means the same thing no
//! matter how the list is shown.

use crate::action::{Move, MoveEntry};
use crate::contracts::{Contract, JumpContract, PlayContract};
use crate::error::GameError;
use crate::position::to_row_column;
use crate::rules::check_winner;
use crate::types::{Board, Player, Square};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Complete game state: history, active step and display direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub(crate) history: Vec<Move>,
    pub(crate) step_number: usize,
    pub(crate) x_is_next: bool,
    pub(crate) display_ascending: bool,
}

impl GameState {
    /// Creates a fresh game: one synthetic empty-board entry, X to move,
    /// move list ascending.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: vec![Move::initial()],
            step_number: 0,
            x_is_next: true,
            display_ascending: true,
        }
    }

    /// Plays the next player's mark at `cell` (0-8).
    ///
    /// Playing on an occupied cell, or on a board that already has a
    /// winner, returns the state unchanged.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `cell` is not in 0..=8.
    #[instrument(skip(self), fields(step = self.step_number, player = %self.next_player()))]
    pub fn play(self, cell: usize) -> Result<Self, GameError> {
        PlayContract::pre(&self, &cell)?;

        let mut board = *self.current_board();
        if let Some(winner) = check_winner(&board) {
            debug!(%winner, "Game already decided, ignoring play");
            return Ok(self);
        }
        if !board.is_empty(cell) {
            debug!(cell, "Cell occupied, ignoring play");
            return Ok(self);
        }

        let player = self.next_player();
        board.set(cell, Square::Occupied(player))?;
        let coordinates = to_row_column(cell)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.history.truncate(game.step_number + 1);
        game.history.push(Move::from_coordinates(board, coordinates));
        game.step_number = game.history.len() - 1;
        game.x_is_next = !game.x_is_next;

        #[cfg(debug_assertions)]
        PlayContract::post(&before, &game)?;

        info!(%player, cell, %coordinates, step = game.step_number, "Move played");
        Ok(game)
    }

    /// Makes `step` the active history entry without discarding anything.
    ///
    /// # Errors
    ///
    /// Returns an invalid-argument error if `step` is past the end of the
    /// history.
    #[instrument(skip(self), fields(from = self.step_number, len = self.history.len()))]
    pub fn jump_to(self, step: usize) -> Result<Self, GameError> {
        JumpContract::pre(&self, &step)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mut game = self;
        game.step_number = step;
        game.x_is_next = step % 2 == 0;

        #[cfg(debug_assertions)]
        JumpContract::post(&before, &game)?;

        info!(step, "Jumped to step");
        Ok(game)
    }

    /// Flips the move-list display direction. History and the active step
    /// are untouched.
    #[instrument(skip(self), fields(ascending = self.display_ascending))]
    pub fn toggle_order(self) -> Self {
        let mut game = self;
        game.display_ascending = !game.display_ascending;
        debug!(ascending = game.display_ascending, "Move order toggled");
        game
    }

    /// Every history entry, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Index of the active history entry.
    pub fn step_number(&self) -> usize {
        self.step_number
    }

    /// True when X moves next.
    pub fn x_is_next(&self) -> bool {
        self.x_is_next
    }

    /// True when the move list is shown oldest first.
    pub fn display_ascending(&self) -> bool {
        self.display_ascending
    }

    /// The player who moves next.
    pub fn next_player(&self) -> Player {
        if self.x_is_next { Player::X } else { Player::O }
    }

    /// True when the active step is the newest history entry.
    pub fn is_latest_step(&self) -> bool {
        self.step_number + 1 == self.history.len()
    }

    /// Board of the active history entry.
    pub fn current_board(&self) -> &Board {
        self.history[self.step_number].board()
    }

    /// Winner on the active board, if any.
    pub fn winner(&self) -> Option<Player> {
        check_winner(self.current_board())
    }

    /// Status line: the winner, otherwise whose turn it is.
    ///
    /// A full board without a winner still reports the next player.
    pub fn status(&self) -> String {
        match self.winner() {
            Some(winner) => format!("Winner: {}", winner),
            None => format!("Next player: {}", self.next_player()),
        }
    }

    /// Move list in display order.
    ///
    /// Each entry's `step` is its real history index, so it can be passed
    /// straight to [`GameState::jump_to`] whichever way the list is shown.
    pub fn moves(&self) -> Vec<MoveEntry> {
        let entries = self
            .history
            .iter()
            .enumerate()
            .map(|(step, entry)| MoveEntry::describe(step, entry));
        if self.display_ascending {
            entries.collect()
        } else {
            entries.rev().collect()
        }
    }

    /// Read-only view for rendering.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: *self.current_board(),
            status: self.status(),
            moves: self.moves(),
            display_ascending: self.display_ascending,
            step_number: self.step_number,
            winner: self.winner(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    /// Board of the active step.
    pub board: Board,
    /// Status line text.
    pub status: String,
    /// Move list in display order.
    pub moves: Vec<MoveEntry>,
    /// Display direction of `moves`.
    pub display_ascending: bool,
    /// Active history index.
    pub step_number: usize,
    /// Winner on the active board.
    pub winner: Option<Player>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all(cells: &[usize]) -> GameState {
        cells
            .iter()
            .try_fold(GameState::new(), |game, &cell| game.play(cell))
            .unwrap()
    }

    #[test]
    fn test_fresh_state() {
        let game = GameState::new();
        assert_eq!(game.history().len(), 1);
        assert_eq!(game.step_number(), 0);
        assert!(game.x_is_next());
        assert!(game.display_ascending());
        assert_eq!(game.status(), "Next player: X");
    }

    #[test]
    fn test_play_records_coordinates() {
        let game = play_all(&[5]);
        assert_eq!(game.history().len(), 2);
        assert_eq!(*game.history()[1].row(), 1);
        assert_eq!(*game.history()[1].column(), 2);
        assert_eq!(game.current_board().get(5), Some(Square::Occupied(Player::X)));
        assert!(!game.x_is_next());
    }

    #[test]
    fn test_play_does_not_touch_earlier_boards() {
        let game = play_all(&[0, 4]);
        assert_eq!(*game.history()[0].board(), Board::new());
        assert_eq!(game.history()[1].board().occupied(), 1);
        assert_eq!(game.history()[2].board().occupied(), 2);
    }

    #[test]
    fn test_play_out_of_range_is_error() {
        let err = GameState::new().play(9).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn test_play_occupied_is_noop() {
        let game = play_all(&[4]);
        let again = game.clone().play(4).unwrap();
        assert_eq!(again, game);
    }

    #[test]
    fn test_play_after_win_is_noop() {
        let game = play_all(&[0, 4, 1, 5, 2]);
        assert_eq!(game.winner(), Some(Player::X));
        let after = game.clone().play(8).unwrap();
        assert_eq!(after, game);
    }

    #[test]
    fn test_jump_keeps_history() {
        let game = play_all(&[0, 1, 3]).jump_to(1).unwrap();
        assert_eq!(game.history().len(), 4);
        assert_eq!(game.step_number(), 1);
        assert!(!game.x_is_next());
        assert!(!game.is_latest_step());
    }

    #[test]
    fn test_jump_out_of_range_is_error() {
        let game = play_all(&[0]);
        assert!(game.clone().jump_to(2).unwrap_err().is_invalid_argument());
        assert!(game.jump_to(1).is_ok());
    }

    #[test]
    fn test_play_after_jump_discards_future() {
        let game = play_all(&[0, 1, 3]).jump_to(1).unwrap().play(4).unwrap();
        assert_eq!(game.history().len(), 3);
        assert_eq!(game.step_number(), 2);
        assert_eq!(game.current_board().get(4), Some(Square::Occupied(Player::O)));
        assert_eq!(game.current_board().get(1), Some(Square::Empty));
    }

    #[test]
    fn test_toggle_only_changes_display() {
        let game = play_all(&[0, 4, 8]).jump_to(1).unwrap();
        let toggled = game.clone().toggle_order();
        assert!(!toggled.display_ascending());
        assert_eq!(toggled.history(), game.history());
        assert_eq!(toggled.step_number(), game.step_number());
        assert_eq!(toggled.toggle_order(), game);
    }

    #[test]
    fn test_descending_move_list() {
        let game = play_all(&[0, 4]).toggle_order();
        let labels: Vec<_> = game.moves().into_iter().map(|m| m.label().clone()).collect();
        assert_eq!(
            labels,
            vec![
                "Go to move #2 (1, 1)".to_string(),
                "Go to move #1 (0, 0)".to_string(),
                "Go to game start".to_string(),
            ]
        );
        let steps: Vec<_> = game.moves().iter().map(|m| *m.step()).collect();
        assert_eq!(steps, vec![2, 1, 0]);
    }

    #[test]
    fn test_snapshot_reflects_active_step() {
        let game = play_all(&[0, 4, 1, 5, 2]).jump_to(2).unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.step_number, 2);
        assert_eq!(snapshot.winner, None);
        assert_eq!(snapshot.status, "Next player: X");
        assert_eq!(snapshot.board.occupied(), 2);
        assert_eq!(snapshot.moves.len(), 6);
    }
}

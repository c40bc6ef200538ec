//! Application state and key handling.

use crossterm::event::KeyCode;
use rewind_tictactoe::{GameError, GameState, Position, is_full};
use tracing::{debug, instrument, warn};

use super::input::move_cursor;

/// Which panel receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Arrow keys move the board cursor.
    #[default]
    Board,
    /// Arrow keys move the move-list selection.
    Moves,
}

impl Focus {
    /// Switches to the other panel.
    pub fn toggle(self) -> Self {
        match self {
            Self::Board => Self::Moves,
            Self::Moves => Self::Board,
        }
    }
}

/// What the event loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppAction {
    /// Keep running.
    Continue,
    /// Leave the TUI.
    Quit,
}

/// Main application state.
///
/// Owns the single live [`GameState`]; every key that changes the game
/// swaps in the state returned by a transition.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    cursor: Position,
    focus: Focus,
    selected_step: usize,
    message: Option<String>,
}

impl App {
    /// Creates a new application.
    #[instrument]
    pub fn new(display_ascending: bool) -> Self {
        let game = GameState::new();
        let game = if display_ascending {
            game
        } else {
            game.toggle_order()
        };
        Self {
            game,
            cursor: Position::Center,
            focus: Focus::Board,
            selected_step: 0,
            message: None,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Panel receiving navigation keys.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// History step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Row of the highlighted step in the displayed move list.
    pub fn selected_row(&self) -> usize {
        if self.game.display_ascending() {
            self.selected_step
        } else {
            self.game.history().len() - 1 - self.selected_step
        }
    }

    /// Last error or hint for the status bar.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(focus = ?self.focus))]
    pub fn handle_key(&mut self, key: KeyCode) -> AppAction {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,
            KeyCode::Tab => self.focus = self.focus.toggle(),
            KeyCode::Char('o') => self.toggle_order(),
            KeyCode::Char(c @ '1'..='9') => {
                if let Some(digit) = c.to_digit(10) {
                    self.play(digit as usize - 1);
                }
            }
            _ => match self.focus {
                Focus::Board => self.handle_board_key(key),
                Focus::Moves => self.handle_moves_key(key),
            },
        }
        AppAction::Continue
    }

    fn handle_board_key(&mut self, key: KeyCode) {
        match key {
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.to_index()),
            _ => self.cursor = move_cursor(self.cursor, key),
        }
    }

    fn handle_moves_key(&mut self, key: KeyCode) {
        let last = self.game.history().len() - 1;
        // Down walks the list as displayed, which is newest first when descending.
        let forward = self.game.display_ascending();
        match key {
            KeyCode::Down | KeyCode::Char('j') => {
                self.selected_step = if forward {
                    (self.selected_step + 1).min(last)
                } else {
                    self.selected_step.saturating_sub(1)
                };
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.selected_step = if forward {
                    self.selected_step.saturating_sub(1)
                } else {
                    (self.selected_step + 1).min(last)
                };
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.jump_to(self.selected_step),
            _ => {}
        }
    }

    /// Plays at `cell` and follows the new step in the move list.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: usize) {
        let before = self.game.step_number();
        if self.apply(|game| game.play(cell)) {
            self.selected_step = self.game.step_number();
            if let Some(pos) = Position::from_index(cell) {
                self.cursor = pos;
            }
            self.message = if self.game.step_number() == before {
                debug!(cell, "Play ignored");
                Some("That square can't be played".to_string())
            } else if self.game.winner().is_none() && is_full(self.game.current_board()) {
                Some("No squares left - pick a move to travel back".to_string())
            } else {
                None
            };
        }
    }

    /// Jumps to `step` in the history.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) {
        if self.apply(|game| game.jump_to(step)) {
            self.selected_step = self.game.step_number();
            self.message = None;
        }
    }

    /// Flips the move-list order.
    pub fn toggle_order(&mut self) {
        self.game = std::mem::take(&mut self.game).toggle_order();
    }

    /// Applies a transition to a copy of the game and keeps the result on
    /// success. On failure the game is left as it was and the error is
    /// shown in the status bar.
    fn apply(
        &mut self,
        transition: impl FnOnce(GameState) -> Result<GameState, GameError>,
    ) -> bool {
        match transition(self.game.clone()) {
            Ok(game) => {
                self.game = game;
                true
            }
            Err(e) => {
                warn!(error = %e, "Transition rejected");
                self.message = Some(e.kind().to_string());
                false
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rewind_tictactoe::{Player, Square};

    fn press(app: &mut App, keys: &[KeyCode]) {
        for &key in keys {
            assert_eq!(app.handle_key(key), AppAction::Continue);
        }
    }

    #[test]
    fn test_enter_plays_at_cursor() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Up, KeyCode::Left, KeyCode::Enter]);
        assert_eq!(
            app.game().current_board().get(0),
            Some(Square::Occupied(Player::X))
        );
        assert_eq!(app.selected_step(), 1);
    }

    #[test]
    fn test_digit_plays_cell() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('1')]);
        assert_eq!(app.game().status(), "Next player: X");
        assert_eq!(
            app.game().current_board().get(0),
            Some(Square::Occupied(Player::O))
        );
        assert_eq!(app.cursor(), Position::TopLeft);
    }

    #[test]
    fn test_occupied_cell_shows_message() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Char('5'), KeyCode::Char('5')]);
        assert_eq!(app.game().history().len(), 2);
        assert!(app.message().is_some());
    }

    #[test]
    fn test_move_list_jump() {
        let mut app = App::default();
        press(
            &mut app,
            &[
                KeyCode::Char('1'),
                KeyCode::Char('5'),
                KeyCode::Char('9'),
                KeyCode::Tab,
                KeyCode::Up,
                KeyCode::Up,
                KeyCode::Enter,
            ],
        );
        assert_eq!(app.focus(), Focus::Moves);
        assert_eq!(app.game().step_number(), 1);
        assert_eq!(app.game().history().len(), 4);
        assert_eq!(app.game().status(), "Next player: O");
    }

    #[test]
    fn test_descending_navigation_follows_display() {
        let mut app = App::default();
        press(
            &mut app,
            &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('o'), KeyCode::Tab],
        );
        assert!(!app.game().display_ascending());
        assert_eq!(app.selected_row(), 0);

        press(&mut app, &[KeyCode::Down, KeyCode::Down, KeyCode::Enter]);
        assert_eq!(app.selected_step(), 0);
        assert_eq!(app.selected_row(), 2);
        assert_eq!(app.game().step_number(), 0);
        assert_eq!(app.game().history().len(), 3);
    }

    #[test]
    fn test_play_after_jump_branches() {
        let mut app = App::default();
        press(&mut app, &[KeyCode::Char('1'), KeyCode::Char('2'), KeyCode::Char('4')]);
        app.jump_to(1);
        press(&mut app, &[KeyCode::Char('5')]);
        assert_eq!(app.game().history().len(), 3);
        assert_eq!(app.selected_step(), 2);
    }

    #[test]
    fn test_full_board_hint() {
        let mut app = App::default();
        for key in ['1', '2', '3', '5', '4', '6', '8', '7', '9'] {
            press(&mut app, &[KeyCode::Char(key)]);
        }
        assert_eq!(app.game().winner(), None);
        assert_eq!(
            app.message(),
            Some("No squares left - pick a move to travel back")
        );
    }

    #[test]
    fn test_quit_keys() {
        let mut app = App::default();
        assert_eq!(app.handle_key(KeyCode::Char('q')), AppAction::Quit);
        assert_eq!(app.handle_key(KeyCode::Esc), AppAction::Quit);
    }
}

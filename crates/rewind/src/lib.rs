//! Rewind - terminal front end for time-travel tic-tac-toe.
//!
//! The game logic lives in [`rewind_tictactoe`]; this crate turns key
//! presses and command-line arguments into its transitions and renders
//! the resulting snapshots.
//!
//! - **TUI**: interactive board, move list and status bar (ratatui)
//! - **Replay**: headless scripted sessions for scripting and debugging
//! - **Config**: optional TOML file, `.env` and CLI overrides

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod logging;
mod replay;
mod tui;

pub use cli::{Cli, Command};
pub use config::{AppConfig, ConfigError};
pub use logging::{init_file_logging, init_stderr_logging};
pub use replay::{render_text, replay};
pub use tui::{App, AppAction, Focus, draw, move_cursor, run_tui};

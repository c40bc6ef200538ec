//! Command-line interface for rewind.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Rewind - tic-tac-toe with a time-travel move history
#[derive(Parser, Debug)]
#[command(name = "rewind")]
#[command(about = "Tic-tac-toe with a time-travel move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (defaults apply if it is missing)
    #[arg(long, global = true, default_value = "rewind.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play interactively in the terminal
    Play {
        /// Start with the move list most-recent-first
        #[arg(long)]
        descending: bool,
    },

    /// Apply a sequence of plays headlessly and print the result
    Replay {
        /// Cells to play in order (0-8, row-major)
        cells: Vec<usize>,

        /// Jump to this history step after the plays
        #[arg(long)]
        jump: Option<usize>,

        /// Toggle the move-list order after the plays
        #[arg(long)]
        toggle: bool,

        /// Print the snapshot as JSON
        #[arg(long)]
        json: bool,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_replay() {
        let cli = Cli::parse_from(["rewind", "replay", "0", "4", "8", "--jump", "1", "--json"]);
        match cli.command {
            Command::Replay {
                cells,
                jump,
                toggle,
                json,
            } => {
                assert_eq!(cells, vec![0, 4, 8]);
                assert_eq!(jump, Some(1));
                assert!(!toggle);
                assert!(json);
            }
            other => panic!("Unexpected command: {:?}", other),
        }
        assert_eq!(cli.config, PathBuf::from("rewind.toml"));
    }

    #[test]
    fn test_parse_play_with_config() {
        let cli = Cli::parse_from(["rewind", "--config", "custom.toml", "play", "--descending"]);
        assert!(matches!(cli.command, Command::Play { descending: true }));
        assert_eq!(cli.config, PathBuf::from("custom.toml"));
    }

    #[test]
    fn test_command_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}

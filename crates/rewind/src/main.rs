//! Rewind - tic-tac-toe with a time-travel move history.

use anyhow::{Context, Result};
use clap::Parser;
use rewind::{AppConfig, Cli, Command, init_stderr_logging, render_text, replay, run_tui};
use tracing::{info, instrument};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;

    match cli.command {
        Command::Play { descending } => {
            let config = if descending {
                config.with_display_ascending(false)
            } else {
                config
            };
            run_tui(&config)
        }
        Command::Replay {
            cells,
            jump,
            toggle,
            json,
        } => run_replay(&config, &cells, jump, toggle, json),
    }
}

/// Run a headless replay and print the result to stdout
#[instrument(skip(config))]
fn run_replay(
    config: &AppConfig,
    cells: &[usize],
    jump: Option<usize>,
    toggle: bool,
    json: bool,
) -> Result<()> {
    init_stderr_logging(config);
    info!("Replaying session");

    let game = replay(cells, jump, toggle, *config.display_ascending())?;
    let snapshot = game.snapshot();

    if json {
        let out = serde_json::to_string_pretty(&snapshot).context("Failed to encode snapshot")?;
        println!("{}", out);
    } else {
        print!("{}", render_text(&snapshot));
    }
    Ok(())
}

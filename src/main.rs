//! Terminal tic-tac-toe runner (default binary).
//!
//! Brings up the terminal surface, loads the three bitmaps and runs the game
//! loop. Failures are logged and reported on stderr once the terminal has
//! been restored; the exit status is always 0.

mod cli;
mod platform;

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tui_tictactoe::engine::launch;
use tui_tictactoe::term::Filter;

use crate::cli::Cli;
use crate::platform::TerminalPlatform;

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            if err.print().is_err() {
                eprintln!("{err}");
            }
            return;
        }
    };

    if let Err(err) = init_logging(&cli.log_file) {
        eprintln!("Warning: logging disabled: {err:#}");
    }
    info!(assets = %cli.assets.display(), "starting tic-tac-toe");

    let filter: Filter = cli.filter.into();
    match launch(|| TerminalPlatform::new(filter), &cli.assets) {
        Ok(outcome) => info!(
            frames = outcome.frames,
            moves = outcome.board.turns_taken(),
            "goodbye"
        ),
        Err(err) => {
            let report = anyhow::Error::from(err);
            error!(error = %format!("{report:#}"), "game did not run");
            eprintln!("{report:#}");
        }
    }
}

/// Log to a file (use RUST_LOG to control the level, e.g. RUST_LOG=debug).
/// The terminal is in raw mode drawing the board, so stdout is off limits.
fn init_logging(path: &Path) -> Result<()> {
    let log_file = OpenOptions::new().create(true).append(true).open(path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

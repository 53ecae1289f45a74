use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use tui_tictactoe::term::Filter;

/// Two-player tic-tac-toe in the terminal. Click a tile to mark it; press q,
/// Esc or Ctrl+C to leave.
#[derive(Parser, Debug)]
#[command(name = "tui-tictactoe", version, about)]
pub struct Cli {
    /// Directory containing grid.bmp, x.bmp and o.bmp
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub assets: PathBuf,

    /// Log destination; the terminal itself is busy drawing the board
    #[arg(long, value_name = "PATH", default_value = "tictactoe.log")]
    pub log_file: PathBuf,

    /// How the 600x600 board is scaled down to terminal cells
    #[arg(long, value_enum, default_value_t = FilterArg::Linear)]
    pub filter: FilterArg,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterArg {
    Linear,
    Nearest,
}

impl From<FilterArg> for Filter {
    fn from(value: FilterArg) -> Self {
        match value {
            FilterArg::Linear => Filter::Linear,
            FilterArg::Nearest => Filter::Nearest,
        }
    }
}

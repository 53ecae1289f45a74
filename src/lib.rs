//! TUI Tic-Tac-Toe (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the binary, the
//! integration tests and the benchmarks can use `tui_tictactoe::{core, engine,
//! input, term, types}`.

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_engine as engine;
pub use tui_tictactoe_input as input;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

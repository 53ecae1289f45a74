//! Game loop module - ties platform input to the board and draws every frame.
//!
//! - [`platform`]: the two services the loop needs from the outside world
//! - [`game`]: the application context (board + assets + canvas) and the
//!   poll-process-render loop
//! - [`launch`](mod@launch): startup sequence with scoped release on every path
//! - [`error`]: startup / runtime failure taxonomy

pub mod error;
pub mod game;
pub mod launch;
pub mod platform;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_term as term;
pub use tui_tictactoe_types as types;

pub use error::GameError;
pub use game::{Game, Outcome};
pub use launch::launch;
pub use platform::Platform;

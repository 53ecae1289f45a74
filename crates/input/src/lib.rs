//! Terminal input module (engine-facing).
//!
//! This module is independent of the renderer. It turns `crossterm` events
//! into [`crate::types::GameEvent`]s; the caller supplies the mapping from
//! terminal cells to logical pixels.

pub mod map;

pub use tui_tictactoe_types as types;

pub use map::{map_event, should_quit};

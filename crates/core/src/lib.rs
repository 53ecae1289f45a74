//! Core game logic module - pure, deterministic, and testable
//!
//! This crate holds the tile/turn state machine. It has **zero dependencies**
//! on terminals, image decoding or I/O: drawing goes through the
//! [`MarkPainter`] trait so the same board can be rendered into a pixel
//! canvas, recorded in a test, or ignored entirely.
//!
//! # Module Structure
//!
//! - [`tile`]: one clickable 200x200 region and its write-once mark
//! - [`board`]: the nine tiles, the turn indicator and the move history
//! - [`snapshot`]: copyable board view used for logging and assertions
//!
//! # Rules
//!
//! - X moves first, turns alternate on every accepted click
//! - A tile accepts a click only while it is empty and the point lies inside
//!   its bounds (edges included)
//! - There is no win or draw detection; once all nine tiles are marked every
//!   further click is ignored
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::Board;
//! use tui_tictactoe_types::{Mark, Player};
//!
//! let mut board = Board::new();
//! assert_eq!(board.handle_pointer(50, 50), Some(0));
//! assert_eq!(board.mark(0), Some(Mark::X));
//! assert_eq!(board.turn(), Player::O);
//!
//! // Same tile again: rejected, turn unchanged.
//! assert_eq!(board.handle_pointer(50, 50), None);
//! assert_eq!(board.turn(), Player::O);
//! ```

pub mod board;
pub mod snapshot;
pub mod tile;

pub use tui_tictactoe_types as types;

pub use board::Board;
pub use snapshot::BoardSnapshot;
pub use tile::{MarkPainter, Tile};

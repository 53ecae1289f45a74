//! Terminal "game renderer" module.
//!
//! The game draws into a fixed 600x600 pixel [`Canvas`], exactly as it would
//! into a window. [`BoardView`] then squeezes that canvas into the terminal's
//! character grid using half-block glyphs (two pixels per cell, one in the
//! foreground colour, one in the background colour), and
//! [`TerminalRenderer`] flushes the resulting [`FrameBuffer`] with diffing.
//!
//! Goals:
//! - Keep `core` free of any drawing or I/O
//! - Keep the pixel pipeline identical to a windowed game (clear, blit, present)
//! - Map terminal mouse positions back to logical pixels

pub mod assets;
pub mod board_view;
pub mod canvas;
pub mod error;
pub mod fb;
pub mod renderer;
pub mod texture;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use assets::{Assets, MarkBrush};
pub use board_view::{BoardView, Filter, Viewport};
pub use canvas::Canvas;
pub use error::{AssetLoadError, InitError};
pub use fb::{Cell, CellStyle, FrameBuffer};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use texture::Texture;
pub use types::Rgb;

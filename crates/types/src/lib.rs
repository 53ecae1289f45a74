//! Core types module - shared data structures and constants
//!
//! Everything in here is plain data with no external dependencies, so it can be
//! used from the board logic, the terminal surface and the input mapping alike.
//!
//! # Geometry
//!
//! The game draws onto a fixed logical surface measured in pixels:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `SCREEN_WIDTH` | 600 | Logical surface width |
//! | `SCREEN_HEIGHT` | 600 | Logical surface height |
//! | `TILE_WIDTH` | 200 | Width of one clickable tile |
//! | `TILE_HEIGHT` | 200 | Height of one clickable tile |
//! | `GRID_SIZE` | 3 | Tiles per row and per column |
//!
//! Tile `i` sits at `((i % 3) * TILE_WIDTH, (i / 3) * TILE_HEIGHT)`; index 0 is
//! the top-left tile and index 8 the bottom-right one.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Mark, Player, TILE_COUNT};
//!
//! let turn = Player::X;
//! assert_eq!(turn.next(), Player::O);
//! assert_eq!(turn.mark(), Mark::X);
//! assert_eq!(TILE_COUNT, 9);
//! ```

/// Logical surface width in pixels.
pub const SCREEN_WIDTH: u32 = 600;

/// Logical surface height in pixels.
pub const SCREEN_HEIGHT: u32 = 600;

/// Tile width in pixels.
pub const TILE_WIDTH: i32 = 200;

/// Tile height in pixels.
pub const TILE_HEIGHT: i32 = 200;

/// Tiles per row / column.
pub const GRID_SIZE: usize = 3;

/// Total number of tiles on the board.
pub const TILE_COUNT: usize = GRID_SIZE * GRID_SIZE;

/// Title shown by the host terminal while the game runs.
pub const WINDOW_TITLE: &str = "Tic Tac Toe :DDD";

/// Colour the surface is cleared to before every frame.
pub const CLEAR_COLOR: Rgb = Rgb::new(0xFF, 0xFF, 0xFF);

/// Source pixels of this colour are treated as transparent.
pub const COLOR_KEY: Rgb = Rgb::new(0xFF, 0x00, 0xFF);

/// Grid background bitmap, relative to the asset directory.
pub const GRID_ASSET: &str = "grid.bmp";

/// X mark bitmap, relative to the asset directory.
pub const X_ASSET: &str = "x.bmp";

/// O mark bitmap, relative to the asset directory.
pub const O_ASSET: &str = "o.bmp";

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The two players. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Player {
    #[default]
    X,
    O,
}

impl Player {
    /// The player whose turn follows this one.
    ///
    /// ```
    /// use tui_tictactoe_types::Player;
    ///
    /// assert_eq!(Player::X.next(), Player::O);
    /// assert_eq!(Player::O.next(), Player::X);
    /// ```
    pub fn next(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The mark this player leaves on a tile.
    pub fn mark(self) -> Mark {
        match self {
            Player::X => Mark::X,
            Player::O => Mark::O,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Player::X => "x",
            Player::O => "o",
        }
    }
}

/// Tri-state content of a tile.
///
/// A tile starts `Empty` and is written at most once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Mark {
    #[default]
    Empty,
    X,
    O,
}

impl Mark {
    pub fn is_empty(&self) -> bool {
        matches!(self, Mark::Empty)
    }

    /// Single-character form used in board dumps (`.` for empty).
    pub fn as_char(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// Input delivered to the game loop by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// A pointer button went down at the given logical pixel.
    PointerDown { x: i32, y: i32 },
    /// The user asked to close the game.
    Quit,
}

/// Game loop state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoopState {
    #[default]
    Running,
    Quit,
}

/// Top-left pixel of tile `index` in row-major order.
///
/// ```
/// use tui_tictactoe_types::tile_origin;
///
/// assert_eq!(tile_origin(0), (0, 0));
/// assert_eq!(tile_origin(5), (400, 200));
/// assert_eq!(tile_origin(8), (400, 400));
/// ```
pub const fn tile_origin(index: usize) -> (i32, i32) {
    let col = (index % GRID_SIZE) as i32;
    let row = (index / GRID_SIZE) as i32;
    (col * TILE_WIDTH, row * TILE_HEIGHT)
}

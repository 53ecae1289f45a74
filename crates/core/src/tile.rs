//! Tile module - one clickable region of the board.

use crate::types::{Mark, Player, TILE_HEIGHT, TILE_WIDTH};

/// Something that can draw a player's mark at a pixel position.
///
/// The terminal surface implements this with the X/O textures; tests use a
/// recorder.
pub trait MarkPainter {
    fn paint(&mut self, player: Player, x: i32, y: i32);
}

/// A single `TILE_WIDTH` x `TILE_HEIGHT` tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Tile {
    x: i32,
    y: i32,
    mark: Mark,
    /// Presses that landed inside the bounds, claimed or not.
    presses: u32,
}

impl Tile {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign the top-left pixel. Only called while laying out the board.
    pub fn set_position(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn mark(&self) -> Mark {
        self.mark
    }

    /// Number of presses this tile has seen inside its bounds.
    pub fn presses(&self) -> u32 {
        self.presses
    }

    pub fn is_open(&self) -> bool {
        self.mark.is_empty()
    }

    /// Boundary-inclusive point test against `[x, x+W] x [y, y+H]`.
    #[inline(always)]
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && px <= self.x + TILE_WIDTH && py >= self.y && py <= self.y + TILE_HEIGHT
    }

    /// Offer a click to this tile.
    ///
    /// `turn` is `None` when another tile already claimed the press; the tile
    /// still sees it but cannot accept. Returns the next player when the click
    /// is accepted: a turn was offered, the tile was still open and the point
    /// lies inside it. The tile then carries `turn`'s mark forever. Rejected
    /// clicks leave the mark untouched and return `None`.
    pub fn handle_click(&mut self, px: i32, py: i32, turn: Option<Player>) -> Option<Player> {
        if !self.contains(px, py) {
            return None;
        }
        self.presses += 1;
        let turn = turn.filter(|_| self.is_open())?;
        self.mark = turn.mark();
        Some(turn.next())
    }

    /// Draw this tile's mark, if any. Empty tiles draw nothing; the grid
    /// background already shows them.
    pub fn render<P: MarkPainter + ?Sized>(&self, painter: &mut P) {
        match self.mark {
            Mark::X => painter.paint(Player::X, self.x, self.y),
            Mark::O => painter.paint(Player::O, self.x, self.y),
            Mark::Empty => {}
        }
    }
}

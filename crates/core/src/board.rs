//! Board module - the nine tiles and whose turn it is
//!
//! Tiles are stored row-major: index 0 is the top-left tile, index 8 the
//! bottom-right one. Positions are assigned once in [`Board::new`].
//! The board also remembers the order in which tiles were claimed, which makes
//! the "first N clicked tiles are marked" invariant checkable.

use arrayvec::ArrayVec;

use crate::snapshot::BoardSnapshot;
use crate::tile::{MarkPainter, Tile};
use crate::types::{tile_origin, GameEvent, Mark, Player, TILE_COUNT};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    tiles: [Tile; TILE_COUNT],
    turn: Player,
    /// Tile indices in the order they were claimed.
    moves: ArrayVec<u8, TILE_COUNT>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create an empty board with X to move.
    pub fn new() -> Self {
        let mut tiles = [Tile::new(); TILE_COUNT];
        for (i, tile) in tiles.iter_mut().enumerate() {
            let (x, y) = tile_origin(i);
            tile.set_position(x, y);
        }
        Self {
            tiles,
            turn: Player::X,
            moves: ArrayVec::new(),
        }
    }

    /// Player whose mark the next accepted click places.
    pub fn turn(&self) -> Player {
        self.turn
    }

    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    /// Mark of tile `index`, `None` if out of range.
    pub fn mark(&self, index: usize) -> Option<Mark> {
        self.tiles.get(index).map(Tile::mark)
    }

    /// Claimed tile indices, oldest first.
    pub fn moves(&self) -> &[u8] {
        &self.moves
    }

    pub fn turns_taken(&self) -> usize {
        self.moves.len()
    }

    pub fn is_full(&self) -> bool {
        self.moves.is_full()
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.tiles.iter().filter(|t| t.mark() == mark).count()
    }

    /// Offer a pointer press to every tile in index order.
    ///
    /// All nine tiles see the press; the loop never exits early. Once a tile
    /// has claimed it, the remaining tiles are offered the press without a
    /// turn, so at most one tile changes per press even on shared edges.
    /// Returns the claimed index.
    pub fn handle_pointer(&mut self, x: i32, y: i32) -> Option<usize> {
        let mut claimed = None;
        for (i, tile) in self.tiles.iter_mut().enumerate() {
            let turn = claimed.is_none().then_some(self.turn);
            if let Some(next) = tile.handle_click(x, y, turn) {
                self.turn = next;
                claimed = Some(i);
            }
        }
        if let Some(i) = claimed {
            self.moves.push(i as u8);
        }
        claimed
    }

    /// Apply a game event. Only pointer presses touch the board.
    pub fn handle_event(&mut self, event: &GameEvent) -> Option<usize> {
        match *event {
            GameEvent::PointerDown { x, y } => self.handle_pointer(x, y),
            GameEvent::Quit => None,
        }
    }

    /// Draw every tile in index order.
    pub fn render<P: MarkPainter + ?Sized>(&self, painter: &mut P) {
        for tile in &self.tiles {
            tile.render(painter);
        }
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        let mut marks = [Mark::Empty; TILE_COUNT];
        for (dst, tile) in marks.iter_mut().zip(self.tiles.iter()) {
            *dst = tile.mark();
        }
        BoardSnapshot {
            marks,
            turn: self.turn,
            moves: self.moves.clone(),
        }
    }
}

use std::fmt;

use arrayvec::ArrayVec;

use crate::types::{Mark, Player, GRID_SIZE, TILE_COUNT};

/// Copy of the board state at one point in time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardSnapshot {
    pub marks: [Mark; TILE_COUNT],
    pub turn: Player,
    pub moves: ArrayVec<u8, TILE_COUNT>,
}

impl BoardSnapshot {
    pub fn turns_taken(&self) -> usize {
        self.moves.len()
    }

    /// Row `r` as three characters, e.g. `"XO."`.
    pub fn row(&self, r: usize) -> String {
        self.marks[r * GRID_SIZE..(r + 1) * GRID_SIZE]
            .iter()
            .map(Mark::as_char)
            .collect()
    }
}

/// Renders rows separated by `/`, e.g. `XO./.../...`.
impl fmt::Display for BoardSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..GRID_SIZE {
            if r > 0 {
                f.write_str("/")?;
            }
            f.write_str(&self.row(r))?;
        }
        Ok(())
    }
}

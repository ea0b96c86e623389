//! Fixed-size grid of stones

use super::{Pos, Stone, GRID_SIZE};

/// Game board: one `Stone` per cell, never resized
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [[Stone; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Stone::Empty; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Get stone at signed coordinates, `None` when off the board
    #[inline]
    pub fn get_checked(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::checked(row, col).map(|pos| self.get(pos))
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Stone::Empty
    }

    /// Place a stone. The caller guarantees the cell is empty.
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "stone already at {:?}", pos);
        self.cells[pos.row as usize][pos.col as usize] = stone;
    }

    /// Total stones on board
    pub fn stone_count(&self) -> u32 {
        self.cells
            .iter()
            .flatten()
            .filter(|&&s| s != Stone::Empty)
            .count() as u32
    }

    /// Check if board is empty
    pub fn is_board_empty(&self) -> bool {
        self.stone_count() == 0
    }

    /// No empty cell left
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&s| s != Stone::Empty)
    }

    /// Iterate over the empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&pos| self.is_empty(pos))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

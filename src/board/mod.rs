//! Board representation for Gomoku

pub mod board;


// Re-exports
pub use board::Board;

/// Board size (15x15)
pub const GRID_SIZE: usize = 15;
pub const TOTAL_CELLS: usize = GRID_SIZE * GRID_SIZE; // 225

/// Pixel size of one board cell in the window
pub const CELL_SIZE: i32 = 40;

/// Search depth of the advertised minimax. The engine only looks one ply ahead.
pub const MAX_DEPTH: u8 = 4;

/// Stone colors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Stone {
    #[default]
    Empty,
    Black,
    White,
}

impl Stone {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Stone {
        match self {
            Stone::Black => Stone::White,
            Stone::White => Stone::Black,
            Stone::Empty => Stone::Empty,
        }
    }

    /// Name used in the winner announcement
    pub fn player_label(self) -> &'static str {
        match self {
            Stone::Black => "Black (Player)",
            Stone::White => "White (AI)",
            Stone::Empty => "Nobody",
        }
    }
}

/// Position on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pos {
    pub row: u8,
    pub col: u8,
}

impl Pos {
    #[inline]
    pub fn new(row: u8, col: u8) -> Self {
        debug_assert!(row < GRID_SIZE as u8 && col < GRID_SIZE as u8);
        Self { row, col }
    }

    /// Checked constructor from signed coordinates
    #[inline]
    pub fn checked(row: i32, col: i32) -> Option<Self> {
        if Self::is_valid(row, col) {
            Some(Self::new(row as u8, col as u8))
        } else {
            None
        }
    }

    #[inline]
    pub fn to_index(self) -> usize {
        self.row as usize * GRID_SIZE + self.col as usize
    }

    #[inline]
    pub fn from_index(idx: usize) -> Self {
        Self {
            row: (idx / GRID_SIZE) as u8,
            col: (idx % GRID_SIZE) as u8,
        }
    }

    #[inline]
    pub fn is_valid(row: i32, col: i32) -> bool {
        row >= 0 && row < GRID_SIZE as i32 && col >= 0 && col < GRID_SIZE as i32
    }

    /// Iterate every cell in row-major order
    pub fn all() -> impl Iterator<Item = Pos> {
        (0..TOTAL_CELLS).map(Pos::from_index)
    }
}

impl PartialOrd for Pos {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Pos {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.to_index().cmp(&other.to_index())
    }
}

/// Signed (row, col) of the cell under a pixel, `pixel / CELL_SIZE` floored.
///
/// Off-board pixels give off-board coordinates (negative pixels go below 0).
#[inline]
pub fn pixel_to_coords(x: i32, y: i32) -> (i32, i32) {
    (y.div_euclid(CELL_SIZE), x.div_euclid(CELL_SIZE))
}

/// Map a pixel inside the board area to its cell.
///
/// Negative pixels and pixels past the last cell map to `None`.
pub fn pixel_to_cell(x: i32, y: i32) -> Option<Pos> {
    let (row, col) = pixel_to_coords(x, y);
    Pos::checked(row, col)
}

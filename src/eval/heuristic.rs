//! Per-cell heuristic scoring
//!
//! Every empty cell receives a desirability score built from the stones
//! adjacent to it along four orientations. For each orientation a short walk
//! of at most four cells is made in both senses, once counting black stones
//! and once counting white stones. A walk ends at the first empty cell
//! (counted as an open end), the first stone of the other color, or the edge
//! of the board.
//!
//! Both counts add into the same cell: a cell scores highly for White when it
//! extends White's lines and also when it sits on Black's lines.

use crate::board::{Board, Pos, Stone, GRID_SIZE};

use super::patterns::{black_line_score, white_line_score};

/// Scan orientations: anti-diagonal, vertical, diagonal, horizontal.
/// Each is walked in both senses, so every line through a cell is seen once.
const ORIENTATIONS: [(i32, i32); 4] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
];

/// Maximum steps taken from the cell in each sense
const WALK_LENGTH: i32 = 4;

/// Stones and open ends counted along one orientation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineCount {
    pub stones: u32,
    pub empties: u32,
}

/// Walk both senses of (dr, dc) from `pos`, counting `color` stones.
fn count_line(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> LineCount {
    let mut count = LineCount::default();
    for sign in [1, -1] {
        for i in 1..=WALK_LENGTH {
            let r = pos.row as i32 + sign * i * dr;
            let c = pos.col as i32 + sign * i * dc;
            match board.get_checked(r, c) {
                Some(s) if s == color => count.stones += 1,
                Some(Stone::Empty) => {
                    count.empties += 1;
                    break;
                }
                // Other color or off the board
                _ => break,
            }
        }
    }
    count
}

/// Heuristic score of a single cell. Occupied cells score 0.
#[must_use]
pub fn score_cell(board: &Board, pos: Pos) -> i32 {
    if !board.is_empty(pos) {
        return 0;
    }

    ORIENTATIONS
        .iter()
        .map(|&(dr, dc)| {
            let black = count_line(board, pos, dr, dc, Stone::Black);
            let white = count_line(board, pos, dr, dc, Stone::White);
            black_line_score(black.stones, black.empties)
                + white_line_score(white.stones, white.empties)
        })
        .sum()
}

/// 15x15 grid of cell scores, valid until the next board mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreGrid {
    cells: [[i32; GRID_SIZE]; GRID_SIZE],
}

impl ScoreGrid {
    /// All-zero grid
    pub fn new() -> Self {
        Self {
            cells: [[0; GRID_SIZE]; GRID_SIZE],
        }
    }

    /// Score grid for `board`
    pub fn from_board(board: &Board) -> Self {
        let mut grid = Self::new();
        grid.recompute(board);
        grid
    }

    /// Zero the grid and score every empty cell of `board`.
    pub fn recompute(&mut self, board: &Board) {
        self.cells = [[0; GRID_SIZE]; GRID_SIZE];
        for pos in board.empty_cells() {
            self.cells[pos.row as usize][pos.col as usize] = score_cell(board, pos);
        }
    }

    #[inline]
    pub fn get(&self, pos: Pos) -> i32 {
        self.cells[pos.row as usize][pos.col as usize]
    }

    /// Highest score in the grid, floored at 0
    pub fn max_score(&self) -> i32 {
        self.cells.iter().flatten().copied().fold(0, i32::max)
    }

    /// Iterate `(pos, score)` in row-major order
    pub fn iter(&self) -> impl Iterator<Item = (Pos, i32)> + '_ {
        Pos::all().map(move |pos| (pos, self.get(pos)))
    }
}

impl Default for ScoreGrid {
    fn default() -> Self {
        Self::new()
    }
}

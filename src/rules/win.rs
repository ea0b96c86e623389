//! Win condition checking for five-in-a-row
//!
//! A win is five or more contiguous stones of one color along a row, a
//! column or either diagonal. Only lines through the last placed stone are
//! examined, since no other placement can have created a new run.

use crate::board::{Board, Pos, Stone};

/// Direction vectors for line checking (4 directions)
const DIRECTIONS: [(i32, i32); 4] = [
    (1, 0),  // Vertical
    (0, 1),  // Horizontal
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal SW
];

/// Stones needed in a row to win
pub const WIN_LENGTH: usize = 5;

/// Count stones equal to `color` starting one step from `pos` along (dr, dc).
///
/// Stops at the first off-board cell or the first cell holding anything else.
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, color: Stone) -> usize {
    let mut count = 0;
    let mut r = pos.row as i32 + dr;
    let mut c = pos.col as i32 + dc;
    while board.get_checked(r, c) == Some(color) {
        count += 1;
        r += dr;
        c += dc;
    }
    count
}

/// Check whether the stone at `pos` is part of a run of five or more.
///
/// Scans the four orientations through `pos`, counting forward and backward
/// independently. An empty cell never wins.
#[inline]
pub fn check_win(board: &Board, pos: Pos) -> bool {
    let color = board.get(pos);
    if color == Stone::Empty {
        return false;
    }
    DIRECTIONS.iter().any(|&(dr, dc)| {
        1 + run_length(board, pos, dr, dc, color) + run_length(board, pos, -dr, -dc, color)
            >= WIN_LENGTH
    })
}

/// Find the winning line through `pos`, if any.
///
/// Returns the first five stones of the run in board order (from the
/// backward end of the scan).
pub fn find_winning_line(board: &Board, pos: Pos) -> Option<[Pos; WIN_LENGTH]> {
    let color = board.get(pos);
    if color == Stone::Empty {
        return None;
    }

    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, -dr, -dc, color);
        let forward = run_length(board, pos, dr, dc, color);
        if 1 + back + forward < WIN_LENGTH {
            continue;
        }

        // Start of the run; every step stays on the board because it was
        // just walked by `run_length`.
        let start_r = pos.row as i32 - dr * back as i32;
        let start_c = pos.col as i32 - dc * back as i32;
        let mut line = [pos; WIN_LENGTH];
        for (i, slot) in line.iter_mut().enumerate() {
            let r = start_r + dr * i as i32;
            let c = start_c + dc * i as i32;
            *slot = Pos::checked(r, c)?;
        }
        return Some(line);
    }
    None
}

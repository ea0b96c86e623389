//! Move validity

use crate::board::{Board, Pos};

/// A move is valid iff it is on the board and the cell is empty.
///
/// Takes signed coordinates so that raw click positions can be checked
/// without a prior conversion.
#[inline]
pub fn is_valid_move(board: &Board, row: i32, col: i32) -> bool {
    Pos::checked(row, col).is_some_and(|pos| board.is_empty(pos))
}

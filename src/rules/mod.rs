//! Game rules for Gomoku
//!
//! This module implements the rule set:
//! - Move validity (on the board, target cell empty)
//! - Win condition (5 or more in a row through the last stone)

pub mod validity;
pub mod win;

// Re-exports for convenient access
pub use validity::is_valid_move;
pub use win::{check_win, find_winning_line, WIN_LENGTH};

//! Evaluation module for Gomoku positions
//!
//! This module scores every empty cell from the line patterns around it.
//! The evaluation considers:
//! - Black lines the cell would extend or block
//! - White lines the cell would extend
//! - Open ends of three-stone lines

pub mod heuristic;
pub mod patterns;

pub use heuristic::{score_cell, LineCount, ScoreGrid};
pub use patterns::{black_line_score, white_line_score, PatternScore};

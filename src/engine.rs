//! AI move selection
//!
//! The engine scores every empty cell with the heuristic in [`crate::eval`]
//! and plays one of the best-scoring cells. Ties are broken uniformly at
//! random with a seedable generator, so games replay exactly for a fixed
//! seed.
//!
//! # Example
//!
//! ```
//! use gomoku::{AIEngine, Board, Stone, Pos};
//!
//! let mut engine = AIEngine::with_seed(42);
//! let mut board = Board::new();
//! board.place_stone(Pos::new(7, 7), Stone::Black);
//!
//! let result = engine.get_move_with_stats(&board);
//! println!("Best move: {:?}", result.best_move);
//! println!("Score: {} ({} candidates)", result.score, result.candidates);
//! ```

use crate::board::{Board, Pos};
use crate::eval::ScoreGrid;
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::time::Instant;

/// Result of a move selection with statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// Chosen move, `None` when no empty cell is left
    pub best_move: Option<Pos>,
    /// Heuristic score of the chosen cell
    pub score: i32,
    /// Number of cells that shared the best score
    pub candidates: usize,
    /// Time taken in milliseconds
    pub time_ms: u64,
}

impl MoveResult {
    /// Create a result indicating no move found
    #[inline]
    fn no_move(time_ms: u64) -> Self {
        Self {
            best_move: None,
            score: 0,
            candidates: 0,
            time_ms,
        }
    }
}

/// Empty cells whose score equals the grid maximum.
///
/// The maximum starts at 0, so an empty cell scoring 0 is a candidate when
/// nothing scores higher.
pub fn candidate_moves(grid: &ScoreGrid, board: &Board) -> Vec<Pos> {
    let best = grid.max_score();
    grid.iter()
        .filter(|&(pos, score)| score == best && board.is_empty(pos))
        .map(|(pos, _)| pos)
        .collect()
}

/// Pick one candidate uniformly at random.
pub fn select_move<R: Rng + ?Sized>(grid: &ScoreGrid, board: &Board, rng: &mut R) -> Option<Pos> {
    candidate_moves(grid, board).choose(rng).copied()
}

/// Heuristic AI engine for the White side.
///
/// Owns the score grid it recomputes before each decision and the random
/// generator used to break ties.
pub struct AIEngine {
    rng: SmallRng,
    scores: ScoreGrid,
}

impl AIEngine {
    /// Create an engine seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_entropy(),
            scores: ScoreGrid::new(),
        }
    }

    /// Create an engine with a fixed seed (deterministic tie-breaking).
    ///
    /// ```
    /// use gomoku::{AIEngine, Board};
    ///
    /// let board = Board::new();
    /// let a = AIEngine::with_seed(7).get_move(&board);
    /// let b = AIEngine::with_seed(7).get_move(&board);
    /// assert_eq!(a, b);
    /// ```
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
            scores: ScoreGrid::new(),
        }
    }

    /// Get the move for the given position.
    ///
    /// Convenience wrapper around [`AIEngine::get_move_with_stats`].
    pub fn get_move(&mut self, board: &Board) -> Option<Pos> {
        self.get_move_with_stats(board).best_move
    }

    /// Recompute the score grid and choose among the best cells.
    pub fn get_move_with_stats(&mut self, board: &Board) -> MoveResult {
        let start = Instant::now();

        self.scores.recompute(board);
        let candidates = candidate_moves(&self.scores, board);

        let Some(&pos) = candidates.choose(&mut self.rng) else {
            return MoveResult::no_move(start.elapsed().as_millis() as u64);
        };

        MoveResult {
            best_move: Some(pos),
            score: self.scores.get(pos),
            candidates: candidates.len(),
            time_ms: start.elapsed().as_millis() as u64,
        }
    }

    /// Scores from the last decision
    pub fn scores(&self) -> &ScoreGrid {
        &self.scores
    }
}

impl Default for AIEngine {
    fn default() -> Self {
        Self::new()
    }
}

//! Gomoku on a 15x15 board against a heuristic AI
//!
//! Five in a row wins. The human plays Black and moves first; the AI plays
//! White.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//! - [`board`]: Board representation and constants
//! - [`rules`]: Move validity and win detection
//! - [`eval`]: Per-cell heuristic scoring
//! - [`engine`]: AI move selection among the best-scoring cells
//! - [`game_state`]: Turn state machine driving a game
//! - [`ui`]: egui/eframe front end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameConfig, GameState, Stone};
//! use std::time::Duration;
//!
//! let mut game = GameState::new(GameConfig {
//!     ai_delay: Duration::ZERO,
//!     seed: Some(1),
//! });
//!
//! // Human plays the center, then the AI replies
//! game.try_place_stone(7, 7).unwrap();
//! let reply = game.play_ai_move().unwrap();
//! println!("AI plays {:?}", reply.best_move);
//! assert_eq!(game.current_player(), Stone::Black);
//! ```
//!
//! # How the AI chooses
//!
//! There is no look-ahead. Every empty cell is scored from the stones
//! around it along the four line orientations, counting both the human's
//! and its own lines, and one of the top-scoring cells is picked at random.

pub mod board;
pub mod engine;
pub mod eval;
pub mod game_state;
pub mod rules;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Pos, Stone, CELL_SIZE, GRID_SIZE, MAX_DEPTH};
pub use engine::{AIEngine, MoveResult};
pub use game_state::{GameConfig, GameResult, GameState, MoveError, Phase};

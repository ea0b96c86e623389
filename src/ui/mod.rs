//! GUI module for the Gomoku game
//!
//! This module provides a native Rust GUI using egui/eframe.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
pub use board_view::BOARD_PIXELS;

//! Gomoku GUI
//!
//! Play Black against the heuristic AI in a native window.

use gomoku::ui::{GomokuApp, BOARD_PIXELS};
use gomoku::GameConfig;

fn main() -> Result<(), eframe::Error> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let width = BOARD_PIXELS + 300.0;
    let height = BOARD_PIXELS + 80.0;
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_min_inner_size([width, height])
            .with_title("Gomoku"),
        ..Default::default()
    };

    eframe::run_native(
        "Gomoku",
        options,
        Box::new(|cc| Ok(Box::new(GomokuApp::new(cc, GameConfig::default())))),
    )
}

//! Main application for the Gomoku GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};
use std::time::Instant;

use super::board_view::BoardView;
use super::theme::*;
use crate::game_state::{GameConfig, GameResult, GameState};
use crate::Stone;

/// Main Gomoku application
pub struct GomokuApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl GomokuApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: GameConfig) -> Self {
        Self {
            state: GameState::new(config),
            board_view: BoardView::default(),
            show_debug: true,
        }
    }

    fn new_game(&mut self) {
        if !self.state.can_start_new_game() {
            log::debug!("new game ignored while the AI move is pending");
            return;
        }
        self.state = GameState::new(*self.state.config());
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    let new_game = ui.add_enabled(
                        self.state.can_start_new_game(),
                        egui::Button::new("New Game (N)"),
                    );
                    if new_game.clicked() {
                        self.new_game();
                        ui.close_menu();
                    }
                    ui.separator();
                    if ui.button("Quit").clicked() {
                        ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "AI Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.label("You: Black  -  AI: White");
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_title_card(ui);
                ui.add_space(12.0);
                self.render_turn_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_ai_card(ui);
                }

                if let Some(result) = self.state.game_over() {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("GOMOKU").size(22.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("Five in a row, 15x15").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let is_black = self.state.current_player() == Stone::Black;
            let (color_name, accent, stone_color) = if is_black {
                ("BLACK", BLACK_STONE, BLACK_STONE_HIGHLIGHT)
            } else {
                ("WHITE", WHITE_STONE, WHITE_STONE_SHADOW)
            };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(48.0, 48.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, accent);
                ui.painter().circle_stroke(rect.center(), 20.0, egui::Stroke::new(2.0, stone_color));

                ui.add_space(12.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    ui.label(RichText::new(color_name).size(18.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.game_over().is_some() {
                        ("Game Over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_turn() {
                        ("AI thinking...", STATUS_WAITING)
                    } else {
                        ("Your turn", STATUS_READY)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });

            ui.add_space(6.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render the last AI decision
    fn render_ai_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let Some(result) = &self.state.last_ai_result else {
                ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                return;
            };

            ui.label(RichText::new(format!("Score: {}", result.score)).size(11.0).strong().color(STATUS_READY));
            ui.label(
                RichText::new(format!("{} tied candidates", result.candidates))
                    .size(10.0)
                    .color(TEXT_SECONDARY),
            );
            ui.label(RichText::new(format!("{}ms", result.time_ms)).size(10.0).color(TEXT_MUTED));

            if let Some(pos) = result.best_move {
                ui.add_space(4.0);
                ui.label(
                    RichText::new(format!("-> row {}, col {}", pos.row, pos.col))
                        .size(12.0)
                        .strong()
                        .color(WIN_HIGHLIGHT),
                );
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        Frame::new()
            .fill(egui::Color32::from_rgb(45, 80, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(16.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(12.0).color(egui::Color32::from_rgb(180, 255, 180)));
                    ui.add_space(8.0);
                    ui.label(RichText::new(result.winner.player_label()).size(18.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("WINS!").size(14.0).color(WIN_HIGHLIGHT));
                    ui.add_space(12.0);

                    if ui.button(RichText::new("New Game").size(14.0).strong()).clicked() {
                        self.new_game();
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(egui::Color32::from_rgb(40, 42, 46)).inner_margin(20.0))
            .show(ctx, |ui| {
                let winning_line = self.state.game_over().and_then(|r| r.winning_line);

                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.last_move,
                    winning_line,
                    self.state.is_human_turn(),
                );

                if let Some((x, y)) = clicked {
                    match self.state.handle_mouse_click(x, y) {
                        // Show the human stone before the AI's pacing delay starts counting
                        Ok(()) => ui.ctx().request_repaint(),
                        Err(err) => log::debug!("click at ({}, {}) ignored: {}", x, y, err),
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        let (toggle_debug, new_game) =
            ctx.input(|i| (i.key_pressed(egui::Key::D), i.key_pressed(egui::Key::N)));

        if toggle_debug {
            self.show_debug = !self.show_debug;
        }
        if new_game {
            self.new_game();
        }
    }
}

impl eframe::App for GomokuApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        // The AI moves only once its pacing delay is over
        self.state.tick(Instant::now());

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        if let Some(remaining) = self.state.ai_wait_remaining(Instant::now()) {
            ctx.request_repaint_after(remaining);
        }
    }
}

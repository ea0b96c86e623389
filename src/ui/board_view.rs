//! Board rendering for the Gomoku GUI
//!
//! The board occupies exactly `GRID_SIZE * CELL_SIZE` pixels. Grid lines run
//! through the cell centers and stones sit on the intersections, so a click
//! anywhere inside a cell lands on that cell's intersection.

use crate::board::{pixel_to_cell, Board, Pos, Stone, CELL_SIZE, GRID_SIZE};
use crate::rules::{is_valid_move, WIN_LENGTH};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Side length of the board area in pixels
pub const BOARD_PIXELS: f32 = (GRID_SIZE as i32 * CELL_SIZE) as f32;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked pixel, relative to the board
    /// origin, if the human clicked while it is their turn.
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; WIN_LENGTH]>,
        accepting_input: bool,
    ) -> Option<(i32, i32)> {
        let (response, painter) =
            ui.allocate_painter(Vec2::splat(BOARD_PIXELS), Sense::click());
        self.board_rect = response.rect;

        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);
        self.draw_grid(&painter);
        self.draw_star_points(&painter);
        self.draw_stones(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }
        if let Some(line) = winning_line {
            self.draw_winning_line(&painter, &line);
        }

        if !accepting_input {
            return None;
        }

        // Hover preview
        if let Some(pointer_pos) = response.hover_pos() {
            let (x, y) = self.to_board_pixels(pointer_pos);
            if let Some(pos) = pixel_to_cell(x, y) {
                let valid = is_valid_move(board, pos.row as i32, pos.col as i32);
                self.draw_hover_preview(&painter, pos, valid);
            }
        }

        if response.clicked() {
            return response
                .interact_pointer_pos()
                .map(|pointer| self.to_board_pixels(pointer));
        }
        None
    }

    /// Draw the 15x15 grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let half = CELL_SIZE as f32 / 2.0;
        let far = BOARD_PIXELS - half;

        for i in 0..GRID_SIZE {
            let offset = half + (i as i32 * CELL_SIZE) as f32;

            // Vertical line
            let start = self.board_rect.min + Vec2::new(offset, half);
            let end = self.board_rect.min + Vec2::new(offset, far);
            painter.line_segment([start, end], stroke);

            // Horizontal line
            let start = self.board_rect.min + Vec2::new(half, offset);
            let end = self.board_rect.min + Vec2::new(far, offset);
            painter.line_segment([start, end], stroke);
        }
    }

    /// Draw star points (hoshi)
    fn draw_star_points(&self, painter: &Painter) {
        for (row, col) in STAR_POINTS {
            let center = self.board_to_screen(Pos::new(row, col));
            painter.circle_filled(center, STAR_POINT_RADIUS, STAR_POINT);
        }
    }

    /// Draw all placed stones
    fn draw_stones(&self, painter: &Painter, board: &Board) {
        for pos in Pos::all() {
            let stone = board.get(pos);
            if stone != Stone::Empty {
                self.draw_stone(painter, pos, stone);
            }
        }
    }

    fn draw_stone(&self, painter: &Painter, pos: Pos, stone: Stone) {
        let center = self.board_to_screen(pos);
        let radius = CELL_SIZE as f32 * STONE_RADIUS_RATIO;
        let shadow_offset = Vec2::new(2.0, 2.0);

        match stone {
            Stone::Black => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 60),
                );
                painter.circle_filled(center, radius, BLACK_STONE);
                painter.circle_filled(
                    center + Vec2::new(-radius * 0.3, -radius * 0.3),
                    radius * 0.2,
                    BLACK_STONE_HIGHLIGHT,
                );
            }
            Stone::White => {
                painter.circle_filled(
                    center + shadow_offset,
                    radius,
                    Color32::from_rgba_unmultiplied(0, 0, 0, 40),
                );
                painter.circle_filled(center, radius, WHITE_STONE);
                painter.circle_stroke(
                    center,
                    radius * 0.85,
                    Stroke::new(radius * 0.1, WHITE_STONE_SHADOW),
                );
            }
            Stone::Empty => {}
        }
    }

    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let center = self.board_to_screen(pos);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    fn draw_winning_line(&self, painter: &Painter, line: &[Pos; WIN_LENGTH]) {
        let stroke = Stroke::new(4.0, WIN_HIGHLIGHT);

        for pair in line.windows(2) {
            let start = self.board_to_screen(pair[0]);
            let end = self.board_to_screen(pair[1]);
            painter.line_segment([start, end], stroke);
        }

        let radius = CELL_SIZE as f32 * STONE_RADIUS_RATIO + 3.0;
        for pos in line {
            painter.circle_stroke(self.board_to_screen(*pos), radius, stroke);
        }
    }

    /// Translucent black stone under the pointer, red when the cell is taken
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, valid: bool) {
        let center = self.board_to_screen(pos);
        let radius = CELL_SIZE as f32 * STONE_RADIUS_RATIO;
        let color = if valid { hover_valid() } else { hover_invalid() };
        painter.circle_filled(center, radius, color);
    }

    /// Screen position to whole pixels relative to the board's top-left corner
    fn to_board_pixels(&self, screen_pos: Pos2) -> (i32, i32) {
        let relative = screen_pos - self.board_rect.min;
        (relative.x.floor() as i32, relative.y.floor() as i32)
    }

    /// Center of a cell in screen coordinates
    pub fn board_to_screen(&self, pos: Pos) -> Pos2 {
        let half = CELL_SIZE as f32 / 2.0;
        let x = self.board_rect.min.x + (pos.col as i32 * CELL_SIZE) as f32 + half;
        let y = self.board_rect.min.y + (pos.row as i32 * CELL_SIZE) as f32 + half;
        Pos2::new(x, y)
    }
}

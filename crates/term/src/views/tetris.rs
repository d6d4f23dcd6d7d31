//! Puzzle view: board, falling piece, next preview, and HUD.

use tui_arcade_core::tetris::{canonical_mask, TetrisGame};
use tui_arcade_types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::views::{border_style, draw_border, draw_overlay, hint_style, label_style, value_style};

/// Renders a puzzle session into a framebuffer.
pub struct TetrisView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for TetrisView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl TetrisView {
    pub fn render(&self, game: &TetrisGame, fb: &mut FrameBuffer) {
        fb.clear(' ', CellStyle::default());

        let board_px_w = (BOARD_WIDTH as u16) * self.cell_w;
        let board_px_h = (BOARD_HEIGHT as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = fb.width().saturating_sub(frame_w + 14) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        let well = CellStyle::fg_on(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', well);
        draw_border(fb, start_x, start_y, frame_w, frame_h, border_style());

        // Locked cells.
        for y in 0..BOARD_HEIGHT as i8 {
            for x in 0..BOARD_WIDTH as i8 {
                match game.board().get(x, y).flatten() {
                    Some(kind) => {
                        self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, kind)
                    }
                    None => self.draw_empty_cell(fb, start_x, start_y, x as u16, y as u16),
                }
            }
        }

        // Falling piece; rows above the top stay hidden.
        for (x, y) in game.piece().cells() {
            if x >= 0 && x < BOARD_WIDTH as i8 && y >= 0 && y < BOARD_HEIGHT as i8 {
                self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, game.piece().kind);
            }
        }

        self.draw_side_panel(fb, game, start_x + frame_w + 2, start_y);

        fb.put_str_centered(
            start_x,
            start_y + frame_h,
            frame_w,
            "←/→ move  ↑ rotate  ↓ soft  space drop",
            hint_style(),
        );

        if game.game_over() {
            draw_overlay(
                fb,
                start_x,
                start_y,
                frame_w,
                frame_h,
                &["GAME OVER", "", "ENTER restart - ESC menu"],
            );
        }
    }

    fn cell_origin(&self, start_x: u16, start_y: u16, x: u16, y: u16) -> (u16, u16) {
        (
            start_x + 1 + x * self.cell_w,
            start_y + 1 + y * self.cell_h,
        )
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle::fg_on(piece_color(kind), Rgb::new(30, 30, 40)).bold();
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle::fg_on(Rgb::new(90, 90, 100), Rgb::new(30, 30, 40)).dim();
        let (px, py) = self.cell_origin(start_x, start_y, x, y);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, '·', style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, game: &TetrisGame, panel_x: u16, start_y: u16) {
        if panel_x >= fb.width() {
            return;
        }

        let mut y = start_y;
        for (label, value) in [
            ("SCORE", game.score()),
            ("LEVEL", game.level()),
            ("LINES", game.lines()),
        ] {
            fb.put_str(panel_x, y, label, label_style());
            fb.put_str(panel_x, y + 1, &value.to_string(), value_style());
            y += 3;
        }

        fb.put_str(panel_x, y, "NEXT", label_style());
        let mask = canonical_mask(game.next_kind());
        let style = CellStyle::fg(piece_color(game.next_kind())).bold();
        for (my, row) in mask.iter().enumerate() {
            for (mx, &filled) in row.iter().enumerate() {
                if filled {
                    let px = panel_x + (mx as u16) * self.cell_w;
                    let py = y + 1 + my as u16;
                    fb.fill_rect(px, py, self.cell_w, 1, '█', style);
                }
            }
        }
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::Z => Rgb::new(220, 80, 80),
    }
}

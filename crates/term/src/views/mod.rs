//! Scene views: pure mappings from game state to a framebuffer.
//!
//! No I/O happens here, so every view can be unit-tested by rendering
//! into an off-screen buffer.

mod hangman;
mod invaders;
mod menu;
mod tetris;

pub use hangman::HangmanView;
pub use invaders::InvadersView;
pub use menu::MenuView;
pub use tetris::TetrisView;

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub(crate) fn label_style() -> CellStyle {
    CellStyle::fg(Rgb::new(220, 220, 220)).bold()
}

pub(crate) fn value_style() -> CellStyle {
    CellStyle::fg(Rgb::new(200, 200, 200))
}

pub(crate) fn hint_style() -> CellStyle {
    CellStyle::fg(Rgb::new(140, 140, 140)).dim()
}

pub(crate) fn border_style() -> CellStyle {
    CellStyle::fg(Rgb::new(200, 200, 200))
}

/// Draw a single-line box border.
pub(crate) fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
    if w < 2 || h < 2 {
        return;
    }

    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

/// Stack centered overlay lines in the middle of a frame.
pub(crate) fn draw_overlay(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, lines: &[&str]) {
    let style = CellStyle::fg(Rgb::new(255, 255, 255)).bold();
    let top = y + (h / 2).saturating_sub(lines.len() as u16 / 2);
    for (i, line) in lines.iter().enumerate() {
        fb.put_str_centered(x, top + i as u16, w, line, style);
    }
}

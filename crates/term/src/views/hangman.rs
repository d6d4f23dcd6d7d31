//! Word-game view: gallows, masked word, and used letters.

use tui_arcade_core::hangman::{HangmanGame, HangmanPhase};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::views::{border_style, draw_border, hint_style, label_style, value_style};

const PANEL_W: u16 = 44;
const PANEL_H: u16 = 18;

/// Renders a hangman round into a framebuffer.
#[derive(Default)]
pub struct HangmanView;

impl HangmanView {
    pub fn render(&self, game: &HangmanGame, fb: &mut FrameBuffer) {
        fb.clear(' ', CellStyle::default());

        let x = fb.width().saturating_sub(PANEL_W) / 2;
        let y = fb.height().saturating_sub(PANEL_H) / 2;

        draw_border(fb, x, y, PANEL_W, PANEL_H, border_style());
        fb.put_str_centered(x, y + 1, PANEL_W, "HANGMAN", label_style());

        self.draw_gallows(fb, x + 4, y + 3, game.mistakes());

        // Masked word, spaced out for readability.
        let spaced: String = game
            .masked_word()
            .chars()
            .flat_map(|ch| [ch, ' '])
            .collect();
        fb.put_str_centered(x, y + 11, PANEL_W, spaced.trim_end(), label_style());

        if !game.used_letters().is_empty() {
            let mut used = String::from("used: ");
            for &ch in game.used_letters() {
                used.push(ch);
                used.push(' ');
            }
            fb.put_str(x + 2, y + 13, used.trim_end(), value_style());
        }

        match game.phase() {
            HangmanPhase::Playing => {
                fb.put_str_centered(
                    x,
                    y + PANEL_H,
                    PANEL_W,
                    "type letters to guess - ESC menu",
                    hint_style(),
                );
            }
            HangmanPhase::Won => {
                fb.put_str_centered(
                    x,
                    y + 15,
                    PANEL_W,
                    "YOU WIN! - ENTER menu",
                    CellStyle::fg(Rgb::new(100, 220, 120)).bold(),
                );
            }
            HangmanPhase::Lost => {
                let reveal = format!("the word was {}", game.secret());
                fb.put_str_centered(
                    x,
                    y + 15,
                    PANEL_W,
                    "GAME OVER - ENTER menu",
                    CellStyle::fg(Rgb::new(220, 80, 80)).bold(),
                );
                fb.put_str_centered(x, y + 16, PANEL_W, &reveal, value_style());
            }
        }
    }

    /// One gallows part appears per mistake, head first.
    fn draw_gallows(&self, fb: &mut FrameBuffer, x: u16, y: u16, mistakes: u32) {
        let part = |shown: bool, ch: char| if shown { ch } else { ' ' };

        let style = CellStyle::fg(Rgb::new(180, 140, 90));
        let figure = CellStyle::fg(Rgb::new(160, 160, 170)).bold();

        fb.put_str(x, y, "┌────┐", style);
        fb.put_str(x, y + 1, "│    │", style);
        fb.put_str(x, y + 2, "│", style);
        fb.put_str(x, y + 3, "│", style);
        fb.put_str(x, y + 4, "│", style);
        fb.put_str(x, y + 5, "│", style);
        fb.put_str(x, y + 6, "┴──────", style);

        fb.put_char(x + 5, y + 2, part(mistakes >= 1, 'O'), figure);
        let arms: String = [
            part(mistakes >= 3, '/'),
            part(mistakes >= 2, '|'),
            part(mistakes >= 4, '\\'),
        ]
        .iter()
        .collect();
        fb.put_str(x + 4, y + 3, &arms, figure);
        let legs: String = [part(mistakes >= 5, '/'), ' ', part(mistakes >= 6, '\\')]
            .iter()
            .collect();
        fb.put_str(x + 4, y + 4, &legs, figure);
    }
}

//! Shooter view: scales the logical field onto the terminal grid.

use tui_arcade_core::invaders::{
    InvadersGame, InvadersPhase, BULLET_SPEED, FIELD_HEIGHT, FIELD_WIDTH, INVADER_WIDTH,
    PLAYER_WIDTH, PLAYER_Y,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::views::{border_style, draw_border, draw_overlay, hint_style, label_style};

/// Field units per terminal column / row.
const SCALE_X: f32 = 10.0;
const SCALE_Y: f32 = 20.0;

/// Renders a shooter session into a framebuffer.
#[derive(Default)]
pub struct InvadersView;

impl InvadersView {
    pub fn render(&self, game: &InvadersGame, fb: &mut FrameBuffer) {
        fb.clear(' ', CellStyle::default());

        let field_w = (FIELD_WIDTH / SCALE_X) as u16;
        let field_h = (FIELD_HEIGHT / SCALE_Y) as u16;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;
        let start_x = fb.width().saturating_sub(frame_w) / 2;
        let start_y = fb.height().saturating_sub(frame_h) / 2;

        draw_border(fb, start_x, start_y, frame_w, frame_h, border_style());

        match game.phase() {
            InvadersPhase::Title => {
                draw_overlay(
                    fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    &[
                        "INVADERS",
                        "",
                        "ENTER start",
                        "←/→ move - SPACE shoot - ESC menu",
                    ],
                );
                return;
            }
            InvadersPhase::GameOver => {
                let score_line = format!("GAME OVER - SCORE {}", game.score());
                draw_overlay(
                    fb,
                    start_x,
                    start_y,
                    frame_w,
                    frame_h,
                    &[&score_line, "", "ENTER play again - ESC menu"],
                );
                return;
            }
            InvadersPhase::Playing => {}
        }

        let cell = |fx: f32, fy: f32| -> (u16, u16) {
            (
                start_x + 1 + (fx / SCALE_X) as u16,
                start_y + 1 + (fy / SCALE_Y) as u16,
            )
        };

        // HUD inside the top of the field.
        fb.put_str(
            start_x + 2,
            start_y + 1,
            &format!("SCORE {}", game.score()),
            label_style(),
        );
        let lives = format!("LIVES {}", game.lives());
        fb.put_str(
            start_x + frame_w - 2 - lives.chars().count() as u16,
            start_y + 1,
            &lives,
            label_style(),
        );

        // Invader grid, colored by row value.
        let glyph_w = (INVADER_WIDTH / SCALE_X) as u16;
        for invader in game.invaders().iter().filter(|i| i.alive) {
            let (px, py) = cell(invader.x, invader.y);
            let color = match invader.points {
                30 => Rgb::new(220, 80, 80),
                20 => Rgb::new(230, 130, 180),
                _ => Rgb::new(100, 220, 120),
            };
            fb.fill_rect(px, py, glyph_w, 1, '▄', CellStyle::fg(color).bold());
        }

        // Bullets rise faster than a cell per tick; a tail keeps them
        // visible between rows.
        for bullet in game.bullets().iter().filter(|b| b.active) {
            let (px, py) = cell(bullet.x, bullet.y);
            fb.put_char(px, py, '│', CellStyle::fg(Rgb::new(100, 220, 120)));
            if bullet.y + BULLET_SPEED < FIELD_HEIGHT {
                let (tx, ty) = cell(bullet.x, bullet.y + BULLET_SPEED);
                if ty != py {
                    fb.put_char(tx, ty, '·', CellStyle::fg(Rgb::new(100, 220, 120)).dim());
                }
            }
        }

        // Player paddle.
        let paddle_w = (PLAYER_WIDTH / SCALE_X) as u16;
        let (px, py) = cell(game.player_x(), PLAYER_Y);
        fb.fill_rect(px, py, paddle_w, 1, '▀', CellStyle::default().bold());

        fb.put_str_centered(
            start_x,
            start_y + frame_h,
            frame_w,
            "←/→ move  SPACE shoot  ESC menu",
            hint_style(),
        );
    }
}

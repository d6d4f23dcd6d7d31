//! Invaders module - fixed-shooter engine
//!
//! A marching 5x11 invader grid, a player paddle, and a 10-slot bullet
//! arena. Entities live in fixed arrays with explicit alive/active flags;
//! no slot ever holds two logical entities and nothing is allocated during
//! play.
//!
//! Positions are f32 coordinates in a logical 800x600 field; the
//! presentation layer scales them to whatever it draws on. Movement
//! distances are per update step (the host runs a fixed timestep); the
//! march, fire-cooldown, and similar cadences accumulate the supplied
//! frame deltas in milliseconds.

use crate::types::InputFrame;

/// Logical field width
pub const FIELD_WIDTH: f32 = 800.0;
/// Logical field height
pub const FIELD_HEIGHT: f32 = 600.0;

pub const PLAYER_WIDTH: f32 = 60.0;
pub const PLAYER_HEIGHT: f32 = 20.0;
/// The paddle moves on a fixed horizontal rail near the bottom
pub const PLAYER_Y: f32 = FIELD_HEIGHT - 50.0;
/// Paddle speed per update step
pub const PLAYER_SPEED: f32 = 5.0;

pub const BULLET_WIDTH: f32 = 4.0;
pub const BULLET_HEIGHT: f32 = 15.0;
/// Bullet climb per update step
pub const BULLET_SPEED: f32 = 7.0;
/// Bullet arena capacity
pub const MAX_BULLETS: usize = 10;

pub const INVADER_ROWS: usize = 5;
pub const INVADER_COLS: usize = 11;
pub const INVADER_COUNT: usize = INVADER_ROWS * INVADER_COLS;
pub const INVADER_WIDTH: f32 = 40.0;
pub const INVADER_HEIGHT: f32 = 30.0;
pub const INVADER_PADDING: f32 = 10.0;

/// Horizontal margin that turns the march around
const SIDE_MARGIN: f32 = 10.0;
/// Horizontal march distance per step
const MARCH_STEP: f32 = 10.0;
/// Descent when the march reverses
const DESCEND_STEP: f32 = 10.0;

const FIRE_COOLDOWN_MS: u32 = 300;
const MARCH_INTERVAL_START_MS: u32 = 500;
const MARCH_INTERVAL_MIN_MS: u32 = 200;
const MARCH_INTERVAL_STEP_MS: u32 = 50;

pub const START_LIVES: u32 = 3;

/// One slot in the bullet arena
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bullet {
    pub x: f32,
    pub y: f32,
    pub active: bool,
}

/// One invader in the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Invader {
    pub x: f32,
    pub y: f32,
    pub alive: bool,
    pub points: u32,
}

/// Session phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvadersPhase {
    Title,
    Playing,
    GameOver,
}

/// Complete shooter session state
#[derive(Debug, Clone)]
pub struct InvadersGame {
    player_x: f32,
    bullets: [Bullet; MAX_BULLETS],
    invaders: [Invader; INVADER_COUNT],
    /// March direction: +1 right, -1 left
    direction: f32,
    march_timer_ms: u32,
    march_interval_ms: u32,
    fire_cooldown_ms: u32,
    score: u32,
    lives: u32,
    phase: InvadersPhase,
}

impl InvadersGame {
    /// Create a new session on the title screen.
    pub fn new() -> Self {
        let mut game = Self {
            player_x: FIELD_WIDTH / 2.0 - PLAYER_WIDTH / 2.0,
            bullets: [Bullet {
                x: 0.0,
                y: 0.0,
                active: false,
            }; MAX_BULLETS],
            invaders: [Invader {
                x: 0.0,
                y: 0.0,
                alive: false,
                points: 0,
            }; INVADER_COUNT],
            direction: 1.0,
            march_timer_ms: 0,
            march_interval_ms: MARCH_INTERVAL_START_MS,
            fire_cooldown_ms: 0,
            score: 0,
            lives: START_LIVES,
            phase: InvadersPhase::Title,
        };
        game.spawn_wave();
        game
    }

    pub fn phase(&self) -> InvadersPhase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lives(&self) -> u32 {
        self.lives
    }

    pub fn player_x(&self) -> f32 {
        self.player_x
    }

    pub fn bullets(&self) -> &[Bullet] {
        &self.bullets
    }

    pub fn invaders(&self) -> &[Invader] {
        &self.invaders
    }

    pub fn march_interval_ms(&self) -> u32 {
        self.march_interval_ms
    }

    /// Advance the session by one tick.
    pub fn update(&mut self, elapsed_ms: u32, input: &InputFrame) {
        if input.confirm {
            match self.phase {
                InvadersPhase::Title => self.phase = InvadersPhase::Playing,
                InvadersPhase::GameOver => {
                    *self = Self::new();
                    self.phase = InvadersPhase::Playing;
                }
                InvadersPhase::Playing => {}
            }
        }

        if self.phase != InvadersPhase::Playing {
            return;
        }

        if input.left_held && self.player_x > 0.0 {
            self.player_x -= PLAYER_SPEED;
        }
        if input.right_held && self.player_x < FIELD_WIDTH - PLAYER_WIDTH {
            self.player_x += PLAYER_SPEED;
        }

        if input.fire_held {
            self.fire();
        }

        self.update_bullets(elapsed_ms);
        self.update_invaders(elapsed_ms);
        self.check_collisions();
    }

    /// Claim a free bullet slot above the paddle, subject to the cooldown.
    fn fire(&mut self) {
        if self.fire_cooldown_ms > 0 {
            return;
        }
        if let Some(bullet) = self.bullets.iter_mut().find(|b| !b.active) {
            bullet.x = self.player_x + PLAYER_WIDTH / 2.0 - BULLET_WIDTH / 2.0;
            bullet.y = PLAYER_Y - BULLET_HEIGHT;
            bullet.active = true;
            self.fire_cooldown_ms = FIRE_COOLDOWN_MS;
        }
    }

    fn update_bullets(&mut self, elapsed_ms: u32) {
        for bullet in &mut self.bullets {
            if bullet.active {
                bullet.y -= BULLET_SPEED;
                if bullet.y < 0.0 {
                    bullet.active = false;
                }
            }
        }
        self.fire_cooldown_ms = self.fire_cooldown_ms.saturating_sub(elapsed_ms);
    }

    fn update_invaders(&mut self, elapsed_ms: u32) {
        self.march_timer_ms += elapsed_ms;
        if self.march_timer_ms < self.march_interval_ms {
            return;
        }
        self.march_timer_ms = 0;

        // Scan the live grid: lowest point, and whether either flank
        // touches a side margin while marching toward it.
        let mut reverse = false;
        let mut max_y = 0.0f32;
        for invader in self.invaders.iter().filter(|i| i.alive) {
            max_y = max_y.max(invader.y);
            if (invader.x <= SIDE_MARGIN && self.direction < 0.0)
                || (invader.x + INVADER_WIDTH >= FIELD_WIDTH - SIDE_MARGIN && self.direction > 0.0)
            {
                reverse = true;
            }
        }

        if reverse {
            self.direction = -self.direction;
            for invader in self.invaders.iter_mut().filter(|i| i.alive) {
                invader.y += DESCEND_STEP;
            }
        } else {
            for invader in self.invaders.iter_mut().filter(|i| i.alive) {
                invader.x += MARCH_STEP * self.direction;
            }
        }

        // The grid reaching the paddle rail ends the game.
        if max_y + INVADER_HEIGHT >= PLAYER_Y {
            self.phase = InvadersPhase::GameOver;
        }
    }

    fn check_collisions(&mut self) {
        for b in 0..MAX_BULLETS {
            if !self.bullets[b].active {
                continue;
            }
            for i in 0..INVADER_COUNT {
                let bullet = self.bullets[b];
                let invader = self.invaders[i];
                if invader.alive
                    && bullet.x < invader.x + INVADER_WIDTH
                    && bullet.x + BULLET_WIDTH > invader.x
                    && bullet.y < invader.y + INVADER_HEIGHT
                    && bullet.y + BULLET_HEIGHT > invader.y
                {
                    self.invaders[i].alive = false;
                    self.bullets[b].active = false;
                    self.score += invader.points;

                    if self.invaders.iter().all(|inv| !inv.alive) {
                        self.start_next_wave();
                    }
                    break;
                }
            }
        }
    }

    /// Respawn the grid for the next wave: score and lives carry over,
    /// the march speeds up toward its floor.
    fn start_next_wave(&mut self) {
        self.spawn_wave();
        for bullet in &mut self.bullets {
            bullet.active = false;
        }
        self.direction = 1.0;
        self.march_timer_ms = 0;
        self.march_interval_ms =
            (self.march_interval_ms - MARCH_INTERVAL_STEP_MS).max(MARCH_INTERVAL_MIN_MS);
    }

    fn spawn_wave(&mut self) {
        for row in 0..INVADER_ROWS {
            for col in 0..INVADER_COLS {
                let invader = &mut self.invaders[row * INVADER_COLS + col];
                invader.x = 100.0 + col as f32 * (INVADER_WIDTH + INVADER_PADDING);
                invader.y = 50.0 + row as f32 * (INVADER_HEIGHT + INVADER_PADDING);
                invader.alive = true;
                // Top row is worth the most, bottom rows the least.
                invader.points = if row == 0 {
                    30
                } else if row < 3 {
                    20
                } else {
                    10
                };
            }
        }
    }
}

impl Default for InvadersGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame() -> InputFrame {
        InputFrame::empty()
    }

    fn playing_game() -> InvadersGame {
        let mut game = InvadersGame::new();
        let mut confirm = frame();
        confirm.confirm = true;
        game.update(0, &confirm);
        game
    }

    #[test]
    fn test_new_session_layout() {
        let game = InvadersGame::new();

        assert_eq!(game.phase(), InvadersPhase::Title);
        assert_eq!(game.score(), 0);
        assert_eq!(game.lives(), START_LIVES);
        assert_eq!(game.invaders().iter().filter(|i| i.alive).count(), 55);
        assert!(game.bullets().iter().all(|b| !b.active));

        // Corner invaders sit where the grid starts.
        assert_eq!(game.invaders()[0].x, 100.0);
        assert_eq!(game.invaders()[0].y, 50.0);
        assert_eq!(game.invaders()[0].points, 30);
        assert_eq!(game.invaders()[INVADER_COUNT - 1].points, 10);
    }

    #[test]
    fn test_confirm_starts_from_title() {
        let game = playing_game();
        assert_eq!(game.phase(), InvadersPhase::Playing);
    }

    #[test]
    fn test_title_screen_ignores_movement() {
        let mut game = InvadersGame::new();
        let x0 = game.player_x();

        let mut held = frame();
        held.left_held = true;
        game.update(16, &held);

        assert_eq!(game.player_x(), x0);
    }

    #[test]
    fn test_player_clamped_to_field() {
        let mut game = playing_game();

        let mut left = frame();
        left.left_held = true;
        for _ in 0..200 {
            game.update(16, &left);
        }
        assert!(game.player_x() >= -PLAYER_SPEED);
        assert!(game.player_x() <= 0.0);

        let mut right = frame();
        right.right_held = true;
        for _ in 0..400 {
            game.update(16, &right);
        }
        assert!(game.player_x() <= FIELD_WIDTH - PLAYER_WIDTH + PLAYER_SPEED);
        assert!(game.player_x() >= FIELD_WIDTH - PLAYER_WIDTH);
    }

    #[test]
    fn test_fire_claims_one_slot_and_cools_down() {
        let mut game = playing_game();

        let mut firing = frame();
        firing.fire_held = true;
        game.update(0, &firing);
        assert_eq!(game.bullets().iter().filter(|b| b.active).count(), 1);

        // Held fire during the cooldown adds nothing.
        game.update(100, &firing);
        assert_eq!(game.bullets().iter().filter(|b| b.active).count(), 1);

        // After the cooldown elapses a second bullet launches.
        game.update(300, &firing);
        game.update(0, &firing);
        assert_eq!(game.bullets().iter().filter(|b| b.active).count(), 2);
    }

    #[test]
    fn test_bullet_slot_freed_off_screen() {
        let mut game = playing_game();
        game.bullets[0] = Bullet {
            x: 400.0,
            y: BULLET_SPEED - 1.0,
            active: true,
        };

        game.update(16, &frame());
        assert!(!game.bullets()[0].active);
    }

    #[test]
    fn test_march_waits_for_interval() {
        let mut game = playing_game();
        let x0 = game.invaders()[0].x;

        game.update(game.march_interval_ms() - 1, &frame());
        assert_eq!(game.invaders()[0].x, x0);

        game.update(1, &frame());
        assert_eq!(game.invaders()[0].x, x0 + MARCH_STEP);
    }

    #[test]
    fn test_march_reverses_and_descends_at_flank() {
        let mut game = playing_game();
        // Push the whole grid against the right margin.
        let shift = FIELD_WIDTH - SIDE_MARGIN - INVADER_WIDTH
            - game.invaders()[INVADER_COLS - 1].x;
        for invader in game.invaders.iter_mut() {
            invader.x += shift;
        }
        let y0 = game.invaders()[0].y;
        let x0 = game.invaders()[0].x;

        game.update(game.march_interval_ms(), &frame());

        assert_eq!(game.invaders()[0].y, y0 + DESCEND_STEP);
        assert_eq!(game.invaders()[0].x, x0);
        assert!(game.direction < 0.0);
    }

    #[test]
    fn test_grid_reaching_paddle_rail_ends_game() {
        let mut game = playing_game();
        game.invaders[0].y = PLAYER_Y - INVADER_HEIGHT;

        game.update(game.march_interval_ms(), &frame());
        assert_eq!(game.phase(), InvadersPhase::GameOver);
    }

    #[test]
    fn test_bullet_kills_invader_and_scores() {
        let mut game = playing_game();
        let target = game.invaders()[0];
        game.bullets[0] = Bullet {
            x: target.x + INVADER_WIDTH / 2.0,
            y: target.y + INVADER_HEIGHT + BULLET_SPEED - 1.0,
            active: true,
        };

        game.update(0, &frame());

        assert!(!game.invaders()[0].alive);
        assert!(!game.bullets()[0].active);
        assert_eq!(game.score(), target.points);
    }

    #[test]
    fn test_wave_clear_respawns_faster_and_keeps_score() {
        let mut game = playing_game();
        for invader in game.invaders.iter_mut().skip(1) {
            invader.alive = false;
        }
        game.score = 990;

        let target = game.invaders()[0];
        game.bullets[0] = Bullet {
            x: target.x,
            y: target.y,
            active: true,
        };
        game.update(0, &frame());

        assert_eq!(game.score(), 990 + target.points);
        assert_eq!(game.invaders().iter().filter(|i| i.alive).count(), 55);
        assert!(game.bullets().iter().all(|b| !b.active));
        assert_eq!(
            game.march_interval_ms(),
            MARCH_INTERVAL_START_MS - MARCH_INTERVAL_STEP_MS
        );
        assert_eq!(game.phase(), InvadersPhase::Playing);
    }

    #[test]
    fn test_march_interval_floor() {
        let mut game = playing_game();
        for _ in 0..20 {
            game.start_next_wave();
        }
        assert_eq!(game.march_interval_ms(), MARCH_INTERVAL_MIN_MS);
    }

    #[test]
    fn test_restart_from_game_over_resets_everything() {
        let mut game = playing_game();
        game.score = 500;
        game.march_interval_ms = MARCH_INTERVAL_MIN_MS;
        game.phase = InvadersPhase::GameOver;

        let mut confirm = frame();
        confirm.confirm = true;
        game.update(0, &confirm);

        assert_eq!(game.phase(), InvadersPhase::Playing);
        assert_eq!(game.score(), 0);
        assert_eq!(game.march_interval_ms(), MARCH_INTERVAL_START_MS);
        assert_eq!(game.invaders().iter().filter(|i| i.alive).count(), 55);
    }
}

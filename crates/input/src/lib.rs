//! Input module - per-tick snapshots from terminal key events
//!
//! The collector receives crossterm key events as they arrive and hands
//! the host one [`InputFrame`] per tick. Edge signals are reported only on
//! a released-to-pressed transition, so terminal auto-repeat never
//! re-fires them; level signals report held state.
//!
//! Terminals that do not emit key release events are supported with a
//! timeout: a key with no activity for longer than the timeout counts as
//! released. Explicit release events (kitty keyboard protocol) are
//! honored when the terminal sends them.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use tui_arcade_types::InputFrame;

// Without key-release events, a short timeout prevents a single tap from
// turning into a sustained "held" state.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Held-state bookkeeping for one physical key.
#[derive(Debug, Clone, Copy)]
struct HeldKey {
    active: bool,
    last_seen: Instant,
}

impl HeldKey {
    fn new() -> Self {
        Self {
            active: false,
            last_seen: Instant::now(),
        }
    }

    /// Register a press event. Returns true on a released-to-pressed
    /// transition (an edge); repeats only refresh the hold.
    fn press(&mut self) -> bool {
        let was_active = self.active;
        self.active = true;
        self.last_seen = Instant::now();
        !was_active
    }

    fn release(&mut self) {
        self.active = false;
    }

    /// Current held state, auto-releasing when the key has been silent
    /// longer than `timeout_ms`.
    fn level(&mut self, timeout_ms: u32) -> bool {
        if self.active && self.last_seen.elapsed().as_millis() as u32 > timeout_ms {
            self.active = false;
        }
        self.active
    }
}

/// Accumulates key events between ticks and produces frame snapshots.
#[derive(Debug, Clone)]
pub struct InputCollector {
    left: HeldKey,
    right: HeldKey,
    down: HeldKey,
    up: HeldKey,
    space: HeldKey,
    enter: HeldKey,
    esc: HeldKey,
    /// Edge flags and typed characters gathered since the last take.
    pending: InputFrame,
    release_timeout_ms: u32,
}

impl InputCollector {
    pub fn new() -> Self {
        Self::with_release_timeout_ms(DEFAULT_KEY_RELEASE_TIMEOUT_MS)
    }

    pub fn with_release_timeout_ms(release_timeout_ms: u32) -> Self {
        Self {
            left: HeldKey::new(),
            right: HeldKey::new(),
            down: HeldKey::new(),
            up: HeldKey::new(),
            space: HeldKey::new(),
            enter: HeldKey::new(),
            esc: HeldKey::new(),
            pending: InputFrame::empty(),
            release_timeout_ms,
        }
    }

    /// Feed a key press (or terminal auto-repeat) event.
    pub fn on_key_press(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => {
                if self.left.press() {
                    self.pending.move_left = true;
                }
            }
            KeyCode::Right => {
                if self.right.press() {
                    self.pending.move_right = true;
                }
            }
            KeyCode::Up => {
                if self.up.press() {
                    self.pending.rotate = true;
                    self.pending.menu_up = true;
                }
            }
            KeyCode::Down => {
                // Soft drop is the held level; the edge only steers menus.
                if self.down.press() {
                    self.pending.menu_down = true;
                }
            }
            KeyCode::Char(' ') => {
                if self.space.press() {
                    self.pending.hard_drop = true;
                }
            }
            KeyCode::Enter => {
                if self.enter.press() {
                    self.pending.confirm = true;
                }
            }
            KeyCode::Esc => {
                if self.esc.press() {
                    self.pending.cancel = true;
                }
            }
            KeyCode::Char(c) if c.is_ascii_alphabetic() => {
                let _ = self.pending.chars.try_push(c.to_ascii_lowercase());
            }
            _ => {}
        }
    }

    /// Feed a key release event (terminals with release reporting).
    pub fn on_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left => self.left.release(),
            KeyCode::Right => self.right.release(),
            KeyCode::Up => self.up.release(),
            KeyCode::Down => self.down.release(),
            KeyCode::Char(' ') => self.space.release(),
            KeyCode::Enter => self.enter.release(),
            KeyCode::Esc => self.esc.release(),
            _ => {}
        }
    }

    /// Snapshot the tick's input and clear the edge accumulator.
    pub fn take_frame(&mut self) -> InputFrame {
        let timeout = self.release_timeout_ms;
        let mut frame = std::mem::take(&mut self.pending);

        frame.soft_drop = self.down.level(timeout);
        frame.left_held = self.left.level(timeout);
        frame.right_held = self.right.level(timeout);
        frame.fire_held = self.space.level(timeout);

        // Expire edge-only keys too, so a key whose release was never
        // reported can edge again on its next press.
        self.up.level(timeout);
        self.enter.level(timeout);
        self.esc.level(timeout);

        frame
    }

    /// Drop all held state and pending edges (scene transitions).
    pub fn reset(&mut self) {
        *self = Self::with_release_timeout_ms(self.release_timeout_ms);
    }
}

impl Default for InputCollector {
    fn default() -> Self {
        Self::new()
    }
}

/// Check if a key should quit the whole shell.
///
/// Only Ctrl-C: plain letters are word-game guesses.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}

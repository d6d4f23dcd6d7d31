//! Shared types module - pure data structures and constants
//!
//! This crate defines the fundamental types used by every other part of the
//! collection. All types are plain data with no game logic or I/O, making
//! them usable in any context (engine rules, input mapping, rendering).
//!
//! # Board Dimensions
//!
//! The falling-block playfield:
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, 0)
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `BASE_DROP_MS` | 1000 | Gravity interval at level 1 |
//! | `MIN_DROP_MS` | 100 | Gravity interval floor at high levels |
//! | `SOFT_DROP_MULTIPLIER` | 2 | Gravity accumulation rate while soft-dropping |
//!
//! The drop interval for a level is `max(MIN_DROP_MS, BASE_DROP_MS / level)`.
//!
//! # Examples
//!
//! ```
//! use tui_arcade_types::{PieceKind, BOARD_WIDTH, BOARD_HEIGHT, LINE_SCORES};
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//!
//! // Clearing four lines at once is worth 800 base points.
//! assert_eq!(LINE_SCORES[4], 800);
//!
//! // Each of the seven tetromino kinds has a stable index.
//! assert_eq!(PieceKind::ALL.len(), 7);
//! ```

use arrayvec::ArrayVec;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Base gravity interval at level 1 (1000ms = 1 second per row)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity interval floor; levels can never drop faster than this
pub const MIN_DROP_MS: u32 = 100;

/// Gravity accumulates at this multiple of real time while soft-dropping
pub const SOFT_DROP_MULTIPLIER: u32 = 2;

/// Piece spawn anchor (x, y) in board coordinates
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Lines required to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Base points for clearing N lines in a single lock, indexed by N
///
/// Multiplied by the level in effect before the clear is applied.
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Magenta, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds in a fixed order, for uniform draws and iteration.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell locked with the given piece kind
///
/// Used by the board as a flat array of cells.
pub type Cell = Option<PieceKind>;

/// Maximum typed characters carried by one input frame.
pub const INPUT_CHARS_CAP: usize = 8;

/// Discrete input snapshot for one tick.
///
/// Edge fields are true only on the tick their key transitioned from
/// released to pressed; level fields report the held state for the whole
/// tick. Engines poll the snapshot and never touch the input device.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputFrame {
    // Edge-triggered signals.
    pub move_left: bool,
    pub move_right: bool,
    pub rotate: bool,
    pub hard_drop: bool,
    pub confirm: bool,
    pub cancel: bool,
    pub menu_up: bool,
    pub menu_down: bool,

    // Level-triggered signals.
    pub soft_drop: bool,
    pub left_held: bool,
    pub right_held: bool,
    pub fire_held: bool,

    /// ASCII letters typed this tick (word-game guesses), lowercased.
    pub chars: ArrayVec<char, INPUT_CHARS_CAP>,
}

impl InputFrame {
    /// A frame with no signals set.
    pub fn empty() -> Self {
        Self::default()
    }
}

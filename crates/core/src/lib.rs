//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains every game rule in the collection. It has **zero
//! dependencies** on UI, terminals, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical sessions
//! - **Testable**: Unit tests live next to the rules they check
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`tetris`]: the falling-block puzzle engine (board, piece, session)
//! - [`hangman`]: word-guessing bookkeeping
//! - [`invaders`]: fixed-shooter with a marching invader grid
//! - [`menu`]: menu-shell selection state
//! - [`rng`]: seeded LCG and the uniform piece stream
//!
//! # Timing
//!
//! Engines accumulate host-supplied frame deltas (milliseconds) and never
//! read a wall clock. Call each engine's `update` once per fixed tick with
//! the elapsed time and the tick's [`InputFrame`](tui_arcade_types::InputFrame).
//!
//! # Example
//!
//! ```
//! use tui_arcade_core::tetris::TetrisGame;
//! use tui_arcade_types::InputFrame;
//!
//! let mut game = TetrisGame::new(12345);
//!
//! let mut frame = InputFrame::empty();
//! frame.hard_drop = true;
//! game.update(16, &frame);
//!
//! // The first piece locked somewhere at the bottom of the board.
//! assert!(!game.game_over());
//! ```

pub mod hangman;
pub mod invaders;
pub mod menu;
pub mod rng;
pub mod tetris;

pub use tui_arcade_types as types;

// Re-export the session types for convenience.
pub use hangman::{HangmanGame, HangmanPhase};
pub use invaders::{InvadersGame, InvadersPhase};
pub use menu::{Menu, MenuEntry};
pub use rng::{PieceStream, SimpleRng};
pub use tetris::{Board, Piece, TetrisGame};

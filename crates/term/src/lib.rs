//! Terminal presentation adapter.
//!
//! A retained [`FrameBuffer`] of styled character cells, a diff-based
//! [`TerminalRenderer`] that flushes it through crossterm, and one pure
//! view per scene. Views only read engine state; the renderer only writes
//! the terminal.

pub mod fb;
pub mod renderer;
pub mod views;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use renderer::TerminalRenderer;
pub use views::{HangmanView, InvadersView, MenuView, TetrisView};

//! Falling-block puzzle engine.
//!
//! - [`board`]: 10x20 grid with the collision predicate and line clearing
//! - [`piece`]: 4x4 piece masks and the in-place quarter-turn rotation
//! - [`game`]: session state machine tying board, piece, and stream together

pub mod board;
pub mod game;
pub mod piece;

pub use board::Board;
pub use game::TetrisGame;
pub use piece::{canonical_mask, Piece, PieceMask};

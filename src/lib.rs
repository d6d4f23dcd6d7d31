//! Terminal arcade collection (workspace facade crate).
//!
//! This package keeps a single `tui_arcade::{core,input,term,types}` public
//! API while the implementation lives in dedicated crates under `crates/`.

pub use tui_arcade_core as core;
pub use tui_arcade_input as input;
pub use tui_arcade_term as term;
pub use tui_arcade_types as types;

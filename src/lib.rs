//! Tap Tetris (workspace facade crate).
//!
//! The implementation lives in dedicated crates under `crates/`; this package
//! re-exports them as `tap_tetris::{core,input,term,types}` and hosts the
//! terminal binary.

pub use tap_tetris_core as core;
pub use tap_tetris_input as input;
pub use tap_tetris_term as term;
pub use tap_tetris_types as types;

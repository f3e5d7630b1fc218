//! Intent sources feeding the core session.
//!
//! This crate is independent of any UI framework. It produces the per-tick
//! [`crate::types::Intent`] the core consumes, from two kinds of hardware:
//!
//! - [`touch`]: a resistive/capacitive panel plus a physical hold button,
//!   classified into zones and gestures around the playfield
//! - [`keyboard`]: `crossterm` key events, including terminals without
//!   key-release events

pub mod keyboard;
pub mod map;
pub mod touch;

pub use tap_tetris_types as types;

pub use keyboard::{KeyboardIntentSource, RestartGate};
pub use map::{key_role, should_quit, KeyRole};
pub use touch::{TouchLayout, TouchPoint, TouchTranslator, Zone};

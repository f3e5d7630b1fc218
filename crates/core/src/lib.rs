//! Core game logic - pure, deterministic, and testable
//!
//! This crate holds every game rule and all game state. It has no dependency
//! on terminals, touch hardware or clocks:
//!
//! - **Deterministic**: the same seed and the same `(intent, now_ms)` stream
//!   produce the same game
//! - **Clock-free**: time enters only as the `now_ms` argument of
//!   [`Session::update`]
//! - **Allocation-free**: the tick path and snapshots never touch the heap
//!
//! # Module Structure
//!
//! - [`playfield`]: 12x18 grid of locked cells and line clearing
//! - [`pieces`]: constant shape table (four pre-baked rotations, no kicks)
//! - [`controller`]: the falling piece, collision, gravity and lock delay
//! - [`rng`]: seeded LCG and the next/hold pipeline
//! - [`scoring`]: line and drop points, level and drop speed
//! - [`session`]: ties everything together one tick at a time
//! - [`snapshot`]: `Copy` view of a session for renderers
//! - [`timer`]: start-timestamp timers
//!
//! # Game Rules
//!
//! - **Uniform draws**: each piece is drawn independently (no 7-bag)
//! - **Fixed rotation**: clockwise only, in place; blocked rotations fail
//! - **Lock delay**: a resting piece locks once 500ms have passed at a gravity step
//! - **Hold**: once per piece, re-armed on lock
//! - **Scoring**: 100 per cleared line, 2 per hard-dropped row, 1 per soft drop
//!
//! # Example
//!
//! ```
//! use tap_tetris_core::Session;
//! use tap_tetris_types::Intent;
//!
//! let mut session = Session::new(12345);
//!
//! let drop = Intent { hard_drop: true, ..Intent::IDLE };
//! session.update(&drop, 0);
//!
//! assert!(session.score() > 0); // Hard drop awards points
//! assert!(session.take_last_event().is_some());
//! ```
//!
//! # Timing
//!
//! The bootstrap calls [`Session::update`] every ~16ms with a monotonic clock:
//! - **Gravity**: 500ms at level 1, 40ms faster per level, never below 100ms
//! - **Horizontal repeat**: 80ms
//! - **Action repeat**: 100ms for hard drop, soft drop, rotate and hold
//! - **Lock delay**: 500ms

pub mod controller;
pub mod pieces;
pub mod playfield;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod snapshot;
pub mod timer;

pub use tap_tetris_types as types;

// Re-export commonly used types for convenience
pub use controller::{collides, ActivePiece, GravityStep, IntentOutcome, PieceController};
pub use pieces::{get_shape, piece_color};
pub use playfield::{ClearedRows, Playfield};
pub use rng::{HoldOutcome, PieceQueue, SimpleRng};
pub use scoring::{calculate_drop_score, calculate_level, get_drop_interval_ms, line_clear_score};
pub use session::{LockEvent, Session};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timer::Timer;

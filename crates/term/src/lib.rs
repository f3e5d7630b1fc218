//! Terminal rendering for the game.
//!
//! A small game-oriented rendering layer: views draw into a plain character
//! framebuffer, and the renderer flushes only changed glyphs to the terminal.
//! No widget or layout library is involved.
//!
//! - [`fb`]: framebuffer, glyphs and styles
//! - [`game_view`]: board, ghost, side panel, splash and game-over screens
//! - [`renderer`]: crossterm output with diff encoding

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tap_tetris_core as core;
pub use tap_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};

//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the workspace.
//! Everything here is plain data with no dependencies, so it can be shared by the
//! game core, the intent sources and the renderer alike.
//!
//! # Playfield Dimensions
//!
//! The playfield is 12 columns wide and 18 rows tall (sized for a 320x240 panel
//! with 12px blocks). Coordinates are `(row, col)` with row 0 at the top.
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 18 rows (indexed 0-17)
//! - **Spawn position**: row 0, column `width / 2 - 1` (= 5), rotation 0
//!
//! # Timing Constants
//!
//! All timing values are in milliseconds and are compared against a monotonic
//! clock supplied by the caller once per tick:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed update cadence (~60 FPS) |
//! | `LOCK_DELAY_MS` | 500 | Grace window before a resting piece locks |
//! | `MOVE_REPEAT_MS` | 80 | Minimum spacing between horizontal moves |
//! | `ACTION_REPEAT_MS` | 100 | Minimum spacing between drop/rotate/hold actions |
//!
//! # Gravity by Level
//!
//! `drop = max(100, 500 - (level - 1) * 40)`:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 1 | 500ms |
//! | 2 | 460ms |
//! | 5 | 340ms |
//! | 10 | 140ms |
//! | 11+ | 100ms floor |
//!
//! # Examples
//!
//! ```
//! use tap_tetris_types::{PieceKind, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let piece = PieceKind::T;
//! assert_eq!(piece.cell_id(), 3);
//! assert_eq!(PieceKind::from_cell_id(3), Some(PieceKind::T));
//!
//! assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 18);
//! ```

/// Playfield width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Playfield height in cells (18 rows)
pub const BOARD_HEIGHT: u8 = 18;

/// Fixed update interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Lock delay once a piece rests on the stack or floor
pub const LOCK_DELAY_MS: u32 = 500;

/// Horizontal moves are accepted only when strictly more than this has passed
/// since the previous horizontal attempt.
pub const MOVE_REPEAT_MS: u32 = 80;

/// Drop, rotate and hold share one gate: at most one of them per this window.
pub const ACTION_REPEAT_MS: u32 = 100;

/// Gravity interval at level 1
pub const BASE_DROP_MS: u32 = 500;

/// Gravity speed-up per level
pub const DROP_STEP_MS: u32 = 40;

/// Gravity never gets faster than this
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Flat award per cleared line (no multi-line bonus)
pub const LINE_CLEAR_POINTS: u32 = 100;

/// Hard drop award per row descended
pub const HARD_DROP_POINTS_PER_ROW: u32 = 2;

/// Soft drop award per successful step
pub const SOFT_DROP_POINTS_PER_ROW: u32 = 1;


/// The seven piece kinds, in catalog order.
///
/// The discriminant order is significant: it is the type index used by the shape
/// table and the stored cell identifier is `index + 1`.
///
/// - **O**: yellow 2x2 square
/// - **I**: cyan bar
/// - **T**: purple
/// - **S**: green
/// - **Z**: red
/// - **J**: blue
/// - **L**: orange
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    O,
    I,
    T,
    S,
    Z,
    J,
    L,
}

impl PieceKind {
    /// Every kind, indexed by [`PieceKind::index`].
    pub const ALL: [PieceKind; 7] = [
        PieceKind::O,
        PieceKind::I,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::J,
        PieceKind::L,
    ];

    /// Type index in `0..7`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Identifier stored in a playfield cell (`1..=7`; 0 means empty).
    #[inline]
    pub const fn cell_id(self) -> u8 {
        self as u8 + 1
    }

    pub fn from_cell_id(id: u8) -> Option<Self> {
        match id {
            0 => None,
            n => Self::from_index((n - 1) as usize),
        }
    }

    /// Single-letter name, for text panels and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::O => "O",
            PieceKind::I => "I",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// The four pre-baked rotation states.
///
/// The cycle goes North → East → South → West → North. There is no
/// counter-clockwise rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotate clockwise (rotation + 1 mod 4)
    ///
    /// # Examples
    ///
    /// ```
    /// use tap_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::East.rotate_cw(), Rotation::South);
    /// assert_eq!(Rotation::South.rotate_cw(), Rotation::West);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::North => Rotation::East,
            Rotation::East => Rotation::South,
            Rotation::South => Rotation::West,
            Rotation::West => Rotation::North,
        }
    }

    /// Rotation index in `0..4`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Per-tick input snapshot handed to the session.
///
/// `left_held`, `right_held` and `soft_drop_held` describe keys or zones that are
/// down during this tick. `rotate`, `hard_drop` and `hold` are edges: true only on
/// the tick the press happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intent {
    pub left_held: bool,
    pub right_held: bool,
    pub soft_drop_held: bool,
    pub rotate: bool,
    pub hard_drop: bool,
    pub hold: bool,
}

impl Intent {
    /// No input at all
    pub const IDLE: Intent = Intent {
        left_held: false,
        right_held: false,
        soft_drop_held: false,
        rotate: false,
        hard_drop: false,
        hold: false,
    };

    pub fn is_idle(&self) -> bool {
        *self == Self::IDLE
    }
}

/// A cell on the playfield
///
/// - `None`: empty
/// - `Some(PieceKind)`: locked block of that kind
pub type Cell = Option<PieceKind>;

//! Pieces module - the static shape catalog
//!
//! Every kind has four pre-baked rotation states, each a list of four
//! `(row, col)` offsets from the piece's pivot. The table is data, not the
//! output of a rotation matrix: several states are deliberately asymmetric
//! (the I, S and Z pieces flip between two states, J and L pivot off-centre)
//! and collision behaviour depends on those exact offsets.
//!
//! There are no wall kicks. A rotation either fits in place or fails.

use crate::types::{PieceKind, Rotation, BOARD_WIDTH};

/// Offset of a single block relative to the piece pivot: `(row, col)`
pub type CellOffset = (i8, i8);

/// Shape of a piece - 4 block offsets from the pivot
pub type PieceShape = [CellOffset; 4];

/// Spawn row for every new piece
pub const SPAWN_ROW: i8 = 0;

/// Spawn column: centred, biased left on even widths
pub const SPAWN_COL: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// `SHAPES[kind][rotation]`, in [`PieceKind::ALL`] order.
const SHAPES: [[PieceShape; 4]; 7] = [
    // O
    [
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (0, 1), (1, 1)],
    ],
    // I
    [
        [(0, -1), (0, 0), (0, 1), (0, 2)],
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
        [(0, -1), (0, 0), (0, 1), (0, 2)],
        [(-1, 0), (0, 0), (1, 0), (2, 0)],
    ],
    // T
    [
        [(0, -1), (0, 0), (0, 1), (1, 0)],
        [(1, 0), (0, 0), (-1, 0), (0, -1)],
        [(0, -1), (0, 0), (0, 1), (-1, 0)],
        [(1, 0), (0, 0), (-1, 0), (0, 1)],
    ],
    // S
    [
        [(0, 0), (-1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (1, -1), (0, 1)],
        [(0, 0), (-1, 0), (0, 1), (1, 1)],
        [(0, 0), (1, 0), (1, -1), (0, 1)],
    ],
    // Z
    [
        [(0, 0), (-1, 0), (0, -1), (1, -1)],
        [(0, 0), (0, -1), (1, 0), (1, 1)],
        [(0, 0), (-1, 0), (0, -1), (1, -1)],
        [(0, 0), (0, -1), (1, 0), (1, 1)],
    ],
    // J
    [
        [(1, 0), (0, 0), (-1, 0), (1, -1)],
        [(0, 0), (-1, 0), (0, 1), (0, 2)],
        [(0, 0), (1, 0), (2, 0), (0, 1)],
        [(1, 1), (0, 1), (0, 0), (0, -1)],
    ],
    // L
    [
        [(0, -1), (0, 0), (1, 0), (2, 0)],
        [(-1, 1), (0, 1), (0, 0), (0, -1)],
        [(1, 1), (1, 0), (0, 0), (-1, 0)],
        [(1, -1), (0, -1), (0, 0), (0, 1)],
    ],
];

/// Get the block offsets for a piece kind and rotation
#[inline]
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    SHAPES[kind.index()][rotation.index()]
}

/// Display colour of a piece kind, as 8-bit RGB.
pub fn piece_color(kind: PieceKind) -> (u8, u8, u8) {
    match kind {
        PieceKind::O => (255, 255, 0),
        PieceKind::I => (0, 255, 255),
        PieceKind::T => (123, 0, 123),
        PieceKind::S => (0, 255, 0),
        PieceKind::Z => (255, 0, 0),
        PieceKind::J => (0, 0, 255),
        PieceKind::L => (255, 165, 0),
    }
}

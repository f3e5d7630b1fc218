use crate::controller::ActivePiece;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
        }
    }
}

/// Everything a renderer needs for one frame, detached from the live session.
///
/// Board cells are `0` for empty, otherwise [`PieceKind::cell_id`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_row: Option<i8>,
    pub held: Option<PieceKind>,
    pub next: PieceKind,
    pub can_hold: bool,
    pub game_over: bool,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    pub drop_speed_ms: u32,
    pub lock_pending: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_row: None,
            held: None,
            next: PieceKind::O,
            can_hold: true,
            game_over: false,
            score: 0,
            level: 1,
            lines: 0,
            drop_speed_ms: 0,
            lock_pending: false,
        }
    }
}

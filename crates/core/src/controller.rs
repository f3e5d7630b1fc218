//! Active piece controller - movement, gravity and lock delay
//!
//! The controller owns the single falling piece and every timer that governs
//! it. It reads the playfield to test collisions but never writes to it: when
//! the piece should lock, the controller reports that and the session does the
//! placement, line clear and respawn.
//!
//! Piece lifecycle: **Falling** → (gravity blocked) **LockDelayPending** →
//! (500ms elapsed at a gravity step, or hard drop) **Locked**. Locked is
//! transient; the session immediately spawns the next piece.

use crate::pieces::{get_shape, PieceShape, SPAWN_COL, SPAWN_ROW};
use crate::playfield::Playfield;
use crate::scoring::calculate_drop_score;
use crate::timer::Timer;
use crate::types::{
    Intent, PieceKind, Rotation, ACTION_REPEAT_MS, BOARD_HEIGHT, BOARD_WIDTH, LOCK_DELAY_MS,
    MOVE_REPEAT_MS,
};

/// True if the piece `kind`/`rotation` anchored at `(row, col)` overlaps a wall,
/// the floor or a locked cell.
///
/// Blocks above the field (row < 0) only collide with the side walls, which
/// lets pieces spawn partly out of view.
pub fn collides(field: &Playfield, row: i8, col: i8, kind: PieceKind, rotation: Rotation) -> bool {
    get_shape(kind, rotation).iter().any(|&(dr, dc)| {
        let r = row + dr;
        let c = col + dc;
        c < 0 || c >= BOARD_WIDTH as i8 || r >= BOARD_HEIGHT as i8 || (r >= 0 && field.is_occupied(r, c))
    })
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i8,
    pub col: i8,
}

impl ActivePiece {
    /// A fresh piece at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self {
            kind,
            rotation: Rotation::North,
            row: SPAWN_ROW,
            col: SPAWN_COL,
        }
    }

    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute `(row, col)` of each block
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dr, dc)| (self.row + dr, self.col + dc))
    }

    pub fn collides(&self, field: &Playfield) -> bool {
        collides(field, self.row, self.col, self.kind, self.rotation)
    }

    fn offset(&self, drow: i8, dcol: i8) -> Self {
        Self {
            row: self.row + drow,
            col: self.col + dcol,
            ..*self
        }
    }

    fn rotated(&self) -> Self {
        Self {
            rotation: self.rotation.rotate_cw(),
            ..*self
        }
    }

    /// Row the piece would come to rest on if dropped now
    pub fn landing_row(&self, field: &Playfield) -> i8 {
        let mut landed = *self;
        while landed.row < BOARD_HEIGHT as i8 {
            let below = landed.offset(1, 0);
            if below.collides(field) {
                break;
            }
            landed = below;
        }
        landed.row
    }
}

/// What the input phase of a tick asks the session to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct IntentOutcome {
    /// Drop points earned this tick
    pub points: u32,
    /// Hold was requested (the queue decides whether it is allowed)
    pub hold: bool,
    /// Hard drop finished: lock now
    pub lock: bool,
}

/// Result of a gravity check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GravityStep {
    /// Not due yet
    Waiting,
    /// Moved down one row
    Fell,
    /// Blocked; lock delay running
    Resting,
    /// Blocked and the lock delay ran out
    Lock,
}

/// Falling piece plus its timers
#[derive(Debug, Clone)]
pub struct PieceController {
    piece: ActivePiece,
    gravity: Timer,
    lock_delay: Timer,
    move_gate: Timer,
    action_gate: Timer,
    /// An edge action fired and no action-free tick has passed since
    action_latched: bool,
}

impl PieceController {
    pub fn new(kind: PieceKind) -> Self {
        Self {
            piece: ActivePiece::spawn(kind),
            gravity: Timer::IDLE,
            lock_delay: Timer::IDLE,
            move_gate: Timer::IDLE,
            action_gate: Timer::IDLE,
            action_latched: false,
        }
    }

    pub fn piece(&self) -> ActivePiece {
        self.piece
    }

    /// Piece is resting and the lock-delay window is running
    pub fn lock_pending(&self) -> bool {
        self.lock_delay.is_active()
    }

    pub fn lock_delay(&self) -> Timer {
        self.lock_delay
    }

    /// Replace the falling piece with a fresh one at the spawn position.
    ///
    /// Input gates and the gravity clock carry over.
    pub fn spawn(&mut self, kind: PieceKind) {
        self.piece = ActivePiece::spawn(kind);
        self.lock_delay.cancel();
    }

    /// Start a full gravity interval from `now_ms`.
    pub fn restart_gravity(&mut self, now_ms: u64) {
        self.gravity.start(now_ms);
    }

    /// Apply one tick of intent.
    ///
    /// Horizontal movement has its own 80ms gate. Hard drop, soft drop, rotate
    /// and hold share a 100ms gate and at most one of them acts per tick, in that
    /// priority. Any action sets a latch that blocks the edge actions until a
    /// tick arrives with no edge pressed; soft drop repeats while held.
    pub fn apply_intent(&mut self, intent: &Intent, field: &Playfield, now_ms: u64) -> IntentOutcome {
        let mut out = IntentOutcome::default();

        if (intent.left_held || intent.right_held) && self.move_gate.idle_or_past(now_ms, MOVE_REPEAT_MS) {
            let dcol = if intent.left_held { -1 } else { 1 };
            self.shift(field, dcol, now_ms);
            self.move_gate.start(now_ms);
        }

        if self.action_gate.is_active() && !self.action_gate.expired(now_ms, ACTION_REPEAT_MS) {
            return out;
        }

        if intent.hard_drop && !self.action_latched {
            out.points += self.hard_drop(field);
            out.lock = true;
        } else if intent.soft_drop_held {
            out.points += self.soft_drop(field);
        } else if intent.rotate && !self.action_latched {
            self.rotate(field, now_ms);
        } else if intent.hold && !self.action_latched {
            out.hold = true;
        } else {
            if !(intent.hard_drop || intent.rotate || intent.hold) {
                self.action_latched = false;
            }
            return out;
        }

        self.action_gate.start(now_ms);
        self.action_latched = true;
        out
    }

    /// Move one column left (`-1`) or right (`1`).
    ///
    /// A successful move frees the piece, cancelling any pending lock. A blocked
    /// move while resting restarts the lock-delay window instead.
    pub fn shift(&mut self, field: &Playfield, dcol: i8, now_ms: u64) -> bool {
        let moved = self.piece.offset(0, dcol);
        if moved.collides(field) {
            if self.lock_delay.is_active() {
                self.lock_delay.start(now_ms);
            }
            return false;
        }
        self.piece = moved;
        self.lock_delay.cancel();
        true
    }

    /// Rotate clockwise in place; no kicks.
    ///
    /// On success while resting the lock-delay window restarts. A blocked
    /// rotation changes nothing.
    pub fn rotate(&mut self, field: &Playfield, now_ms: u64) -> bool {
        let rotated = self.piece.rotated();
        if rotated.collides(field) {
            return false;
        }
        self.piece = rotated;
        if self.lock_delay.is_active() {
            self.lock_delay.start(now_ms);
        }
        true
    }

    /// Drop as far as possible and return the points earned.
    ///
    /// The caller locks immediately afterwards.
    pub fn hard_drop(&mut self, field: &Playfield) -> u32 {
        let mut rows = 0;
        loop {
            let below = self.piece.offset(1, 0);
            if below.collides(field) {
                break;
            }
            self.piece = below;
            rows += 1;
        }
        self.lock_delay.cancel();
        calculate_drop_score(rows, true)
    }

    /// One row down. Blocked soft drops neither move nor lock.
    pub fn soft_drop(&mut self, field: &Playfield) -> u32 {
        let below = self.piece.offset(1, 0);
        if below.collides(field) {
            return 0;
        }
        self.piece = below;
        self.lock_delay.cancel();
        calculate_drop_score(1, false)
    }

    /// Gravity check for this tick.
    ///
    /// Steps fire once strictly more than `drop_interval_ms` has passed since the
    /// previous step. The first check after construction only arms the clock.
    /// Lock-delay expiry is evaluated on gravity steps only.
    pub fn gravity_step(&mut self, field: &Playfield, now_ms: u64, drop_interval_ms: u32) -> GravityStep {
        if !self.gravity.is_active() {
            self.gravity.start(now_ms);
            return GravityStep::Waiting;
        }
        if !self.gravity.idle_or_past(now_ms, drop_interval_ms) {
            return GravityStep::Waiting;
        }
        self.gravity.start(now_ms);

        let below = self.piece.offset(1, 0);
        if !below.collides(field) {
            self.piece = below;
            self.lock_delay.cancel();
            return GravityStep::Fell;
        }

        self.lock_delay.start_if_idle(now_ms);
        if self.lock_delay.expired(now_ms, LOCK_DELAY_MS) {
            GravityStep::Lock
        } else {
            GravityStep::Resting
        }
    }

    /// Ghost row for the current piece
    pub fn ghost_row(&self, field: &Playfield) -> i8 {
        self.piece.landing_row(field)
    }

    #[cfg(test)]
    pub(crate) fn set_piece(&mut self, piece: ActivePiece) {
        self.piece = piece;
    }
}

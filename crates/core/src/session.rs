//! Game session - the single owner of all game state
//!
//! A [`Session`] ties the playfield, the falling piece controller, the piece
//! queue and the score counters together and advances them one tick at a time
//! through [`Session::update`]. The caller supplies the clock; the session
//! never reads time itself.

use log::{debug, info};

use crate::controller::{ActivePiece, GravityStep, PieceController};
use crate::playfield::{ClearedRows, Playfield};
use crate::rng::{HoldOutcome, PieceQueue};
use crate::scoring::{calculate_level, get_drop_interval_ms, line_clear_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Intent, PieceKind};

/// What happened at the most recent lock
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    /// Pre-clear indices of the removed rows, bottom first
    pub cleared_rows: ClearedRows,
    /// Line-clear points from this lock (drop points are awarded as they happen)
    pub score_awarded: u32,
    /// The next piece could not spawn
    pub game_over: bool,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Session {
    field: Playfield,
    controller: PieceController,
    queue: PieceQueue,
    score: u32,
    lines: u32,
    game_over: bool,
    needs_redraw: bool,
    last_event: Option<LockEvent>,
}

impl Session {
    /// Create a session with the given RNG seed and the first piece in play.
    pub fn new(seed: u32) -> Self {
        let mut queue = PieceQueue::new(seed);
        let first = queue.draw();
        info!("session started (seed {seed}, first piece {})", first.as_str());
        Self {
            field: Playfield::new(),
            controller: PieceController::new(first),
            queue,
            score: 0,
            lines: 0,
            game_over: false,
            needs_redraw: true,
            last_event: None,
        }
    }

    /// Start a new game.
    ///
    /// Clears the field and counters, empties the hold slot and deals a fresh
    /// piece. The RNG carries on from its current state so consecutive games
    /// differ. Renderers are asked for a full redraw.
    pub fn init(&mut self) {
        *self = Self::new(self.queue.seed());
    }

    /// Advance one tick.
    ///
    /// Input is applied first, then gravity. A hard drop locks immediately and
    /// skips the gravity check for this tick. Does nothing once the game is over.
    pub fn update(&mut self, intent: &Intent, now_ms: u64) {
        if self.game_over {
            return;
        }

        let outcome = self.controller.apply_intent(intent, &self.field, now_ms);
        self.score = self.score.saturating_add(outcome.points);
        if outcome.hold {
            self.hold();
        }
        if outcome.lock {
            self.lock_active(now_ms);
            return;
        }

        let drop_speed = self.drop_speed_ms();
        if self.controller.gravity_step(&self.field, now_ms, drop_speed) == GravityStep::Lock {
            self.lock_active(now_ms);
        }
    }

    /// Swap the active piece with the hold slot.
    ///
    /// No-op if hold was already used since the last lock. A swapped-in piece is
    /// placed at the spawn position without a collision test.
    pub fn hold(&mut self) {
        if self.game_over {
            return;
        }
        let current = self.controller.piece().kind;
        match self.queue.hold(current) {
            HoldOutcome::Unavailable => {}
            HoldOutcome::Banked => {
                let next = self.queue.draw();
                self.controller.spawn(next);
                debug!("held {}, dealt {}", current.as_str(), next.as_str());
            }
            HoldOutcome::Swapped(previous) => {
                self.controller.spawn(previous);
                debug!("held {}, swapped in {}", current.as_str(), previous.as_str());
            }
        }
    }

    /// Lock the active piece, clear lines, score and spawn the next piece.
    fn lock_active(&mut self, now_ms: u64) {
        let piece = self.controller.piece();
        self.field.place(&piece.cells(), piece.kind);

        let cleared_rows = self.field.clear_full_rows();
        let lines_cleared = cleared_rows.len() as u32;
        let awarded = line_clear_score(lines_cleared);
        let level_before = self.level();
        self.score = self.score.saturating_add(awarded);
        self.lines = self.lines.saturating_add(lines_cleared);

        if lines_cleared > 0 {
            debug!("cleared {lines_cleared} line(s) at rows {cleared_rows:?}, +{awarded}");
        }
        let level = self.level();
        if level > level_before {
            info!("level {level}, drop interval {}ms", self.drop_speed_ms());
        }

        self.queue.rearm_hold();
        let next = self.queue.draw();
        self.controller.spawn(next);
        self.controller.restart_gravity(now_ms);

        if self.controller.piece().collides(&self.field) {
            self.game_over = true;
            info!("game over: score {} lines {}", self.score, self.lines);
        }

        self.last_event = Some(LockEvent {
            lines_cleared,
            cleared_rows,
            score_awarded: awarded,
            game_over: self.game_over,
        });
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    /// Level, derived from cleared lines
    pub fn level(&self) -> u32 {
        calculate_level(self.lines)
    }

    /// Gravity interval at the current level
    pub fn drop_speed_ms(&self) -> u32 {
        get_drop_interval_ms(self.level())
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn field(&self) -> &Playfield {
        &self.field
    }

    pub fn active(&self) -> ActivePiece {
        self.controller.piece()
    }

    pub fn held(&self) -> Option<PieceKind> {
        self.queue.held()
    }

    pub fn next(&self) -> PieceKind {
        self.queue.peek()
    }

    pub fn can_hold(&self) -> bool {
        self.queue.can_hold()
    }

    pub fn lock_pending(&self) -> bool {
        self.controller.lock_pending()
    }

    /// Row where the active piece would land
    pub fn ghost_row(&self) -> i8 {
        self.controller.ghost_row(&self.field)
    }

    /// Take the full-redraw request raised by (re)initialization.
    pub fn take_needs_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.field.write_u8_grid(&mut out.board);

        out.active = Some(ActiveSnapshot::from(self.controller.piece()));
        out.ghost_row = if self.game_over {
            None
        } else {
            Some(self.ghost_row())
        };
        out.held = self.held();
        out.next = self.next();
        out.can_hold = self.can_hold();
        out.game_over = self.game_over;
        out.score = self.score;
        out.level = self.level();
        out.lines = self.lines;
        out.drop_speed_ms = self.drop_speed_ms();
        out.lock_pending = self.lock_pending();
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut out = GameSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }

    #[cfg(test)]
    pub(crate) fn field_mut(&mut self) -> &mut Playfield {
        &mut self.field
    }

    #[cfg(test)]
    pub(crate) fn controller_mut(&mut self) -> &mut PieceController {
        &mut self.controller
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(1)
    }
}

//! Keyboard intent source for terminal environments.
//!
//! Collects crossterm key events between ticks and turns them into one
//! [`Intent`] per tick. Supports terminals that do not emit key release events
//! by treating a held key as released once no press or repeat has arrived for a
//! short timeout.

use crossterm::event::{KeyEvent, KeyEventKind};
use log::trace;

use crate::map::{key_role, KeyRole};
use crate::types::{Intent, MOVE_REPEAT_MS};

// Without release events, a tap must stop reading as "held" before the core's
// 80ms horizontal gate reopens, or one tap would move twice.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = MOVE_REPEAT_MS;

#[derive(Debug, Clone)]
pub struct KeyboardIntentSource {
    /// Last press/repeat time of each held role
    left_at: Option<u64>,
    right_at: Option<u64>,
    down_at: Option<u64>,
    rotate: bool,
    hard_drop: bool,
    hold: bool,
    key_release_timeout_ms: u32,
    /// Set once the terminal has delivered a release event
    release_events: bool,
}

impl KeyboardIntentSource {
    pub fn new() -> Self {
        Self {
            left_at: None,
            right_at: None,
            down_at: None,
            rotate: false,
            hard_drop: false,
            hold: false,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
            release_events: false,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Feed one key event observed at `now_ms`.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) {
        let Some(role) = key_role(key) else {
            return;
        };
        match key.kind {
            KeyEventKind::Press => {
                self.press(role, now_ms);
                match role {
                    KeyRole::Rotate => self.rotate = true,
                    KeyRole::HardDrop => self.hard_drop = true,
                    KeyRole::Hold => self.hold = true,
                    _ => {}
                }
            }
            KeyEventKind::Repeat => self.press(role, now_ms),
            KeyEventKind::Release => {
                self.release_events = true;
                self.release(role);
            }
        }
        trace!("key {:?} {:?} -> {:?}", key.code, key.kind, role);
    }

    fn press(&mut self, role: KeyRole, now_ms: u64) {
        match role {
            KeyRole::Left => {
                self.left_at = Some(now_ms);
                self.right_at = None;
            }
            KeyRole::Right => {
                self.right_at = Some(now_ms);
                self.left_at = None;
            }
            KeyRole::SoftDrop => self.down_at = Some(now_ms),
            _ => {}
        }
    }

    fn release(&mut self, role: KeyRole) {
        match role {
            KeyRole::Left => self.left_at = None,
            KeyRole::Right => self.right_at = None,
            KeyRole::SoftDrop => self.down_at = None,
            _ => {}
        }
    }

    fn held(&self, at: Option<u64>, now_ms: u64) -> bool {
        match at {
            None => false,
            Some(_) if self.release_events => true,
            Some(t) => now_ms.saturating_sub(t) <= u64::from(self.key_release_timeout_ms),
        }
    }

    /// Intent for the tick at `now_ms`. Edge actions are consumed.
    pub fn take_intent(&mut self, now_ms: u64) -> Intent {
        let intent = Intent {
            left_held: self.held(self.left_at, now_ms),
            right_held: self.held(self.right_at, now_ms),
            soft_drop_held: self.held(self.down_at, now_ms),
            rotate: std::mem::take(&mut self.rotate),
            hard_drop: std::mem::take(&mut self.hard_drop),
            hold: std::mem::take(&mut self.hold),
        };
        if !intent.left_held {
            self.left_at = None;
        }
        if !intent.right_held {
            self.right_at = None;
        }
        if !intent.soft_drop_held {
            self.down_at = None;
        }
        intent
    }

    /// Forget everything (used when a new game starts).
    pub fn reset(&mut self) {
        let timeout = self.key_release_timeout_ms;
        let release_events = self.release_events;
        *self = Self::new();
        self.key_release_timeout_ms = timeout;
        self.release_events = release_events;
    }
}

impl Default for KeyboardIntentSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Quiet time a key press must follow before it counts as a fresh press
pub const RESTART_QUIET_MS: u32 = 750;

/// Accepts one deliberate key press after a screen change.
///
/// Terminals without keyboard enhancement report auto-repeat as plain
/// presses, so a key held through the last lock would otherwise dismiss the
/// next screen at once. A press counts only after a release event, or after
/// the keyboard has been quiet for the configured time.
#[derive(Debug, Clone)]
pub struct RestartGate {
    quiet_ms: u32,
    last_key_ms: u64,
    released: bool,
}

impl RestartGate {
    pub fn new(quiet_ms: u32) -> Self {
        Self {
            quiet_ms,
            last_key_ms: 0,
            released: false,
        }
    }

    /// Start waiting, counting `now_ms` as the last key activity.
    pub fn arm(&mut self, now_ms: u64) {
        self.last_key_ms = now_ms;
        self.released = false;
    }

    /// Feed one key event; true when it is a fresh press.
    pub fn handle_key(&mut self, key: KeyEvent, now_ms: u64) -> bool {
        if key.kind == KeyEventKind::Release {
            self.released = true;
            return false;
        }
        let quiet = now_ms.saturating_sub(self.last_key_ms) > u64::from(self.quiet_ms);
        self.last_key_ms = now_ms;
        let fresh = key.kind == KeyEventKind::Press && (self.released || quiet);
        if fresh {
            trace!("fresh press {:?}", key.code);
        }
        fresh
    }
}

impl Default for RestartGate {
    fn default() -> Self {
        Self::new(RESTART_QUIET_MS)
    }
}

//! Timestamp timers.
//!
//! Every timed rule in the core (gravity, lock delay, move and action spacing)
//! is a [`Timer`]: an optional start timestamp compared against the clock value
//! passed into the current tick. Nothing runs in the background.

/// A started/stopped timer over a caller-supplied millisecond clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Timer {
    started_at_ms: Option<u64>,
}

impl Timer {
    pub const IDLE: Timer = Timer {
        started_at_ms: None,
    };

    /// (Re)start at `now_ms`.
    #[inline]
    pub fn start(&mut self, now_ms: u64) {
        self.started_at_ms = Some(now_ms);
    }

    /// Start only if not already running.
    #[inline]
    pub fn start_if_idle(&mut self, now_ms: u64) {
        if self.started_at_ms.is_none() {
            self.started_at_ms = Some(now_ms);
        }
    }

    #[inline]
    pub fn cancel(&mut self) {
        self.started_at_ms = None;
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.started_at_ms.is_some()
    }

    /// Milliseconds since start, or `None` while idle.
    ///
    /// A clock that reads earlier than the start counts as zero elapsed.
    #[inline]
    pub fn elapsed(&self, now_ms: u64) -> Option<u64> {
        self.started_at_ms.map(|t| now_ms.saturating_sub(t))
    }

    /// Idle, or strictly more than `window_ms` since start.
    #[inline]
    pub fn idle_or_past(&self, now_ms: u64, window_ms: u32) -> bool {
        self.elapsed(now_ms).map_or(true, |e| e > u64::from(window_ms))
    }

    /// Running and at least `window_ms` since start.
    #[inline]
    pub fn expired(&self, now_ms: u64, window_ms: u32) -> bool {
        self.elapsed(now_ms).is_some_and(|e| e >= u64::from(window_ms))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idle_timer_never_expires() {
        let t = Timer::IDLE;
        assert!(!t.is_active());
        assert_eq!(t.elapsed(1_000), None);
        assert!(!t.expired(1_000, 0));
        assert!(t.idle_or_past(0, 80));
    }

    #[test]
    fn expired_is_inclusive_and_idle_or_past_is_strict() {
        let mut t = Timer::default();
        t.start(100);
        assert!(!t.expired(599, 500));
        assert!(t.expired(600, 500));

        assert!(!t.idle_or_past(180, 80));
        assert!(t.idle_or_past(181, 80));
    }

    #[test]
    fn start_if_idle_keeps_original_start() {
        let mut t = Timer::default();
        t.start_if_idle(10);
        t.start_if_idle(50);
        assert_eq!(t.elapsed(60), Some(50));
        t.cancel();
        t.start_if_idle(50);
        assert_eq!(t.elapsed(60), Some(10));
    }

    #[test]
    fn clock_behind_start_reads_zero() {
        let mut t = Timer::default();
        t.start(100);
        assert_eq!(t.elapsed(40), Some(0));
    }
}

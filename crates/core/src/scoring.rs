//! Scoring module - points, levels and gravity speed
//!
//! The rules are flat and simple:
//! - every cleared line is worth the same 100 points, however many clear at once;
//! - hard drop pays 2 per row descended, a successful soft drop step pays 1;
//! - level is `1 + lines / 10`, and gravity speeds up 40ms per level down to 100ms.
//!
//! Level and drop speed are never stored; they are recomputed from the
//! cumulative line count.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_STEP_MS, HARD_DROP_POINTS_PER_ROW, LINES_PER_LEVEL,
    LINE_CLEAR_POINTS, SOFT_DROP_POINTS_PER_ROW,
};

/// Points for clearing `lines` rows in one lock
pub fn line_clear_score(lines: u32) -> u32 {
    lines.saturating_mul(LINE_CLEAR_POINTS)
}

/// Drop points
/// soft drop: +1 per row
/// hard drop: +2 per row
pub fn calculate_drop_score(rows: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        rows * HARD_DROP_POINTS_PER_ROW
    } else {
        rows * SOFT_DROP_POINTS_PER_ROW
    }
}

/// Level for a cumulative line count (starts at 1)
pub fn calculate_level(total_lines: u32) -> u32 {
    1 + total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a level, in milliseconds
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_scores_are_flat() {
        assert_eq!(line_clear_score(0), 0);
        assert_eq!(line_clear_score(1), 100);
        assert_eq!(line_clear_score(2), 200);
        assert_eq!(line_clear_score(4), 400);
    }

    #[test]
    fn drop_scores() {
        assert_eq!(calculate_drop_score(10, false), 10);
        assert_eq!(calculate_drop_score(10, true), 20);
        assert_eq!(calculate_drop_score(0, true), 0);
    }

    #[test]
    fn level_calculation() {
        for lines in 0..10 {
            assert_eq!(calculate_level(lines), 1);
        }
        for lines in 10..20 {
            assert_eq!(calculate_level(lines), 2);
        }
        assert_eq!(calculate_level(90), 10);
        assert_eq!(calculate_level(99), 10);
        assert_eq!(calculate_level(100), 11);
    }

    #[test]
    fn drop_intervals() {
        assert_eq!(get_drop_interval_ms(1), 500);
        assert_eq!(get_drop_interval_ms(2), 460);
        assert_eq!(get_drop_interval_ms(10), 140);
        assert_eq!(get_drop_interval_ms(11), 100);
        assert_eq!(get_drop_interval_ms(12), 100);
        assert_eq!(get_drop_interval_ms(u32::MAX), 100);
    }

    #[test]
    fn drop_interval_follows_lines() {
        assert_eq!(get_drop_interval_ms(calculate_level(0)), 500);
        assert_eq!(get_drop_interval_ms(calculate_level(19)), 460);
        assert_eq!(get_drop_interval_ms(calculate_level(95)), 140);
        assert_eq!(get_drop_interval_ms(calculate_level(10_000)), 100);
    }
}

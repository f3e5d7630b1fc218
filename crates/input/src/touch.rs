//! Touch gesture translator.
//!
//! Turns one raw touch sample per tick (plus the physical hold button) into an
//! [`Intent`]. The screen is split into zones around the playfield:
//!
//! - left of the field: move left while touched
//! - right of the field: move right while touched (except the hold zone)
//! - inside the field: a quick tap rotates on release, a long press soft drops
//! - anywhere: a fast upward swipe hard drops, once per gesture
//! - hold zone or button A: hold, on the press edge
//!
//! The first sample of a touch only anchors the gesture; every later sample is
//! classified against that anchor.

use log::trace;

use crate::types::{Intent, BOARD_HEIGHT, BOARD_WIDTH};

/// A touch coordinate in panel pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchPoint {
    pub x: i16,
    pub y: i16,
}

impl TouchPoint {
    pub const fn new(x: i16, y: i16) -> Self {
        Self { x, y }
    }
}

/// Inclusive pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Zone {
    pub x0: i16,
    pub y0: i16,
    pub x1: i16,
    pub y1: i16,
}

impl Zone {
    pub const fn new(x0: i16, y0: i16, x1: i16, y1: i16) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn contains(&self, p: TouchPoint) -> bool {
        p.x >= self.x0 && p.x <= self.x1 && p.y >= self.y0 && p.y <= self.y1
    }
}

/// Panel geometry and gesture thresholds.
///
/// The default matches a 320x240 landscape panel with the playfield drawn at
/// (90, 25) in 12px blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TouchLayout {
    pub field_x: i16,
    pub field_y: i16,
    pub block_px: i16,
    /// Slack around the field that still counts as inside
    pub padding_px: i16,
    pub hold_zone: Zone,
    /// Upward travel that makes a swipe (pixels)
    pub swipe_px: i16,
    pub swipe_window_ms: u32,
    pub long_press_ms: u32,
    pub tap_ms: u32,
}

impl Default for TouchLayout {
    fn default() -> Self {
        Self {
            field_x: 90,
            field_y: 25,
            block_px: 12,
            padding_px: 5,
            hold_zone: Zone::new(280, 75, 300, 95),
            swipe_px: 30,
            swipe_window_ms: 300,
            long_press_ms: 300,
            tap_ms: 150,
        }
    }
}

impl TouchLayout {
    /// The playfield rectangle grown by the padding
    pub fn field_zone(&self) -> Zone {
        Zone::new(
            self.field_x - self.padding_px,
            self.field_y - self.padding_px,
            self.field_x + BOARD_WIDTH as i16 * self.block_px + self.padding_px,
            self.field_y + BOARD_HEIGHT as i16 * self.block_px + self.padding_px,
        )
    }
}

#[derive(Debug, Clone, Copy)]
struct Anchor {
    at: TouchPoint,
    since_ms: u64,
}

#[derive(Debug, Clone)]
pub struct TouchTranslator {
    layout: TouchLayout,
    anchor: Option<Anchor>,
    /// Hard drop already fired for the current gesture
    swiped: bool,
    /// Hold (button A or hold zone) was down on the previous sample
    hold_was_down: bool,
}

impl TouchTranslator {
    pub fn new(layout: TouchLayout) -> Self {
        Self {
            layout,
            anchor: None,
            swiped: false,
            hold_was_down: false,
        }
    }

    pub fn layout(&self) -> &TouchLayout {
        &self.layout
    }

    /// Classify one sample.
    ///
    /// `touch` is the current contact point, or `None` when the panel is not
    /// touched. `button_a` is the physical hold button.
    pub fn sample(&mut self, touch: Option<TouchPoint>, button_a: bool, now_ms: u64) -> Intent {
        let mut intent = Intent::IDLE;
        let mut hold_down = button_a;
        intent.hold = button_a && !self.hold_was_down;

        match touch {
            Some(p) => {
                let Some(anchor) = self.anchor else {
                    self.anchor = Some(Anchor { at: p, since_ms: now_ms });
                    self.swiped = false;
                    self.hold_was_down = hold_down;
                    trace!("touch start at ({}, {})", p.x, p.y);
                    return intent;
                };

                let held_ms = now_ms.saturating_sub(anchor.since_ms);
                let dy = p.y - anchor.at.y;

                if dy < -self.layout.swipe_px && held_ms < u64::from(self.layout.swipe_window_ms) {
                    if !self.swiped {
                        self.swiped = true;
                        intent.hard_drop = true;
                        trace!("swipe up ({dy}px in {held_ms}ms): hard drop");
                    }
                } else {
                    let field = self.layout.field_zone();
                    if field.contains(p) {
                        if held_ms > u64::from(self.layout.long_press_ms) {
                            intent.soft_drop_held = true;
                        }
                    } else if p.x < field.x0 {
                        intent.left_held = true;
                    } else if p.x > field.x1 && !self.layout.hold_zone.contains(p) {
                        intent.right_held = true;
                    }
                }

                if self.layout.hold_zone.contains(p) {
                    hold_down = true;
                    intent.hold = !self.hold_was_down;
                }
            }
            None => {
                if let Some(anchor) = self.anchor.take() {
                    let held_ms = now_ms.saturating_sub(anchor.since_ms);
                    if held_ms < u64::from(self.layout.tap_ms)
                        && !self.swiped
                        && self.layout.field_zone().contains(anchor.at)
                    {
                        intent.rotate = true;
                        trace!("tap ({held_ms}ms): rotate");
                    }
                }
                self.swiped = false;
            }
        }

        self.hold_was_down = hold_down;
        intent
    }

    /// Drop any gesture in progress.
    pub fn reset(&mut self) {
        self.anchor = None;
        self.swiped = false;
        self.hold_was_down = false;
    }
}

impl Default for TouchTranslator {
    fn default() -> Self {
        Self::new(TouchLayout::default())
    }
}

//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{get_shape, piece_color, GameSnapshot};
use crate::fb::{FrameBuffer, Glyph, Rgb, Style};
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

const FIELD_BG: Rgb = Rgb::new(30, 30, 40);
const BORDER: Style = Style::new(Rgb::new(60, 120, 255), Rgb::BLACK);
const LABEL: Style = Style::new(Rgb::new(0, 255, 255), Rgb::BLACK).bold();
const VALUE: Style = Style::new(Rgb::WHITE, Rgb::BLACK);
const HINT: Style = Style::new(Rgb::new(160, 160, 160), Rgb::BLACK);
const EMPTY: Style = Style::new(Rgb::new(70, 70, 80), FIELD_BG).dim();

/// Side panel width in columns
const PANEL_W: u16 = 12;

/// Top-left of the board frame and its outer size
#[derive(Debug, Clone, Copy)]
struct Frame {
    x: u16,
    y: u16,
    w: u16,
    h: u16,
}

pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    pub fn cell_w(&self) -> u16 {
        self.cell_w
    }

    fn frame(&self, viewport: Viewport) -> Frame {
        let w = BOARD_WIDTH as u16 * self.cell_w + 2;
        let h = BOARD_HEIGHT as u16 * self.cell_h + 2;
        let total_w = w + 2 + PANEL_W;
        Frame {
            x: viewport.width.saturating_sub(total_w) / 2,
            y: viewport.height.saturating_sub(h) / 2,
            w,
            h,
        }
    }

    /// Render one game frame into an existing framebuffer.
    ///
    /// Allocation-free once `fb` has reached the viewport size.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let frame = self.frame(viewport);
        fb.draw_box(frame.x, frame.y, frame.w, frame.h, BORDER);

        for row in 0..BOARD_HEIGHT {
            for col in 0..BOARD_WIDTH {
                match PieceKind::from_cell_id(snap.board[row as usize][col as usize]) {
                    Some(kind) => self.draw_block(fb, frame, row as i8, col as i8, kind),
                    None => self.fill_cell(fb, frame, row as i8, col as i8, '·', EMPTY),
                }
            }
        }

        if let (Some(active), Some(ghost_row)) = (snap.active, snap.ghost_row) {
            let ghost = Style::new(piece_color(active.kind).into(), FIELD_BG).dim();
            for (dr, dc) in get_shape(active.kind, active.rotation) {
                self.fill_cell(fb, frame, ghost_row + dr, active.col + dc, '░', ghost);
            }
        }

        if let Some(active) = snap.active {
            for (dr, dc) in get_shape(active.kind, active.rotation) {
                self.draw_block(fb, frame, active.row + dr, active.col + dc, active.kind);
            }
        }

        self.draw_side_panel(fb, snap, viewport, frame);

        if snap.game_over {
            self.draw_game_over(fb, snap, frame);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    /// Title screen shown before the first game.
    pub fn render_splash_into(&self, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let w = viewport.width;
        let top = viewport.height.saturating_sub(14) / 2;

        // One coloured block per piece kind above the title.
        let strip_w = PieceKind::ALL.len() as u16 * 3;
        let mut x = w.saturating_sub(strip_w) / 2;
        for kind in PieceKind::ALL {
            let style = Style::new(piece_color(kind).into(), Rgb::BLACK);
            fb.put_str(x, top, "██", style);
            x += 3;
        }

        fb.put_str_centered(0, w, top + 2, "T E T R I S", LABEL);

        let lines = [
            "←/a  →/d   move",
            "↓/s        soft drop",
            "↑/w/x      rotate",
            "space      hard drop",
            "c          hold",
            "q/esc      quit",
        ];
        for (i, line) in lines.iter().enumerate() {
            fb.put_str_centered(0, w, top + 5 + i as u16, line, HINT);
        }

        fb.put_str_centered(0, w, top + 13, "press any key", VALUE.bold());
    }

    fn draw_block(&self, fb: &mut FrameBuffer, frame: Frame, row: i8, col: i8, kind: PieceKind) {
        let style = Style::new(piece_color(kind).into(), FIELD_BG).bold();
        self.fill_cell(fb, frame, row, col, '█', style);
    }

    /// Fill one board cell; rows above the field are skipped.
    fn fill_cell(&self, fb: &mut FrameBuffer, frame: Frame, row: i8, col: i8, ch: char, style: Style) {
        if row < 0 || row >= BOARD_HEIGHT as i8 || col < 0 || col >= BOARD_WIDTH as i8 {
            return;
        }
        let x = frame.x + 1 + col as u16 * self.cell_w;
        let y = frame.y + 1 + row as u16 * self.cell_h;
        fb.fill_rect(x, y, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, viewport: Viewport, frame: Frame) {
        let x = frame.x + frame.w + 2;
        if x.saturating_add(PANEL_W) > viewport.width {
            return;
        }

        let mut y = frame.y;
        for (label, value) in [("SCORE", snap.score), ("LEVEL", snap.level), ("LINES", snap.lines)] {
            fb.put_str(x, y, label, LABEL);
            fb.put_u32(x, y + 1, value, VALUE);
            y += 3;
        }

        fb.put_str(x, y, "HOLD", LABEL);
        if let Some(kind) = snap.held {
            self.draw_preview(fb, x, y + 1, kind, !snap.can_hold);
        }
        y += 5;

        fb.put_str(x, y, "NEXT", LABEL);
        self.draw_preview(fb, x, y + 1, snap.next, false);
    }

    /// Draw `kind` in its spawn orientation inside a 4x4 cell box.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind, dimmed: bool) {
        let mut style = Style::new(piece_color(kind).into(), Rgb::BLACK);
        if dimmed {
            style = style.dim();
        }
        for (dr, dc) in get_shape(kind, Rotation::North) {
            // Offsets span -1..=2 on both axes.
            let px = x + (dc + 1) as u16 * 2;
            let py = y + (dr + 1) as u16;
            fb.put_str(px, py, "██", style);
        }
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &GameSnapshot, frame: Frame) {
        let mid = frame.y + frame.h / 2;
        let inner_x = frame.x + 1;
        let inner_w = frame.w - 2;
        let banner = Style::new(Rgb::WHITE, Rgb::new(120, 0, 0)).bold();

        fb.fill_rect(inner_x, mid - 2, inner_w, 5, ' ', banner);
        fb.put_str_centered(inner_x, inner_w, mid - 1, "GAME OVER", banner);

        // "SCORE " plus the number, centred together.
        let digits = count_digits(snap.score);
        let start = inner_x + inner_w.saturating_sub(6 + digits) / 2;
        let after = fb.put_str(start, mid, "SCORE ", banner);
        fb.put_u32(after, mid, snap.score, banner);

        fb.put_str_centered(inner_x, inner_w, mid + 1, "press any key", Style { bold: false, ..banner });
    }
}

fn count_digits(mut n: u32) -> u16 {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Session;

    fn text_at(fb: &FrameBuffer, y: u16) -> String {
        (0..fb.width())
            .map(|x| fb.get(x, y).map(|g| g.ch).unwrap_or(' '))
            .collect()
    }

    fn contains_text(fb: &FrameBuffer, needle: &str) -> bool {
        (0..fb.height()).any(|y| text_at(fb, y).contains(needle))
    }

    #[test]
    fn renders_panel_labels() {
        let snap = Session::new(1).snapshot();
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        for label in ["SCORE", "LEVEL", "LINES", "HOLD", "NEXT"] {
            assert!(contains_text(&fb, label), "missing {label}");
        }
        assert!(!contains_text(&fb, "GAME OVER"));
    }

    #[test]
    fn active_piece_is_drawn_in_its_colour() {
        let snap = Session::new(1).snapshot();
        let view = GameView::default();
        let fb = view.render(&snap, Viewport::new(80, 24));
        let active = snap.active.expect("active piece");
        let colour: Rgb = piece_color(active.kind).into();

        let frame = view.frame(Viewport::new(80, 24));
        let x = frame.x + 1 + active.col as u16 * 2;
        let y = frame.y + 1 + active.row as u16;
        let g = fb.get(x, y).expect("in bounds");
        assert_eq!(g.ch, '█');
        assert_eq!(g.style.fg, colour);
    }

    #[test]
    fn game_over_overlay_shows_score() {
        let mut snap = Session::new(1).snapshot();
        snap.game_over = true;
        snap.ghost_row = None;
        snap.score = 1234;
        let fb = GameView::default().render(&snap, Viewport::new(80, 24));
        assert!(contains_text(&fb, "GAME OVER"));
        assert!(contains_text(&fb, "SCORE 1234"));
        assert!(contains_text(&fb, "press any key"));
    }

    #[test]
    fn splash_lists_controls() {
        let mut fb = FrameBuffer::new(1, 1);
        GameView::default().render_splash_into(Viewport::new(60, 20), &mut fb);
        assert_eq!((fb.width(), fb.height()), (60, 20));
        assert!(contains_text(&fb, "T E T R I S"));
        assert!(contains_text(&fb, "hard drop"));
        assert!(contains_text(&fb, "press any key"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        let snap = Session::new(1).snapshot();
        let view = GameView::default();
        let _ = view.render(&snap, Viewport::new(5, 3));
        let mut fb = FrameBuffer::new(0, 0);
        view.render_splash_into(Viewport::new(3, 2), &mut fb);
    }

    #[test]
    fn digit_count() {
        assert_eq!(count_digits(0), 1);
        assert_eq!(count_digits(9), 1);
        assert_eq!(count_digits(10), 2);
        assert_eq!(count_digits(u32::MAX), 10);
    }
}

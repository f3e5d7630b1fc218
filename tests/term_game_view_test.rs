use tap_tetris::core::Session;
use tap_tetris::term::{FrameBuffer, GameView, Viewport};
use tap_tetris::types::PieceKind;

fn screen_text(fb: &FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        for x in 0..fb.width() {
            all.push(fb.get(x, y).unwrap().ch);
        }
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let snap = Session::new(1).snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 12*2 by 18*1 => 24x18
    // plus border => 26x20
    let vp = Viewport::new(26, 20);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(25, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 19).unwrap().ch, '└');
    assert_eq!(fb.get(25, 19).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = Session::new(1).snapshot();
    // Put a locked I block at bottom-left.
    snap.board[17][0] = PieceKind::I.cell_id();
    snap.active = None;
    snap.ghost_row = None;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(26, 20));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let x0 = 1;
    let y0 = 1 + 17;
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, '·');
}

#[test]
fn term_view_draws_ghost_below_active_piece() {
    let snap = Session::new(1).snapshot();
    let active = snap.active.unwrap();
    let ghost_row = snap.ghost_row.unwrap();
    assert!(ghost_row > active.row);

    let fb = GameView::default().render(&snap, Viewport::new(26, 20));
    let x = 1 + active.col as u16 * 2;
    let y = 1 + ghost_row as u16;
    assert_eq!(fb.get(x, y).unwrap().ch, '░');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = Session::new(1).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;
    snap.held = Some(PieceKind::T);

    let view = GameView::default();
    // Wider than the 26x20 board frame to allow a panel.
    let all = screen_text(&view.render(&snap, Viewport::new(60, 20)));
    for needle in ["SCORE", "1234", "LEVEL", "LINES", "HOLD", "NEXT"] {
        assert!(all.contains(needle), "missing {needle}");
    }

    // Too narrow: board only.
    let narrow = screen_text(&view.render(&snap, Viewport::new(26, 20)));
    assert!(!narrow.contains("SCORE"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = Session::new(1).snapshot();
    let view = GameView::default();

    // Board frame is 20 rows tall (18 + border).
    let fb = view.render(&snap, Viewport::new(26, 30));

    // start_y = (30 - 20) / 2 = 5 => top-left corner at (0,5).
    assert_eq!(fb.get(0, 5).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_game_over_banner() {
    let mut snap = Session::new(1).snapshot();
    snap.game_over = true;
    snap.ghost_row = None;
    snap.score = 42;

    let all = screen_text(&GameView::default().render(&snap, Viewport::new(60, 24)));
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("SCORE 42"));
}

#[test]
fn term_view_splash_fits_a_small_terminal() {
    let mut fb = FrameBuffer::new(0, 0);
    GameView::default().render_splash_into(Viewport::new(40, 16), &mut fb);
    let all = screen_text(&fb);
    assert!(all.contains("T E T R I S"));
    assert!(all.contains("press any key"));
}

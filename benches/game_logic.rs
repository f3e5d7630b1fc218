use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tap_tetris::core::{Playfield, Session};
use tap_tetris::term::{FrameBuffer, GameView, Viewport};
use tap_tetris::types::{Intent, PieceKind, BOARD_HEIGHT, BOARD_WIDTH, TICK_MS};

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(12345);
    let mut now = 0u64;

    c.bench_function("session_tick_16ms", |b| {
        b.iter(|| {
            now += u64::from(TICK_MS);
            session.update(black_box(&Intent::IDLE), now);
            if session.is_game_over() {
                session.init();
            }
        })
    });
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    let mut session = Session::new(12345);
    let mut now = 0u64;
    let drop = Intent {
        hard_drop: true,
        ..Intent::IDLE
    };

    c.bench_function("hard_drop_cycle", |b| {
        b.iter(|| {
            // Idle tick past the action gate, then drop and lock.
            now += 128;
            session.update(&Intent::IDLE, now);
            now += u64::from(TICK_MS);
            session.update(black_box(&drop), now);
            if session.is_game_over() {
                session.init();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut field = Playfield::new();
            // Fill bottom 4 rows
            for row in (BOARD_HEIGHT - 4)..BOARD_HEIGHT {
                for col in 0..BOARD_WIDTH {
                    field.set(row as i8, col as i8, Some(PieceKind::I));
                }
            }
            black_box(field.clear_full_rows());
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let snap = Session::new(12345).snapshot();
    let view = GameView::default();
    let viewport = Viewport::new(80, 24);
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    c.bench_function("render_into_80x24", |b| {
        b.iter(|| {
            view.render_into(black_box(&snap), viewport, &mut fb);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop_cycle,
    bench_line_clear,
    bench_render
);
criterion_main!(benches);

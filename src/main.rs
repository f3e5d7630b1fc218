//! Terminal runner (default binary).
//!
//! Owns the one game session, feeds it keyboard intents on a fixed 16ms tick
//! and renders it with the framebuffer renderer.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tap_tetris::core::{GameSnapshot, Session};
use tap_tetris::input::{should_quit, KeyboardIntentSource, RestartGate};
use tap_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tap_tetris::types::TICK_MS;

/// Falling-block puzzle in the terminal.
#[derive(Debug, Parser)]
#[command(
    name = "tap-tetris",
    version,
    about = "Falling-block puzzle in the terminal.",
    long_about = "Falling-block puzzle in the terminal.\n\n\
        CONTROLS:\n  Left/a/h  Right/d/l  Move      Down/s/j  Soft drop\n  \
        Up/w/k/x  Rotate     Space     Hard drop   c  Hold\n  q / Esc   Quit"
)]
struct Args {
    /// RNG seed. Defaults to the wall clock.
    #[arg(long, value_name = "N")]
    seed: Option<u32>,

    /// Write logs to FILE (filter with RUST_LOG). Logging is off without it.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,

    /// Board cell width in terminal columns.
    #[arg(long, default_value = "2", value_name = "COLS")]
    cell_width: u16,

    /// Start playing immediately instead of showing the title screen.
    #[arg(long)]
    no_splash: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Screen {
    Splash,
    Playing,
    GameOver,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    info!("starting with seed {seed}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &args, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Logs go to a file; stderr would draw over the alternate screen.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, args: &Args, seed: u32) -> Result<()> {
    let view = GameView::new(args.cell_width, 1);
    let mut session = Session::new(seed);
    let mut keys = KeyboardIntentSource::new();
    let mut restart = RestartGate::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut screen = if args.no_splash {
        Screen::Playing
    } else {
        Screen::Splash
    };

    let clock = Instant::now();
    let now_ms = || clock.elapsed().as_millis() as u64;
    let tick = Duration::from_millis(u64::from(TICK_MS));
    let mut next_tick = clock + tick;

    loop {
        if session.take_needs_redraw() {
            term.invalidate();
        }

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        if screen == Screen::Splash {
            view.render_splash_into(viewport, &mut fb);
        } else {
            session.snapshot_into(&mut snap);
            view.render_into(&snap, viewport, &mut fb);
        }
        term.present(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    let pressed = key.kind == KeyEventKind::Press;
                    if pressed && should_quit(key) {
                        info!("quit: score {} lines {}", session.score(), session.lines());
                        return Ok(());
                    }
                    match screen {
                        Screen::Playing => keys.handle_key(key, now_ms()),
                        Screen::Splash if pressed => {
                            keys.reset();
                            screen = Screen::Playing;
                        }
                        Screen::GameOver if restart.handle_key(key, now_ms()) => {
                            session.init();
                            keys.reset();
                            screen = Screen::Playing;
                        }
                        _ => {}
                    }
                }
                Event::Resize(..) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        let now = Instant::now();
        if now >= next_tick {
            next_tick += tick;
            if next_tick < now {
                // Fell behind (suspended terminal, slow host): don't replay missed ticks.
                next_tick = now + tick;
            }

            if screen == Screen::Playing {
                let t = now_ms();
                let intent = keys.take_intent(t);
                session.update(&intent, t);
                if session.is_game_over() {
                    restart.arm(t);
                    screen = Screen::GameOver;
                }
            }
        }
    }
}

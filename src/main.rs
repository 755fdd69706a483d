//! Terminal runner (default binary).
//!
//! Each iteration collects key presses until the next tick boundary, then
//! feeds them to the engine in arrival order together with one gravity step,
//! and redraws. Quit exits immediately; nothing is saved.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event};

use tetris_tick::core::{Engine, Snapshot};
use tetris_tick::input::{is_press, map_key_event};
use tetris_tick::logger;
use tetris_tick::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tetris_tick::types::{Command, TICK_MS};

fn main() -> Result<()> {
    logger::init_from_env()?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    log::logger().flush();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let seed = clock_seed();
    let mut engine = Engine::new(seed);
    log::info!("new game, seed {seed}");

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut pending: Vec<Command> = Vec::with_capacity(16);
    let mut pieces_locked: u32 = 0;

    let tick = Duration::from_millis(TICK_MS as u64);
    let mut next_tick = Instant::now() + tick;
    let mut snapshot = engine.snapshot();
    draw(term, &view, &snapshot, &mut fb)?;

    loop {
        // Wait for input until the tick boundary.
        let now = Instant::now();
        if now < next_tick {
            if !event::poll(next_tick - now)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if is_press(&key) => match map_key_event(key) {
                    Some(Command::Quit) => return Ok(()),
                    Some(command) => {
                        log::trace!("queued {}", command.as_str());
                        pending.push(command);
                    }
                    None => {}
                },
                Event::Resize(..) => {
                    term.invalidate();
                    draw(term, &view, &snapshot, &mut fb)?;
                }
                _ => {}
            }
            continue;
        }

        // Tick.
        next_tick += tick;
        if next_tick < now {
            // Fell behind (suspended terminal, slow redraw): don't burst-catch-up.
            next_tick = now + tick;
        }

        if !engine.game_over() {
            snapshot = engine.step(&pending);
            if let Some(ev) = engine.take_last_event() {
                pieces_locked += 1;
                if ev.game_over {
                    log::info!("session ended after {pieces_locked} pieces");
                }
            }
        }
        pending.clear();

        draw(term, &view, &snapshot, &mut fb)?;
    }
}

fn draw(
    term: &mut TerminalRenderer,
    view: &GameView,
    snapshot: &Snapshot,
    fb: &mut FrameBuffer,
) -> Result<()> {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    view.render_into(snapshot, Viewport::new(w, h), fb);
    term.draw_swap(fb)
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

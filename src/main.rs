//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and
//! a framebuffer-based renderer. The engine commits every accepted move
//! synchronously before this loop starts animating it, so an interrupted
//! animation can never leave the session inconsistent.

use std::thread;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{GameState, MoveRecord};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::{GameAction, ANIM_MS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Seed the session from the wall clock. Tests use fixed seeds instead.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn viewport() -> Viewport {
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    Viewport::new(w, h)
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let mut game = GameState::new(clock_seed());
    let view = GameView::default();

    loop {
        let fb = view.render(&game.snapshot(), viewport());
        term.draw(&fb)?;

        // The board only changes on key presses, so block until one arrives.
        // Resize events fall through and trigger a redraw.
        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if should_quit(key) {
                return Ok(());
            }
            match handle_key_event(key) {
                Some(GameAction::Restart) => game.restart(),
                Some(GameAction::Undo) => {
                    game.undo();
                }
                Some(GameAction::Move(direction)) => {
                    if let Some(record) = game.try_move(direction) {
                        animate(term, &view, &game, &record)?;
                    }
                }
                None => {}
            }
        }
    }
}

/// Replay the slide from the move record, then fall through to the normal
/// draw of the committed (post-spawn) board.
fn animate(
    term: &mut TerminalRenderer,
    view: &GameView,
    game: &GameState,
    record: &MoveRecord,
) -> Result<()> {
    let snap = game.snapshot();
    let start = Instant::now();
    let duration = Duration::from_millis(ANIM_MS);
    let tick = Duration::from_millis(TICK_MS);

    loop {
        let t = start.elapsed().as_secs_f32() / duration.as_secs_f32();
        if t >= 1.0 {
            break;
        }
        let fb = view.render_anim(&snap, &record.before, &record.tile_map, t, viewport());
        term.draw(&fb)?;
        thread::sleep(tick);
    }
    Ok(())
}

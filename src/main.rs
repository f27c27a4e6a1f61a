//! Terminal 2048 runner (default binary).
//!
//! Turn-based control loop: render the current snapshot, block on one key
//! event, apply the mapped action, persist any best-score change. One
//! directional move is processed per key press.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_2048::core::{Game, GameSnapshot};
use tui_2048::input::{handle_key_event, should_quit};
use tui_2048::store::ScoreStore;
use tui_2048::term::{GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = ScoreStore::default();

    let mut game = Game::new(clock_seed()).with_best_score(store.load());
    game.start();

    let view = GameView::default();
    let mut snap = GameSnapshot::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snap);
        let fb = view.render(&snap, Viewport::new(w, h));
        term.draw(&fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }

                if let Some(action) = handle_key_event(key) {
                    match action {
                        GameAction::Move(dir) => {
                            game.update(dir);
                        }
                        GameAction::Restart => game.reset(),
                    }

                    // Write failures are tolerated silently; the score
                    // store degrades to in-memory behavior.
                    if let Some(best) = game.take_best_score_update() {
                        let _ = store.save(best);
                    }
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

/// Seed the engine from the wall clock. Tests inject fixed seeds instead.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ (d.as_secs() as u32))
        .unwrap_or(1)
}

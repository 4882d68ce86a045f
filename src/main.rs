//! Terminal rock-paper-scissors runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_rps::term`.
//! Rounds only happen on key presses, so the loop blocks on input instead of
//! ticking.

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;

use tui_rps::core::GameEngine;
use tui_rps::input::{handle_key_event, should_quit};
use tui_rps::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_rps::{logging, AppConfig, Session};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    logging::init(config.log_path.as_deref())?;

    let engine = match config.seed {
        Some(seed) => GameEngine::seeded(seed),
        None => GameEngine::from_os_rng(),
    };
    let mut session = Session::new(engine, config.history_capacity);
    info!(seed = ?config.seed, history = config.history_capacity, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session);

    // Always try to restore terminal state.
    let _ = term.exit();
    info!(score = ?session.engine().current_score(), "exiting");
    result
}

fn run(term: &mut TerminalRenderer, session: &mut Session) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&session.snapshot(), Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply(action);
                }
            }
            Event::Resize(..) => term.invalidate(),
            _ => {}
        }
    }
}

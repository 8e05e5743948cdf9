//! Terminal guessing game runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `tui_guess::term`.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_guess::app::App;
use tui_guess::config::{init_logging, AppConfig};
use tui_guess::core::Game;
use tui_guess::input::{handle_key_event, should_quit};
use tui_guess::store::FileStorage;
use tui_guess::term::{Confetti, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_guess::types::TICK_MS;

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(config.log_level)?;

    let seed = config.seed_or_random();
    info!(
        "starting with seed {} and storage {}",
        seed,
        config.data_path.display()
    );
    let game = Game::new(FileStorage::new(&config.data_path), seed);
    let confetti = Confetti::new(seed.rotate_left(16));
    let mut app = App::new(game, confetti, config.confetti_enabled);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App<FileStorage>) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let viewport = Viewport::new(w, h);
        app.set_viewport(viewport);
        app.render_into(&view, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout).context("polling terminal events")? {
            match event::read().context("reading terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key, app.mode()) {
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key, app.mode()) {
                        app.handle(action, chrono::Local::now().date_naive());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            app.tick(TICK_MS);
        }
    }
}

//! Terminal word game runner (default binary).
//!
//! Reads settings from the environment (see `wordtris::core::config`), loads
//! the word list, then runs the game on the alternate screen with crossterm
//! input and the framebuffer renderer.

use std::fs::File;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event};
use log::info;

use wordtris::core::{Game, GameConfig, WordDictionary};
use wordtris::input::{handle_key_event, is_actionable, should_quit};
use wordtris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use wordtris::types::{GameEvent, FRAME_MS};

/// How long the word panel stays highlighted after a clear
const WORD_FLASH: Duration = Duration::from_millis(400);

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    config.validate()?;
    init_logging(&config)?;

    // Startup failures are reported before the terminal is touched.
    let dictionary = WordDictionary::load(&config.dictionary_path).with_context(|| {
        format!(
            "cannot start without a word list (set WORDTRIS_DICTIONARY, tried {})",
            config.dictionary_path.display()
        )
    })?;
    let pool = config.letter_pool().context("failed to load letter table")?;
    let seed = config.seed.unwrap_or_else(time_seed);
    info!(
        "starting {}x{} game, seed {}, tick {}ms",
        config.width, config.height, seed, config.tick_ms
    );

    let mut game =
        Game::new(config.width, config.height, dictionary, pool, seed).with_tick_ms(config.tick_ms);
    game.start();

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut game);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, game: &mut Game) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let frame = Duration::from_millis(u64::from(FRAME_MS));
    let mut last_frame = Instant::now();
    let mut flash_until: Option<Instant> = None;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let flash = flash_until.is_some_and(|t| Instant::now() < t);
        view.render_into_with_flash(game, flash, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until the next frame.
        let timeout = frame.saturating_sub(last_frame.elapsed());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if is_actionable(key) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        game.apply(command);
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Tick. A finished game keeps its final board on screen until quit.
        let elapsed = last_frame.elapsed();
        if elapsed >= frame {
            last_frame = Instant::now();
            if !game.is_game_over() {
                game.tick(elapsed.as_millis().min(u128::from(u32::MAX)) as u32);
            }
        }

        for event in game.take_events() {
            if event == GameEvent::WordFound {
                flash_until = Some(Instant::now() + WORD_FLASH);
            }
        }
    }
}

/// Log to a file only: stderr would draw over the alternate screen.
fn init_logging(config: &GameConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn time_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

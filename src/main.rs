//! Terminal Blockfall runner (default binary).
//!
//! Owns everything the engine deliberately does not: the clock, keyboard
//! polling, pause/restart and drawing. Gravity is paced at the session's
//! current drop interval, re-read after every step.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use env_logger::{Env, Target};
use log::info;

use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, should_quit, KeyCommand};
use blockfall::term::{FrameBuffer, GameView, Overlay, TerminalRenderer, Viewport};
use blockfall::types::GameAction;

/// Falling-block puzzle game for the terminal.
///
/// Keys: arrows / hjkl / wasd move and rotate, space hard-drops,
/// p pauses, r restarts, q quits.
#[derive(Debug, Parser)]
#[command(name = "blockfall", version, about)]
struct Args {
    /// Seed for the piece generator (random when omitted)
    #[arg(long, env = "BLOCKFALL_SEED")]
    seed: Option<u64>,

    /// Write logs to this file (filter with RUST_LOG, default "info")
    #[arg(long, env = "BLOCKFALL_LOG_FILE")]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_file.as_deref())?;

    let seed = args.seed.unwrap_or_else(rand::random);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// The terminal is in raw mode on the alternate screen, so logs only go to a file.
fn init_logging(path: Option<&Path>) -> Result<()> {
    let Some(path) = path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

fn run(term: &mut TerminalRenderer, mut seed: u64) -> Result<()> {
    let mut game = GameState::new(seed);
    info!("session started, seed {}", seed);

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();
    let mut overlay = Overlay::default();
    let mut next_tick = Instant::now() + game.drop_interval();

    loop {
        // Render.
        game.snapshot_into(&mut snap);
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&snap, overlay, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input until the next gravity tick is due.
        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit: score {}, level {}", game.score(), game.level());
                        return Ok(());
                    }

                    match handle_key_event(key) {
                        Some(KeyCommand::Play(action)) if !overlay.paused => {
                            game.apply_action(action);
                            if action == GameAction::HardDrop {
                                next_tick = Instant::now() + game.drop_interval();
                            }
                        }
                        Some(KeyCommand::Pause) if !game.game_over() => {
                            overlay.paused = !overlay.paused;
                            next_tick = Instant::now() + game.drop_interval();
                        }
                        Some(KeyCommand::Restart) => {
                            seed = seed.wrapping_add(1);
                            game = GameState::new(seed);
                            overlay = Overlay::default();
                            next_tick = Instant::now() + game.drop_interval();
                            info!("session restarted, seed {}", seed);
                        }
                        _ => {}
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        // Gravity.
        if Instant::now() >= next_tick {
            if !overlay.paused {
                game.gravity_step();
            }
            next_tick = Instant::now() + game.drop_interval();
        }
    }
}

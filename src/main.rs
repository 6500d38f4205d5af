//! Terminal Invaders runner (default binary).
//!
//! Drives the core at a fixed tick: poll input until the next tick is due, run
//! one `GameState::tick`, then present the pixel buffer as half-block cells.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{debug, info, warn};

use tui_invaders::config::GameConfig;
use tui_invaders::core::{GameState, PixelBuffer};
use tui_invaders::input::{should_quit, InputHandler};
use tui_invaders::logging::init_tracing;
use tui_invaders::term::{FrameBuffer, GameView, HudView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    init_tracing(&config)?;
    info!(?config, "starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config);

    // Always try to restore terminal state.
    let _ = term.exit();
    match &result {
        Ok(()) => info!("exited"),
        Err(e) => tracing::error!(error = %e, "exited with error"),
    }
    result
}

fn run(term: &mut TerminalRenderer, config: &GameConfig) -> Result<()> {
    let release_events = term.enable_key_release_events()?;
    // With real release events, timeout-based release would drop held keys.
    let key_release_ms = if release_events {
        None
    } else {
        config.key_release_ms
    };
    info!(release_events, ?key_release_ms, "input mode");

    let mut game = GameState::new();
    let mut pixels = PixelBuffer::default();
    let mut input = InputHandler::new().with_key_release_timeout_ms(key_release_ms);

    let view = GameView::new(config.scale);
    let mut fb = FrameBuffer::new(0, 0);

    let tick_duration = Duration::from_millis(u64::from(config.tick_ms));
    let mut last_tick = Instant::now();
    let mut announced_clear = false;

    // The first frame shows the initial formation before any tick runs.
    game.render(&mut pixels);
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            let hud = HudView::from_state(&game);
            view.render_into(&pixels, Some(&hud), Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            info!(score = game.score(), ticks = game.ticks(), "quit requested");
                            return Ok(());
                        }
                        if let Some(action) = input.handle_key_press(key.code) {
                            debug!(action = action.as_str(), "press");
                        }
                    }
                    KeyEventKind::Repeat => input.handle_key_repeat(key.code),
                    KeyEventKind::Release => {
                        if let Some(action) = input.handle_key_release(key.code) {
                            debug!(action = action.as_str(), "release");
                        }
                    }
                },
                Event::Resize(w, h) => {
                    debug!(w, h, "resize");
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input.update(config.tick_ms) {
                debug!(action = action.as_str(), "auto-release");
            }

            let ev = game.tick(input.state_mut(), &mut pixels);
            if !ev.is_quiet() {
                debug!(
                    tick = game.ticks(),
                    fired = ev.fired,
                    fire_dropped = ev.fire_dropped,
                    retired = ev.bullets_retired,
                    hits = ev.aliens_hit,
                    score = game.score(),
                    "tick"
                );
            }
            if ev.fire_dropped {
                warn!(bullets = game.bullets().len(), "bullet pool full, fire dropped");
            }
            if ev.aliens_hit > 0 {
                info!(
                    gained = ev.score_gained,
                    score = game.score(),
                    remaining = game.aliens_alive(),
                    "alien destroyed"
                );
            }
            if game.is_cleared() && !announced_clear {
                announced_clear = true;
                info!(score = game.score(), ticks = game.ticks(), "wave cleared");
            }
            dirty = true;
        }
    }
}

//! Terminal runner (default binary).
//!
//! Owns the three host collaborators of the board: a fixed-interval gravity
//! timer, crossterm key input and the framebuffer renderer. Every board call
//! is made from this one loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};

use tui_stacker::core::{Board, BoardSnapshot, TickOutcome};
use tui_stacker::input::{action_for_event, should_quit};
use tui_stacker::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_stacker::{EventLog, GameConfig};

fn main() -> Result<()> {
    let config = GameConfig::from_env();
    let mut log = EventLog::from_config(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, &mut log);

    // Always try to restore terminal state.
    let _ = term.exit();
    log.flush();

    let board = result?;
    println!(
        "[Game] {} after {} pieces (seed {})",
        if board.is_game_over() { "game over" } else { "quit" },
        board.pieces_spawned(),
        board.seed()
    );
    Ok(())
}

fn run(term: &mut TerminalRenderer, config: &GameConfig, log: &mut EventLog) -> Result<Board> {
    let mut board = Board::new(config.seed);
    log.record_all(board.take_events().iter());

    let view = GameView::default();
    let mut snap = BoardSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut last_fingerprint: Option<u64> = None;
    let mut last_size = (0u16, 0u16);

    let tick_every = Duration::from_millis(config.tick_ms);
    let mut next_tick = Instant::now() + tick_every;

    loop {
        // Render only when the picture changed.
        let size = crossterm::terminal::size().unwrap_or((80, 24));
        board.snapshot_into(&mut snap);
        let fingerprint = snap.fingerprint();
        if size != last_size {
            term.invalidate();
            last_size = size;
            last_fingerprint = None;
        }
        if last_fingerprint != Some(fingerprint) {
            view.render_into(&snap, Viewport::new(size.0, size.1), &mut fb);
            term.present(&mut fb)?;
            last_fingerprint = Some(fingerprint);
        }

        // After game over the timer is stopped; wait for a key indefinitely.
        let timeout = if board.is_game_over() {
            Duration::from_secs(3600)
        } else {
            next_tick.saturating_duration_since(Instant::now())
        };

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if should_quit(key) {
                        return Ok(board);
                    }
                    if let Some(action) = action_for_event(key) {
                        board.apply_action(action);
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    last_fingerprint = None;
                }
                _ => {}
            }
        }

        if !board.is_game_over() && Instant::now() >= next_tick {
            next_tick += tick_every;
            if matches!(board.tick(), TickOutcome::ToppedOut) {
                log.flush();
            }
        }

        log.record_all(board.take_events().iter());
    }
}

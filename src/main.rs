//! Terminal score counter (default binary).
//!
//! Event-driven: the loop blocks on the next terminal event, turns it into a
//! counter action, and redraws only when the session reports a change or the
//! terminal is resized.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{bail, Context, Result};
use crossterm::event::{self, Event, KeyEventKind, MouseButton, MouseEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use duel_counter::core::{ScoreObserver, ScoreSnapshot, ScoreState, Session};
use duel_counter::input::{handle_key_event, should_quit};
use duel_counter::term::{FrameBuffer, ScoreView, TerminalRenderer, Viewport};
use duel_counter::types::STARTING_POINTS;

/// Filter directives; logging is off unless this is set.
const LOG_ENV: &str = "DUEL_COUNTER_LOG";
const LOG_FILE_ENV: &str = "DUEL_COUNTER_LOG_FILE";
const DEFAULT_LOG_FILE: &str = "duel-counter.log";

fn main() -> Result<()> {
    let starting_points = parse_points(std::env::args().skip(1))?;

    if let Err(e) = init_logging() {
        eprintln!("duel-counter: logging disabled: {e:#}");
    }

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, starting_points);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Redraw request raised by the session after each state change.
#[derive(Debug, Default)]
struct RedrawFlag {
    pending: bool,
}

impl RedrawFlag {
    fn take(&mut self) -> bool {
        std::mem::take(&mut self.pending)
    }
}

impl ScoreObserver for RedrawFlag {
    fn state_changed(&mut self, _snap: &ScoreSnapshot) {
        self.pending = true;
    }
}

fn run(term: &mut TerminalRenderer, starting_points: i32) -> Result<()> {
    let mut session = Session::new(
        ScoreState::with_starting_points(starting_points),
        RedrawFlag { pending: true },
    );
    info!(starting_points, "session created");

    let view = ScoreView::new();
    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let mut viewport = Viewport::new(w, h);
    let mut fb = FrameBuffer::new(w, h);

    loop {
        if session.observer_mut().take() {
            view.render_into(&session.snapshot(), viewport, &mut fb);
            term.draw(&fb)?;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    session.apply_action(action);
                }
            }
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                if let Some(action) = view.hit_test(viewport, mouse.column, mouse.row) {
                    session.apply_action(action);
                }
            }
            Event::Resize(w, h) => {
                viewport = Viewport::new(w, h);
                term.invalidate();
                session.observer_mut().pending = true;
            }
            _ => {}
        }
    }
}

/// Parse `--points=N` from the command line (default [`STARTING_POINTS`]).
fn parse_points(args: impl Iterator<Item = String>) -> Result<i32> {
    let mut points = STARTING_POINTS;
    for arg in args {
        let Some(value) = arg.strip_prefix("--points=") else {
            bail!("unknown argument `{arg}` (usage: duel-counter [--points=N])");
        };
        points = value
            .parse::<i32>()
            .with_context(|| format!("invalid --points value `{value}`"))?;
        if points <= 0 {
            bail!("--points must be positive, got {points}");
        }
    }
    Ok(points)
}

fn init_logging() -> Result<()> {
    if std::env::var_os(LOG_ENV).is_none() {
        return Ok(());
    }
    let filter = EnvFilter::try_from_env(LOG_ENV).context("parsing DUEL_COUNTER_LOG")?;
    let path = std::env::var(LOG_FILE_ENV).unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let file = File::create(&path).with_context(|| format!("creating log file {path}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

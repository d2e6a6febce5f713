//! Terminal Game of 15 runner (default binary).
//!
//! Owns everything the core does not: argument parsing, the terminal
//! lifecycle, and translating key events into puzzle actions. The board is
//! re-rendered after every event; the renderer decides what actually needs
//! repainting.

use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};
use crossterm::event::{self, Event, KeyEventKind};

use tui_fifteen::core::PuzzleGame;
use tui_fifteen::input::{map_key, should_quit};
use tui_fifteen::term::{BoardView, Surface, TerminalRenderer, Viewport};
use tui_fifteen::types::{DEFAULT_COLS, DEFAULT_ROWS, MAX_DIM, MIN_DIM};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Options {
    rows: u8,
    cols: u8,
    seed: u32,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            seed: clock_seed(),
        }
    }
}

/// Seed for sessions where none was requested.
fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|elapsed| elapsed.as_millis() as u32)
        .unwrap_or(1)
}

fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options::default();
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--rows" => {
                i += 1;
                options.rows = parse_dimension(args.get(i), "--rows")?;
            }
            "--cols" => {
                i += 1;
                options.cols = parse_dimension(args.get(i), "--cols")?;
            }
            "--seed" => {
                i += 1;
                let v = args.get(i).ok_or_else(|| anyhow!("missing value for --seed"))?;
                options.seed = v
                    .parse::<u32>()
                    .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
            }
            other => {
                return Err(anyhow!(
                    "unknown argument: {} (expected --rows, --cols, --seed)",
                    other
                ));
            }
        }
        i += 1;
    }
    Ok(options)
}

fn parse_dimension(value: Option<&String>, flag: &str) -> Result<u8> {
    let v = value.ok_or_else(|| anyhow!("missing value for {}", flag))?;
    let parsed = v
        .parse::<u8>()
        .map_err(|_| anyhow!("invalid {} value: {}", flag, v))?;
    if !(MIN_DIM..=MAX_DIM).contains(&parsed) {
        return Err(anyhow!(
            "{} must be between {} and {}, got {}",
            flag,
            MIN_DIM,
            MAX_DIM,
            parsed
        ));
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, options);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, options: Options) -> Result<()> {
    let mut game = PuzzleGame::new(options.rows, options.cols, options.seed)?;
    let view = BoardView::default();
    let mut frame = Surface::new(0, 0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game, Viewport::new(w, h), &mut frame);
        term.present(&mut frame)?;

        match event::read()? {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = map_key(key) {
                    game.apply_action(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

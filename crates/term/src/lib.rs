//! Terminal rendering for the puzzle.
//!
//! A small, game-oriented rendering layer: a pure view that draws into a
//! styled character surface, and a crossterm-backed flusher that repaints
//! only the rows a frame actually changed.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so rendered frames can be asserted on in tests

pub mod renderer;
pub mod surface;
pub mod view;

pub use fifteen_core as core;
pub use fifteen_types as types;

pub use renderer::TerminalRenderer;
pub use surface::{Glyph, Rgb, Style, Surface};
pub use view::{BoardView, Viewport};

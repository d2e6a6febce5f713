//! Terminal input for the puzzle.
//!
//! This crate is intentionally independent of any UI layer. It maps
//! `crossterm` key events into [`fifteen_types::PuzzleAction`] values; the
//! host decides what to do with them.

pub mod map;

pub use fifteen_types as types;

pub use map::{map_key, should_quit};

//! Typed errors for puzzle construction and mutation.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// A tile value that is not on the board (0, or past the last tile).
    #[error("no tile {tile} on a {rows}x{cols} board")]
    InvalidTile { tile: u8, rows: u8, cols: u8 },

    /// Dimensions too small to hold one tile plus the empty slot.
    #[error("{rows}x{cols} board cannot hold a tile and the empty slot")]
    InvalidDimensions { rows: u8, cols: u8 },
}

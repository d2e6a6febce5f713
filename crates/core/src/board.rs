//! Board module - the sliding-tile arrangement.
//!
//! Cells are stored row-major in a flat vector: position `p` maps to
//! `(row, col) = (p / cols, p % cols)`. Exactly one cell is empty; the others
//! hold the tile values `1..rows*cols-1`, each exactly once. The only
//! mutation is swapping a tile with the adjacent empty slot.

use arrayvec::ArrayVec;

use fifteen_types::{Cell, SlideDirection};

use crate::error::PuzzleError;
use crate::rng::SimpleRng;

/// Shuffle candidates examined before parity is repaired directly.
///
/// Half of all permutations pass the solvability predicate, so rejection
/// sampling exits after ~2 draws; the bound only exists so the loop is finite.
const SHUFFLE_RETRY_LIMIT: u32 = 128;

/// The tile arrangement of one puzzle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u8,
    cols: u8,
    /// Flat row-major cell storage.
    cells: Vec<Cell>,
    /// Cached position of the empty slot.
    empty: usize,
}

impl Board {
    /// Create a board in the goal arrangement: `1, 2, ..` with the empty slot
    /// last.
    pub fn new_solved(rows: u8, cols: u8) -> Result<Self, PuzzleError> {
        Self::check_dims(rows, cols)?;

        let len = rows as usize * cols as usize;
        let mut cells: Vec<Cell> = (1..len as u8).map(Some).collect();
        cells.push(None);

        Ok(Self {
            rows,
            cols,
            cells,
            empty: len - 1,
        })
    }

    /// Create a board from an explicit arrangement.
    ///
    /// The arrangement must be a permutation of `{1..rows*cols-1, empty}`;
    /// a missing or out-of-range tile is reported as [`PuzzleError::InvalidTile`].
    pub fn from_cells(rows: u8, cols: u8, cells: Vec<Cell>) -> Result<Self, PuzzleError> {
        Self::check_dims(rows, cols)?;

        let len = rows as usize * cols as usize;
        if cells.len() != len {
            return Err(PuzzleError::InvalidDimensions { rows, cols });
        }

        // Exactly one empty slot, every tile value once.
        let mut seen = vec![false; len];
        let mut empty = None;
        for (pos, cell) in cells.iter().enumerate() {
            match cell {
                None => {
                    if empty.is_some() {
                        return Err(PuzzleError::InvalidTile {
                            tile: 0,
                            rows,
                            cols,
                        });
                    }
                    empty = Some(pos);
                }
                Some(tile) => {
                    let t = *tile as usize;
                    if t == 0 || t >= len || seen[t] {
                        return Err(PuzzleError::InvalidTile {
                            tile: *tile,
                            rows,
                            cols,
                        });
                    }
                    seen[t] = true;
                }
            }
        }

        match empty {
            Some(empty) => Ok(Self {
                rows,
                cols,
                cells,
                empty,
            }),
            None => Err(PuzzleError::InvalidTile {
                tile: 0,
                rows,
                cols,
            }),
        }
    }

    /// Create a solvable random arrangement.
    pub fn shuffled(rows: u8, cols: u8, rng: &mut SimpleRng) -> Result<Self, PuzzleError> {
        let mut board = Self::new_solved(rows, cols)?;
        board.reshuffle(rng);
        Ok(board)
    }

    fn check_dims(rows: u8, cols: u8) -> Result<(), PuzzleError> {
        if (rows as usize) * (cols as usize) < 2 {
            return Err(PuzzleError::InvalidDimensions { rows, cols });
        }
        Ok(())
    }

    /// Redraw the arrangement in place until the solvability invariant holds.
    ///
    /// Candidate permutations are drawn uniformly and the first solvable one
    /// wins. If the retry bound is ever exhausted, parity is repaired by
    /// transposing two tiles: a transposition flips inversion parity and
    /// leaves the empty slot where it is.
    pub fn reshuffle(&mut self, rng: &mut SimpleRng) {
        for _ in 0..SHUFFLE_RETRY_LIMIT {
            rng.shuffle(&mut self.cells);
            self.relocate_empty();
            if self.is_solvable() {
                return;
            }
        }

        if let Some((a, b)) = self.adjacent_tile_pair() {
            self.cells.swap(a, b);
        }
    }

    /// Re-find the empty slot after a bulk rearrangement.
    fn relocate_empty(&mut self) {
        if let Some(pos) = self.cells.iter().position(Option::is_none) {
            self.empty = pos;
        }
    }

    /// First index pair `(i, i + 1)` holding two tiles, if the board has one.
    fn adjacent_tile_pair(&self) -> Option<(usize, usize)> {
        self.cells
            .windows(2)
            .position(|pair| pair[0].is_some() && pair[1].is_some())
            .map(|i| (i, i + 1))
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    /// Number of cells, empty slot included.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Raw row-major cells.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Cell at `(row, col)`, or `None` when out of bounds.
    pub fn get(&self, row: u8, col: u8) -> Option<Cell> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        Some(self.cells[self.index(row, col)])
    }

    #[inline]
    fn index(&self, row: u8, col: u8) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// `(row, col)` of a flat position.
    pub fn coords(&self, pos: usize) -> (u8, u8) {
        let cols = self.cols as usize;
        ((pos / cols) as u8, (pos % cols) as u8)
    }

    /// Flat position of a tile value, if present.
    pub fn position_of(&self, tile: u8) -> Option<usize> {
        self.cells.iter().position(|cell| *cell == Some(tile))
    }

    /// Flat position of the empty slot.
    pub fn empty_position(&self) -> usize {
        self.empty
    }

    /// Swap `tile` with the empty slot when they are Manhattan-adjacent.
    ///
    /// Returns whether a swap happened; a non-adjacent tile leaves the board
    /// untouched. A value that is not on the board is an error.
    pub fn move_tile(&mut self, tile: u8) -> Result<bool, PuzzleError> {
        let Some(pos) = self.position_of(tile) else {
            return Err(PuzzleError::InvalidTile {
                tile,
                rows: self.rows,
                cols: self.cols,
            });
        };

        let (row, col) = self.coords(pos);
        let (erow, ecol) = self.coords(self.empty);
        let distance = row.abs_diff(erow) as u16 + col.abs_diff(ecol) as u16;
        if distance != 1 {
            return Ok(false);
        }

        self.cells.swap(pos, self.empty);
        self.empty = pos;
        Ok(true)
    }

    /// Tile that would slide `direction` into the empty slot, if the edge
    /// allows one.
    pub fn slide_candidate(&self, direction: SlideDirection) -> Option<u8> {
        let (dr, dc) = direction.offset();
        let (erow, ecol) = self.coords(self.empty);
        let row = erow as i16 + dr;
        let col = ecol as i16 + dc;
        if row < 0 || row >= self.rows as i16 || col < 0 || col >= self.cols as i16 {
            return None;
        }
        self.get(row as u8, col as u8).flatten()
    }

    /// The up-to-4 tiles adjacent to the empty slot, in row-major order of
    /// their positions.
    pub fn legal_moves(&self) -> ArrayVec<u8, 4> {
        let mut moves = ArrayVec::new();
        for direction in [
            SlideDirection::Down,
            SlideDirection::Right,
            SlideDirection::Left,
            SlideDirection::Up,
        ] {
            if let Some(tile) = self.slide_candidate(direction) {
                moves.push(tile);
            }
        }
        moves
    }

    /// True iff the arrangement is `1, 2, ..` row-major with the empty slot
    /// last.
    pub fn is_solved(&self) -> bool {
        let len = self.cells.len();
        self.empty == len - 1
            && self.cells[..len - 1]
                .iter()
                .enumerate()
                .all(|(i, cell)| *cell == Some(i as u8 + 1))
    }

    /// Inversion-parity solvability check.
    ///
    /// On odd-width boards the arrangement is solvable iff the inversion count
    /// is even. On even-width boards a vertical move changes the inversion
    /// count by an odd amount, so the empty slot's row (counted from the
    /// bottom, 1-based) joins the sum and the total must be odd. Legal moves
    /// never change the verdict.
    pub fn is_solvable(&self) -> bool {
        let inversions = self.inversions();
        if self.cols % 2 == 1 {
            inversions % 2 == 0
        } else {
            let (empty_row, _) = self.coords(self.empty);
            let from_bottom = (self.rows - empty_row) as u32;
            (inversions + from_bottom) % 2 == 1
        }
    }

    /// Number of tile pairs out of order in the flat sequence: every tile
    /// counts the smaller tiles that appear after it.
    fn inversions(&self) -> u32 {
        let mut count = 0;
        for (pos, cell) in self.cells.iter().enumerate() {
            let Some(tile) = cell else { continue };
            count += self.cells[pos + 1..]
                .iter()
                .flatten()
                .filter(|later| **later < *tile)
                .count() as u32;
        }
        count
    }
}

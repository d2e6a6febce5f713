//! Puzzle lifecycle - ties the board, shuffling, and the win state together.
//!
//! `PuzzleGame` is the sole mutation/query contract for a hosting front-end:
//! it owns the board and the session RNG, counts moves, latches the win, and
//! hands out fresh shuffles on demand. Rendering and input translation live
//! with the host.

use fifteen_types::{PuzzleAction, SlideDirection};

use crate::board::Board;
use crate::error::PuzzleError;
use crate::rng::SimpleRng;

/// One puzzle session: a board plus its lifecycle state.
///
/// The state machine is `Unsolved -> (legal move)* -> Solved`; once solved,
/// tile input is ignored until [`PuzzleGame::new_game`].
#[derive(Debug, Clone)]
pub struct PuzzleGame {
    board: Board,
    rng: SimpleRng,
    /// Seed the session started from (for display and replay).
    seed: u32,
    /// Swaps performed since the last shuffle.
    moves: u32,
    /// Increments every new game.
    episode: u32,
    /// Latched when the board reaches the goal; freezes tile input.
    solved: bool,
}

impl PuzzleGame {
    /// Start a session with a freshly shuffled board.
    pub fn new(rows: u8, cols: u8, seed: u32) -> Result<Self, PuzzleError> {
        let mut rng = SimpleRng::new(seed);
        let board = Board::shuffled(rows, cols, &mut rng)?;
        let solved = board.is_solved();
        Ok(Self {
            board,
            rng,
            seed,
            moves: 0,
            episode: 0,
            solved,
        })
    }

    /// Start a session from an explicit arrangement.
    pub fn from_board(board: Board, seed: u32) -> Self {
        let solved = board.is_solved();
        Self {
            board,
            rng: SimpleRng::new(seed),
            seed,
            moves: 0,
            episode: 0,
            solved,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rows(&self) -> u8 {
        self.board.rows()
    }

    pub fn cols(&self) -> u8 {
        self.board.cols()
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn solved(&self) -> bool {
        self.solved
    }

    /// Press a tile by value.
    ///
    /// Swaps it with the empty slot when adjacent and counts the move. Once
    /// the board is solved, presses are ignored until a new game starts.
    pub fn press(&mut self, tile: u8) -> Result<bool, PuzzleError> {
        if self.solved {
            return Ok(false);
        }

        let moved = self.board.move_tile(tile)?;
        if moved {
            self.moves += 1;
            if self.board.is_solved() {
                self.solved = true;
            }
        }
        Ok(moved)
    }

    /// Slide the tile next to the empty slot, if the edge allows it.
    pub fn slide(&mut self, direction: SlideDirection) -> bool {
        if self.solved {
            return false;
        }
        match self.board.slide_candidate(direction) {
            Some(tile) => matches!(self.press(tile), Ok(true)),
            None => false,
        }
    }

    /// Reshuffle with the session RNG and start the next episode.
    pub fn new_game(&mut self) {
        self.board.reshuffle(&mut self.rng);
        self.moves = 0;
        self.episode = self.episode.wrapping_add(1);
        self.solved = self.board.is_solved();
    }

    /// Single dispatch point for host input. Returns whether anything changed.
    pub fn apply_action(&mut self, action: PuzzleAction) -> bool {
        match action {
            PuzzleAction::Slide(direction) => self.slide(direction),
            // An out-of-range press (digit key on a small board) is not a
            // state change.
            PuzzleAction::Press(tile) => self.press(tile).unwrap_or(false),
            PuzzleAction::NewGame => {
                self.new_game();
                true
            }
        }
    }
}

//! Core puzzle logic - pure, deterministic, and testable.
//!
//! This crate holds everything there is to know about the sliding-tile
//! puzzle: the board, solvable shuffles, move legality, and the win state.
//! It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the same `(rows, cols, seed)` replays the same session
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: usable from any front-end that can call a function
//!
//! # Module Structure
//!
//! - [`board`]: row-major tile arrangement, adjacency moves, goal and
//!   solvability checks
//! - [`game`]: session lifecycle - move counting, win freeze, new-game
//!   episodes
//! - [`rng`]: seeded LCG and Fisher-Yates shuffling
//! - [`error`]: typed construction/mutation errors
//!
//! # Rules
//!
//! A shuffle is a uniformly random permutation of the tiles and the empty
//! slot, redrawn until it is solvable (inversion parity). A move swaps a tile
//! with the empty slot iff they are Manhattan-adjacent; anything else is a
//! no-op. The board is won when the tiles read `1, 2, ..` row-major with the
//! empty slot last, and further input is frozen until a new game starts.
//!
//! # Example
//!
//! ```
//! use fifteen_core::PuzzleGame;
//! use fifteen_types::SlideDirection;
//!
//! let mut game = PuzzleGame::new(4, 4, 12345).unwrap();
//! game.slide(SlideDirection::Left);
//! assert!(game.moves() <= 1);
//! assert!(game.board().is_solvable());
//! ```

pub mod board;
pub mod error;
pub mod game;
pub mod rng;

pub use fifteen_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use error::PuzzleError;
pub use game::PuzzleGame;
pub use rng::SimpleRng;

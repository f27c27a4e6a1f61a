//! Core game logic - pure, deterministic, and testable.
//!
//! This crate contains the whole board engine for 2048. It has **zero
//! dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical spawn sequences
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 4x4 grid with the canonical slide/merge transform
//! - [`game`]: engine state machine (score, best score, lifecycle)
//! - [`rng`]: engine-owned seedable RNG for tile spawning
//! - [`snapshot`]: copyable read-only view for renderers
//!
//! # Game Rules
//!
//! - A move slides every line toward one edge; adjacent equal tiles merge
//!   once per destination cell, never chaining within a move
//! - Each merge scores the merged value; spawning never scores
//! - After any move that changed the board, one tile spawns on a uniformly
//!   chosen empty cell: a 2 with probability 9/10, else a 4
//! - The game ends when the board is full and no adjacent equal pair exists
//!
//! # Example
//!
//! ```
//! use tui_2048_core::Game;
//! use tui_2048_types::Direction;
//!
//! let mut game = Game::new(12345);
//! game.start();
//!
//! let outcome = game.update(Direction::Left);
//! if outcome.moved {
//!     assert!(game.free_cells() <= 15);
//! }
//! ```

pub mod board;
pub mod game;
pub mod rng;
pub mod snapshot;

pub use tui_2048_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, SlideOutcome};
pub use game::{Game, TurnOutcome};
pub use rng::SimpleRng;
pub use snapshot::GameSnapshot;

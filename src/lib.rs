//! A heuristic agent for playing the board game 'Connect 4'
//!
//! This agent uses a fixed-depth minimax search with alpha-beta pruning
//! and a window-based position evaluator to pick the bot's move.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_bot::board::{Board, Mark};
//! use connect4_bot::engine::Engine;
//!
//! let mut board = Board::new();
//! board.drop_piece(3, Mark::Player);
//!
//! let mut engine = Engine::with_seed(5, 42);
//! let column = engine.choose_move(&board);
//!
//! assert!(column.is_some());
//! ```

use static_assertions::*;
pub use anyhow;

pub mod board;

pub mod engine;


/// The width of the game board in tiles
pub const COLUMNS: usize = 7;

/// The height of the game board in tiles
pub const ROWS: usize = 6;

/// The length of an alignment that wins the game
pub const WINDOW_LENGTH: usize = 4;

// ensure that a winning window fits the grid in every direction
const_assert!(WINDOW_LENGTH <= COLUMNS);
const_assert!(WINDOW_LENGTH <= ROWS);

//! Othello rules engine and search player for rectangular boards
//!
//! Standard Othello capture rules on a grid of any size from 2x2 up to 128
//! cells, with the 9 columns x 7 rows tournament board as the default:
//! - A placement must bracket at least one line of opponent discs
//! - Every bracketed line is flipped
//! - A side with no legal move passes
//! - The game ends when a color is wiped out, the board is full, or
//!   neither side can move
//!
//! # Architecture
//!
//! The engine is organized into several modules:
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Capture rules, move generation, end-of-game detection
//! - [`eval`]: Weighted heuristic terms and positional tables
//! - [`search`]: Fixed-depth negamax with alpha-beta pruning
//! - [`engine`]: Configured player and the tournament grid adapter
//! - [`game`]: A match in progress with turn and pass handling
//!
//! # Quick Start
//!
//! ```
//! use othello::{apply_move, choose_move, legal_moves, Board, Color, Move};
//!
//! let board = Board::tournament();
//! assert_eq!(legal_moves(&board, Color::Black).len(), 4);
//!
//! if let Move::Place(pos) = choose_move(&board, Color::Black, 3) {
//!     let next = apply_move(&board, pos.col.into(), pos.row.into(), Color::Black).unwrap();
//!     assert_eq!(next.black_count(), 4);
//! }
//! ```
//!
//! Logging goes through the `log` facade; install any logger in the binary
//! to see per-decision summaries at `debug` level.

pub mod board;
pub mod engine;
pub mod error;
pub mod eval;
pub mod game;
pub mod rules;
pub mod search;

// Re-export commonly used types for convenience
pub use board::{Board, Cell, Color, Dimensions, Move, Pos};
pub use engine::{apply_move, choose_move, legal_moves, EngineConfig, MoveResult, OthelloEngine};
pub use error::{EngineError, Result};
pub use eval::{Evaluator, Term, WIN_SCORE};
pub use game::Game;
pub use rules::Outcome;
pub use search::{SearchConfig, Searcher};

//! Search module for the Othello player
//!
//! Contains:
//! - Ephemeral search nodes (board, side to move, legal moves)
//! - Fixed-depth negamax with alpha-beta pruning

pub mod alphabeta;
pub mod node;

pub use alphabeta::{SearchConfig, SearchResult, SearchStats, Searcher, DEFAULT_DEPTH};
pub use node::SearchNode;

//! Evaluation module for Othello positions
//!
//! The evaluation considers:
//! - Positional cell weights (last move and whole board)
//! - Corner control, stability and frontier exposure
//! - Mobility and parity
//! - Disc count, mostly in the endgame

pub mod heuristic;
pub mod terms;
pub mod weights;

pub use heuristic::{terminal_score, Evaluator, Term, WeightedTerm, DEFAULT_TERMS, WIN_SCORE};
pub use weights::{Phase, PhaseWeight, WeightTable};

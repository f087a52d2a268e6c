//! Game rules for Othello
//!
//! This module implements the rule set:
//! - Capture rules (ray bracketing and flipping)
//! - Legal move generation in a fixed raster order
//! - End-of-game detection

pub mod capture;
pub mod movegen;
pub mod win;

// Re-exports for convenient access
pub use capture::{apply, flips, is_legal};
pub use movegen::{has_legal_move, legal_move_count, legal_moves};
pub use win::{is_game_over, is_stalled, outcome, winner, Outcome};

//! End-of-game detection
//!
//! The board-level game-over test does not depend on whose turn it is: one
//! color wiped out, or no empty cell left.

use crate::board::{Board, Color};

use super::movegen::has_legal_move;

/// Final (or current) standing by disc count
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Win(Color),
    Draw,
}

/// True when either color has no discs or the board is full.
#[inline]
pub fn is_game_over(board: &Board) -> bool {
    board.white_count() == 0 || board.black_count() == 0 || board.is_full()
}

/// True when neither side can place a disc. Covers [`is_game_over`] boards
/// as well as mid-board double-pass stalls.
pub fn is_stalled(board: &Board) -> bool {
    !has_legal_move(board, Color::White) && !has_legal_move(board, Color::Black)
}

/// Standing by disc count.
pub fn outcome(board: &Board) -> Outcome {
    match board.white_count().cmp(&board.black_count()) {
        std::cmp::Ordering::Greater => Outcome::Win(Color::White),
        std::cmp::Ordering::Less => Outcome::Win(Color::Black),
        std::cmp::Ordering::Equal => Outcome::Draw,
    }
}

/// The winner of a finished board, `None` while play continues or on a draw.
pub fn winner(board: &Board) -> Option<Color> {
    if !is_game_over(board) && !is_stalled(board) {
        return None;
    }
    match outcome(board) {
        Outcome::Win(color) => Some(color),
        Outcome::Draw => None,
    }
}

//! Search tree nodes
//!
//! A node owns its board by value and knows the side to move, the move that
//! produced it and that side's legal moves. There is no parent link: the
//! root color is passed down the recursion instead.

use crate::board::{Board, Color, Move, Pos};
use crate::rules::capture::play;
use crate::rules::{has_legal_move, is_game_over, legal_moves};

#[derive(Debug, Clone)]
pub struct SearchNode {
    board: Board,
    to_move: Color,
    last_move: Option<Move>,
    moves: Vec<Pos>,
}

impl SearchNode {
    /// Node for `board` with `to_move` on turn. `last_move` is `None` at the
    /// root of a search.
    pub fn new(board: Board, to_move: Color, last_move: Option<Move>) -> Self {
        let moves = legal_moves(&board, to_move);
        Self {
            board,
            to_move,
            last_move,
            moves,
        }
    }

    /// Child reached by playing one of this node's legal moves.
    pub fn child(&self, pos: Pos) -> SearchNode {
        debug_assert!(self.moves.contains(&pos));
        let board = play(&self.board, pos, self.to_move);
        SearchNode::new(board, self.to_move.opponent(), Some(Move::Place(pos)))
    }

    /// Same board with the turn handed to the opponent.
    pub fn passed(&self) -> SearchNode {
        SearchNode::new(self.board, self.to_move.opponent(), Some(Move::Pass))
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn to_move(&self) -> Color {
        self.to_move
    }

    #[inline]
    pub fn last_move(&self) -> Option<Move> {
        self.last_move
    }

    /// Legal moves of the side to move, in raster order
    #[inline]
    pub fn moves(&self) -> &[Pos] {
        &self.moves
    }

    #[inline]
    pub fn legal_move_count(&self) -> usize {
        self.moves.len()
    }

    /// Side to move must pass (but the game may go on).
    #[inline]
    pub fn must_pass(&self) -> bool {
        self.moves.is_empty()
    }

    /// Neither side can move.
    pub fn is_stalled(&self) -> bool {
        self.must_pass() && !has_legal_move(&self.board, self.to_move.opponent())
    }

    /// Board-level game over, or both sides stuck.
    pub fn is_terminal(&self) -> bool {
        is_game_over(&self.board) || self.is_stalled()
    }
}

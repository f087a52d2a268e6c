//! Fixed-depth negamax search with alpha-beta pruning
//!
//! Every node is a fresh [`SearchNode`] built from a copied [`Board`], so
//! sibling branches never share state. The root color is threaded through
//! the recursion; the evaluator always scores for it and the search flips
//! the sign for nodes where the opponent is on turn.
//!
//! # Example
//!
//! ```
//! use othello::board::{Board, Color, Move};
//! use othello::eval::Evaluator;
//! use othello::search::{SearchConfig, Searcher};
//!
//! let board = Board::tournament();
//! let searcher = Searcher::new(Evaluator::new(board.dims()), SearchConfig::new(3));
//!
//! let result = searcher.search(&board, Color::Black).unwrap();
//! if let Move::Place(pos) = result.best_move {
//!     println!("Best move: {pos}");
//! }
//! ```

use log::{debug, trace};

use crate::board::{Board, Color, Move};
use crate::error::{EngineError, Result};
use crate::eval::Evaluator;

use super::SearchNode;

/// Search depth used by the tournament player.
pub const DEFAULT_DEPTH: u8 = 5;

/// Search parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies to look ahead. A forced pass consumes one ply.
    pub depth: u8,
    /// Alpha-beta cutoffs. Disabling them gives plain minimax with the same
    /// value and the same chosen move, only slower.
    pub pruning: bool,
}

impl SearchConfig {
    pub fn new(depth: u8) -> Self {
        Self {
            depth,
            pruning: true,
        }
    }

    /// Full-width minimax, no cutoffs.
    pub fn minimax(depth: u8) -> Self {
        Self {
            depth,
            pruning: false,
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

/// Search statistics for diagnostics and tuning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, root included
    pub nodes: u64,
    /// Nodes scored by the evaluator
    pub leaves: u64,
    /// Sibling loops cut short by a beta cutoff
    pub cutoffs: u64,
    /// Forced passes met inside the tree
    pub passes: u64,
}

/// Search result containing the chosen move and associated statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    /// Chosen move, `Move::Pass` when the side has nothing to play
    pub best_move: Move,
    /// Backed-up score from the searching side's point of view
    pub score: f64,
    /// Depth searched
    pub depth: u8,
    pub stats: SearchStats,
}

/// Per-call search state. Built for one decision and dropped afterwards.
struct SearchContext<'a> {
    evaluator: &'a Evaluator,
    root: Color,
    pruning: bool,
    stats: SearchStats,
}

impl SearchContext<'_> {
    /// Negamax value of `node` from the point of view of its side to move.
    fn negamax(&mut self, node: &SearchNode, depth: u8, mut alpha: f64, beta: f64) -> f64 {
        self.stats.nodes += 1;

        if depth == 0 || node.is_terminal() {
            self.stats.leaves += 1;
            let score = self.evaluator.evaluate(node, self.root);
            return if node.to_move() == self.root {
                score
            } else {
                -score
            };
        }

        // Single-sided stall: hand the turn over and keep searching.
        if node.must_pass() {
            self.stats.passes += 1;
            return -self.negamax(&node.passed(), depth - 1, -beta, -alpha);
        }

        let mut best = f64::NEG_INFINITY;
        for &pos in node.moves() {
            let child = node.child(pos);
            let score = -self.negamax(&child, depth - 1, -beta, -alpha);
            if score > best {
                best = score;
            }
            if !self.pruning {
                continue;
            }
            if best > alpha {
                alpha = best;
            }
            if best >= beta {
                self.stats.cutoffs += 1;
                break;
            }
        }
        best
    }
}

/// Fixed-depth alpha-beta searcher.
///
/// Stateless between calls: each [`search`](Self::search) builds and drops
/// its own tree, so one searcher can serve any number of games.
#[derive(Debug, Clone)]
pub struct Searcher {
    evaluator: Evaluator,
    config: SearchConfig,
}

impl Searcher {
    pub fn new(evaluator: Evaluator, config: SearchConfig) -> Self {
        Self { evaluator, config }
    }

    #[inline]
    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    #[inline]
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.config.depth = depth;
    }

    /// Choose a move for `color`.
    ///
    /// Returns `Move::Pass` without searching when `color` has no legal move
    /// or the configured depth is 0. Among equally scored moves the first in
    /// raster order is kept. A board whose size differs from the evaluator's
    /// weight table is rejected.
    pub fn search(&self, board: &Board, color: Color) -> Result<SearchResult> {
        let expected = self.evaluator.table().dims();
        let dims = board.dims();
        if dims != expected {
            return Err(EngineError::DimensionMismatch {
                expected_width: expected.width(),
                expected_height: expected.height(),
                width: dims.width(),
                height: dims.height(),
            });
        }
        Ok(self.search_unchecked(board, color))
    }

    /// [`search`](Self::search) for a board already known to match the
    /// evaluator's dimensions.
    pub(crate) fn search_unchecked(&self, board: &Board, color: Color) -> SearchResult {
        let depth = self.config.depth;
        let root = SearchNode::new(*board, color, None);

        if root.must_pass() || depth == 0 {
            return SearchResult {
                best_move: Move::Pass,
                score: self.evaluator.evaluate(&root, color),
                depth: 0,
                stats: SearchStats::default(),
            };
        }

        let mut ctx = SearchContext {
            evaluator: &self.evaluator,
            root: color,
            pruning: self.config.pruning,
            stats: SearchStats {
                nodes: 1,
                ..SearchStats::default()
            },
        };

        let mut alpha = f64::NEG_INFINITY;
        let beta = f64::INFINITY;
        let mut best_score = f64::NEG_INFINITY;
        let mut best_move = Move::Pass;

        for &pos in root.moves() {
            let child = root.child(pos);
            let score = -ctx.negamax(&child, depth - 1, -beta, -alpha);
            trace!("{color:?} {pos} -> {score}");

            if score > best_score {
                best_score = score;
                best_move = Move::Place(pos);
            }
            if ctx.pruning && best_score > alpha {
                alpha = best_score;
            }
        }

        debug!(
            "{color:?} depth {depth}: {best_move} score {best_score} ({} nodes, {} cutoffs)",
            ctx.stats.nodes, ctx.stats.cutoffs
        );

        SearchResult {
            best_move,
            score: best_score,
            depth,
            stats: ctx.stats,
        }
    }

    /// Shorthand for `search(board, color)?.best_move`.
    pub fn choose_move(&self, board: &Board, color: Color) -> Result<Move> {
        Ok(self.search(board, color)?.best_move)
    }
}

//! Heuristic evaluation function for Othello positions
//!
//! The evaluator is an ordered list of named terms, each with a midgame and
//! an endgame weight. Scores are always from the root color's point of view,
//! whoever is on turn at the evaluated node. Finished games bypass the terms
//! and return a win/loss sentinel.

use crate::board::{Board, Color, Dimensions};
use crate::rules::{is_game_over, legal_move_count, outcome, Outcome};
use crate::search::SearchNode;

use super::terms;
use super::weights::{Phase, PhaseWeight, WeightTable};

/// Score of a won game. Losses score `-WIN_SCORE`, draws 0.
pub const WIN_SCORE: f64 = f64::MAX;

/// Heuristic terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Term {
    /// Table weight of the cell just played
    LastMove,
    /// Table weights summed over the whole board
    Positional,
    /// Corner ownership
    Corners,
    /// Legal move count difference
    Mobility,
    /// Interior minus frontier discs
    Frontier,
    /// Stable disc difference
    Stability,
    /// Disc count difference
    DiscDifference,
    /// Who gets the last move
    Parity,
}

impl Term {
    pub const ALL: [Term; 8] = [
        Term::LastMove,
        Term::Positional,
        Term::Corners,
        Term::Mobility,
        Term::Frontier,
        Term::Stability,
        Term::DiscDifference,
        Term::Parity,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Term::LastMove => "last_move",
            Term::Positional => "positional",
            Term::Corners => "corners",
            Term::Mobility => "mobility",
            Term::Frontier => "frontier",
            Term::Stability => "stability",
            Term::DiscDifference => "disc_difference",
            Term::Parity => "parity",
        }
    }

    /// Unweighted score of this term.
    pub fn score(self, node: &SearchNode, root: Color, table: &WeightTable) -> f64 {
        let board = node.board();
        match self {
            Term::LastMove => terms::last_move(board, table, root, node.last_move()),
            Term::Positional => terms::positional(board, table, root),
            Term::Corners => terms::corners(board, root),
            Term::Mobility => {
                let (root_moves, opponent_moves) = if node.to_move() == root {
                    (node.legal_move_count(), legal_move_count(board, root.opponent()))
                } else {
                    (legal_move_count(board, root), node.legal_move_count())
                };
                terms::mobility(root_moves, opponent_moves)
            }
            Term::Frontier => terms::frontier(board, root),
            Term::Stability => terms::stability(board, root),
            Term::DiscDifference => terms::disc_difference(board, root),
            Term::Parity => terms::parity(board, root, node.to_move()),
        }
    }
}

/// A term with its weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightedTerm {
    pub term: Term,
    pub weight: PhaseWeight,
}

impl WeightedTerm {
    pub const fn new(term: Term, weight: PhaseWeight) -> Self {
        Self { term, weight }
    }
}

/// Default weights. Corners and stability dominate throughout; raw disc
/// count only matters once the board is more than half full.
pub const DEFAULT_TERMS: [WeightedTerm; 8] = [
    WeightedTerm::new(Term::LastMove, PhaseWeight::new(1.0, 0.5)),
    WeightedTerm::new(Term::Positional, PhaseWeight::new(1.0, 0.5)),
    WeightedTerm::new(Term::Corners, PhaseWeight::flat(30.0)),
    WeightedTerm::new(Term::Mobility, PhaseWeight::new(3.0, 1.0)),
    WeightedTerm::new(Term::Frontier, PhaseWeight::new(0.5, 0.25)),
    WeightedTerm::new(Term::Stability, PhaseWeight::flat(4.0)),
    WeightedTerm::new(Term::DiscDifference, PhaseWeight::new(0.1, 5.0)),
    WeightedTerm::new(Term::Parity, PhaseWeight::new(1.0, 3.0)),
];

/// Sentinel score for finished games, `None` while the game is on.
///
/// A game is finished when the board is over (a color wiped out or no empty
/// cell) or when `stalled` reports that neither side can move.
pub fn terminal_score(board: &Board, root: Color, stalled: bool) -> Option<f64> {
    if !is_game_over(board) && !stalled {
        return None;
    }
    Some(match outcome(board) {
        Outcome::Win(color) if color == root => WIN_SCORE,
        Outcome::Win(_) => -WIN_SCORE,
        Outcome::Draw => 0.0,
    })
}

/// Weighted sum of heuristic terms.
#[derive(Debug, Clone, PartialEq)]
pub struct Evaluator {
    table: WeightTable,
    terms: Vec<WeightedTerm>,
}

impl Evaluator {
    /// Default terms with the positional table for `dims`.
    pub fn new(dims: Dimensions) -> Self {
        Self::with_terms(WeightTable::for_dimensions(dims), DEFAULT_TERMS.to_vec())
    }

    pub fn with_terms(table: WeightTable, terms: Vec<WeightedTerm>) -> Self {
        Self { table, terms }
    }

    #[inline]
    pub fn table(&self) -> &WeightTable {
        &self.table
    }

    #[inline]
    pub fn terms(&self) -> &[WeightedTerm] {
        &self.terms
    }

    /// Reweight an existing term. Returns `false` if the term is not in the list.
    pub fn set_weight(&mut self, term: Term, weight: PhaseWeight) -> bool {
        match self.terms.iter_mut().find(|t| t.term == term) {
            Some(entry) => {
                entry.weight = weight;
                true
            }
            None => false,
        }
    }

    /// Drop a term from the pipeline.
    pub fn without(mut self, term: Term) -> Self {
        self.terms.retain(|t| t.term != term);
        self
    }

    /// Score a node for `root`. Positive favors `root`.
    ///
    /// # Panics
    ///
    /// If the node's board size differs from the weight table's.
    /// [`Searcher::search`](crate::search::Searcher::search) checks this
    /// up front and returns an error instead.
    pub fn evaluate(&self, node: &SearchNode, root: Color) -> f64 {
        assert_eq!(
            node.board().dims(),
            self.table.dims(),
            "board and weight table sizes differ"
        );
        if let Some(score) = terminal_score(node.board(), root, node.is_stalled()) {
            return score;
        }
        let phase = Phase::of(node.board());
        self.terms
            .iter()
            .map(|t| t.weight.at(phase) * t.term.score(node, root, &self.table))
            .sum()
    }

    /// Weighted contribution of every term, for tuning and diagnostics.
    /// Ignores the terminal sentinel.
    pub fn breakdown(&self, node: &SearchNode, root: Color) -> Vec<(Term, f64)> {
        let phase = Phase::of(node.board());
        self.terms
            .iter()
            .map(|t| (t.term, t.weight.at(phase) * t.term.score(node, root, &self.table)))
            .collect()
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(Dimensions::TOURNAMENT)
    }
}

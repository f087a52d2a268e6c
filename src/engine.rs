//! Othello player integrating rules, evaluation and search
//!
//! Two layers live here:
//!
//! - [`OthelloEngine`], a configured player (name, board size, search depth,
//!   evaluator) with the tournament grid adapter;
//! - three free functions forming the minimal boundary: [`legal_moves`],
//!   [`apply_move`] and [`choose_move`].
//!
//! # Example
//!
//! ```
//! use othello::{Board, Color, EngineConfig, Move, OthelloEngine};
//!
//! let engine = OthelloEngine::new(EngineConfig::default().with_depth(2)).unwrap();
//! let board = Board::tournament();
//!
//! match engine.choose_move(&board, Color::Black).unwrap() {
//!     Move::Place(pos) => println!("{} plays {pos}", engine.name()),
//!     Move::Pass => println!("{} passes", engine.name()),
//! }
//! ```

use std::time::Instant;

use log::info;

use crate::board::{Board, Color, Dimensions, Move};
use crate::error::{EngineError, Result};
use crate::eval::Evaluator;
use crate::rules;
use crate::search::{SearchConfig, SearchResult, Searcher};

/// Tournament player name
pub const DEFAULT_NAME: &str = "Le Golem";

/// Engine configuration.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    pub name: String,
    pub dimensions: Dimensions,
    pub search: SearchConfig,
    pub evaluator: Evaluator,
}

impl EngineConfig {
    /// Default player for a board of `dimensions`.
    pub fn for_dimensions(dimensions: Dimensions) -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            dimensions,
            search: SearchConfig::default(),
            evaluator: Evaluator::new(dimensions),
        }
    }

    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    #[must_use]
    pub fn with_depth(mut self, depth: u8) -> Self {
        self.search.depth = depth;
        self
    }

    #[must_use]
    pub fn with_pruning(mut self, pruning: bool) -> Self {
        self.search.pruning = pruning;
        self
    }

    /// Replace the evaluator. Its weight table must match `dimensions`;
    /// [`OthelloEngine::new`] checks this.
    #[must_use]
    pub fn with_evaluator(mut self, evaluator: Evaluator) -> Self {
        self.evaluator = evaluator;
        self
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::for_dimensions(Dimensions::TOURNAMENT)
    }
}

/// Result of a move decision with timing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MoveResult {
    pub best_move: Move,
    /// Score from the mover's point of view
    pub score: f64,
    pub time_ms: u64,
    pub nodes: u64,
}

impl MoveResult {
    #[inline]
    fn from_search(result: SearchResult, time_ms: u64) -> Self {
        Self {
            best_move: result.best_move,
            score: result.score,
            time_ms,
            nodes: result.stats.nodes,
        }
    }
}

/// Configured Othello player.
///
/// Holds no per-game state; every decision searches from scratch.
#[derive(Debug, Clone)]
pub struct OthelloEngine {
    name: String,
    dimensions: Dimensions,
    searcher: Searcher,
}

impl OthelloEngine {
    /// Build an engine, rejecting an evaluator sized for another board.
    pub fn new(config: EngineConfig) -> Result<Self> {
        let table_dims = config.evaluator.table().dims();
        if table_dims != config.dimensions {
            return Err(EngineError::InvalidWeightTable {
                expected: config.dimensions.cells(),
                found: table_dims.cells(),
            });
        }
        Ok(Self {
            name: config.name,
            dimensions: config.dimensions,
            searcher: Searcher::new(config.evaluator, config.search),
        })
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.searcher.config().depth
    }

    pub fn set_depth(&mut self, depth: u8) {
        self.searcher.set_depth(depth);
    }

    /// Search `board` for `color` and report timing.
    pub fn get_move_with_stats(&self, board: &Board, color: Color) -> Result<MoveResult> {
        let start = Instant::now();
        let result = self.searcher.search(board, color)?;
        if result.best_move.is_pass() {
            info!("{}: {color:?} has no legal move, passing", self.name);
        }
        Ok(MoveResult::from_search(
            result,
            start.elapsed().as_millis() as u64,
        ))
    }

    /// Choose a move for `color`; `Move::Pass` when it has none.
    pub fn choose_move(&self, board: &Board, color: Color) -> Result<Move> {
        Ok(self.get_move_with_stats(board, color)?.best_move)
    }

    /// Tournament entry point.
    ///
    /// `grid` is indexed `grid[column][row]` with -1 empty, 0 white, 1 black.
    /// Returns `(column, row)` of the chosen move, or `None` to pass.
    pub fn next_move_for_grid<R: AsRef<[i32]>>(
        &self,
        grid: &[R],
        white_turn: bool,
    ) -> Result<Option<(usize, usize)>> {
        let board = Board::from_grid(grid)?;
        let color = Color::from_white_turn(white_turn);
        let chosen = self.choose_move(&board, color)?;
        Ok(chosen
            .pos()
            .map(|pos| (usize::from(pos.col), usize::from(pos.row))))
    }
}

impl Default for OthelloEngine {
    fn default() -> Self {
        let config = EngineConfig::default();
        Self {
            name: config.name,
            dimensions: config.dimensions,
            searcher: Searcher::new(config.evaluator, config.search),
        }
    }
}

/// Legal moves of `color`, in raster order. Empty means `color` must pass.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    rules::legal_moves(board, color)
        .into_iter()
        .map(Move::Place)
        .collect()
}

/// Play `color` at `(col, row)` and return the resulting board.
///
/// Coordinates outside the grid and illegal placements are rejected; the
/// input board is never modified.
pub fn apply_move(board: &Board, col: i64, row: i64, color: Color) -> Result<Board> {
    let pos = board.dims().checked_pos(col, row)?;
    rules::apply(board, pos, color)
}

/// Search `depth` plies with the default evaluator and return the move for
/// `color`, or `Move::Pass` if it has none.
pub fn choose_move(board: &Board, color: Color, depth: u8) -> Move {
    Searcher::new(Evaluator::new(board.dims()), SearchConfig::new(depth))
        .search_unchecked(board, color)
        .best_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Pos};
    use crate::eval::WeightTable;

    #[test]
    fn test_engine_default() {
        let engine = OthelloEngine::default();
        assert_eq!(engine.name(), "Le Golem");
        assert_eq!(engine.dimensions(), Dimensions::TOURNAMENT);
        assert_eq!(engine.depth(), 5);
    }

    #[test]
    fn test_engine_config_builders() {
        let config = EngineConfig::default()
            .with_name("Tester")
            .with_depth(2)
            .with_pruning(false);
        assert_eq!(config.search, SearchConfig::minimax(2));

        let mut engine = OthelloEngine::new(config).unwrap();
        assert_eq!(engine.name(), "Tester");
        engine.set_depth(3);
        assert_eq!(engine.depth(), 3);
    }

    #[test]
    fn test_engine_rejects_mismatched_evaluator() {
        let square = Dimensions::new(8, 8).unwrap();
        let config = EngineConfig::default().with_evaluator(Evaluator::new(square));
        assert_eq!(
            OthelloEngine::new(config).err(),
            Some(EngineError::InvalidWeightTable {
                expected: 63,
                found: 64
            })
        );

        let custom = Evaluator::with_terms(WeightTable::generated(square), Vec::new());
        let config = EngineConfig::for_dimensions(square).with_evaluator(custom);
        assert!(OthelloEngine::new(config).is_ok());
    }

    #[test]
    fn test_engine_rejects_other_board_size() {
        let engine = OthelloEngine::new(EngineConfig::default().with_depth(1)).unwrap();
        let board = Board::initial(Dimensions::new(8, 8).unwrap());
        assert!(matches!(
            engine.choose_move(&board, Color::Black),
            Err(EngineError::DimensionMismatch {
                expected_width: 9,
                width: 8,
                ..
            })
        ));
    }

    #[test]
    fn test_engine_opening_move_is_legal() {
        let engine = OthelloEngine::new(EngineConfig::default().with_depth(3)).unwrap();
        let board = Board::tournament();
        let result = engine.get_move_with_stats(&board, Color::Black).unwrap();
        assert!(legal_moves(&board, Color::Black).contains(&result.best_move));
        assert!(result.nodes > 4);
    }

    #[test]
    fn test_next_move_for_grid() {
        let engine = OthelloEngine::new(EngineConfig::default().with_depth(2)).unwrap();
        let grid = Board::tournament().to_grid();

        let (col, row) = engine.next_move_for_grid(&grid, false).unwrap().unwrap();
        let expected = choose_move(&Board::tournament(), Color::Black, 2);
        assert_eq!(expected, Move::Place(Pos::new(col as u8, row as u8)));
        assert_eq!(grid[col][row], -1);

        assert!(engine.next_move_for_grid(&grid, true).unwrap().is_some());
    }

    #[test]
    fn test_next_move_for_grid_pass_and_errors() {
        let engine = OthelloEngine::new(EngineConfig::default().with_depth(2)).unwrap();

        let full = vec![vec![1; 7]; 9];
        assert_eq!(engine.next_move_for_grid(&full, true), Ok(None));

        let mut bad = Board::tournament().to_grid();
        bad[0][0] = 3;
        assert!(matches!(
            engine.next_move_for_grid(&bad, true),
            Err(EngineError::InvalidCell { value: 3, .. })
        ));

        let small = vec![vec![-1; 4]; 4];
        assert!(matches!(
            engine.next_move_for_grid(&small, true),
            Err(EngineError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_apply_move_boundary() {
        let board = Board::tournament();
        let next = apply_move(&board, 5, 4, Color::Black).unwrap();
        assert_eq!(next.get(Pos::new(4, 4)), Cell::Black);
        assert_eq!(next.black_count(), 4);

        assert!(matches!(
            apply_move(&board, -1, 0, Color::Black),
            Err(EngineError::OutOfBounds { col: -1, row: 0, .. })
        ));
        assert!(matches!(
            apply_move(&board, 9, 3, Color::Black),
            Err(EngineError::OutOfBounds { .. })
        ));
        assert!(matches!(
            apply_move(&board, 3, 3, Color::Black),
            Err(EngineError::IllegalMove { col: 3, row: 3, .. })
        ));
        assert!(matches!(
            apply_move(&board, 0, 0, Color::White),
            Err(EngineError::IllegalMove { .. })
        ));
    }

    #[test]
    fn test_legal_moves_wraps_positions() {
        let board = Board::tournament();
        let moves = legal_moves(&board, Color::Black);
        assert_eq!(moves.len(), 4);
        assert!(moves.iter().all(|m| !m.is_pass()));
        assert_eq!(moves[0], Move::Place(Pos::new(2, 3)));
    }
}

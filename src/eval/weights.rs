//! Weight tables and phase-dependent term weights
//!
//! The 9x7 tournament table was tuned by hand: corners dominate, the cells
//! touching a corner are poison, edges are mildly good and the interior is
//! close to neutral. Other board sizes get a table generated from the same
//! cell classes.

use crate::board::{Board, Dimensions, Pos};
use crate::error::{EngineError, Result};

/// Positional weights for the 9x7 board, indexed `[row][col]`.
pub const TOURNAMENT_WEIGHTS: [[f64; 9]; 7] = [
    [16.16, -3.03, 1.33, -2.67, 2.67, -2.67, 1.33, -3.03, 16.16],
    [-4.12, -1.81, -0.9, -0.9, -1.16, -0.9, -0.9, -1.81, -4.12],
    [1.33, -0.9, 0.0, 0.0, 0.0, 0.0, 0.0, -0.9, 1.33],
    [-2.67, 1.2, 0.0, -1.0, 1.0, 0.0, 0.0, 1.2, -2.67],
    [1.33, -0.9, 0.0, 1.0, -1.0, 0.0, 0.0, -0.9, 1.33],
    [-4.12, -1.81, -0.9, -0.9, -1.16, -0.9, -0.9, -1.81, -4.12],
    [16.16, -3.03, 1.33, -2.67, 2.67, -2.67, 1.33, -3.03, 16.16],
];

// Cell classes for generated tables
const CORNER: f64 = 16.0;
const X_SQUARE: f64 = -4.0;
const C_SQUARE: f64 = -3.0;
const EDGE: f64 = 1.0;
const INNER_RING: f64 = -0.9;
const INTERIOR: f64 = 0.0;

/// Game phase used to pick between a term's two weights
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Midgame,
    Endgame,
}

impl Phase {
    /// Endgame once more than half of the cells hold a disc.
    pub fn of(board: &Board) -> Phase {
        if board.disc_count() as usize * 2 > board.dims().cells() {
            Phase::Endgame
        } else {
            Phase::Midgame
        }
    }
}

/// Term weight split by phase
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhaseWeight {
    pub midgame: f64,
    pub endgame: f64,
}

impl PhaseWeight {
    pub const fn new(midgame: f64, endgame: f64) -> Self {
        Self { midgame, endgame }
    }

    /// Same weight in both phases
    pub const fn flat(weight: f64) -> Self {
        Self::new(weight, weight)
    }

    #[inline]
    pub fn at(self, phase: Phase) -> f64 {
        match phase {
            Phase::Midgame => self.midgame,
            Phase::Endgame => self.endgame,
        }
    }
}

/// Per-cell positional weights matching one board size.
#[derive(Debug, Clone, PartialEq)]
pub struct WeightTable {
    dims: Dimensions,
    weights: Vec<f64>,
}

impl WeightTable {
    /// The hand-tuned table on 9x7, a generated one elsewhere.
    pub fn for_dimensions(dims: Dimensions) -> Self {
        if dims == Dimensions::TOURNAMENT {
            let weights = dims
                .positions()
                .map(|pos| TOURNAMENT_WEIGHTS[pos.row as usize][pos.col as usize])
                .collect();
            return Self { dims, weights };
        }
        Self::generated(dims)
    }

    /// Table built from cell classes: corners, the cells next to them, edges,
    /// the ring just inside the edges, and the interior.
    pub fn generated(dims: Dimensions) -> Self {
        let weights = dims.positions().map(|pos| class_weight(dims, pos)).collect();
        Self { dims, weights }
    }

    /// Custom table, rows indexed `[row][col]`.
    pub fn from_rows<R: AsRef<[f64]>>(dims: Dimensions, rows: &[R]) -> Result<Self> {
        let found: usize = rows.iter().map(|r| r.as_ref().len()).sum();
        let well_formed = rows.len() == dims.height()
            && rows.iter().all(|r| r.as_ref().len() == dims.width());
        if !well_formed {
            return Err(EngineError::InvalidWeightTable {
                expected: dims.cells(),
                found,
            });
        }
        let weights = dims
            .positions()
            .map(|pos| rows[pos.row as usize].as_ref()[pos.col as usize])
            .collect();
        Ok(Self { dims, weights })
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    #[inline]
    pub fn weight(&self, pos: Pos) -> f64 {
        self.weights[self.dims.index(pos)]
    }

    /// Sum of weights over the cells of a bitboard index set.
    pub fn sum(&self, cells: impl Iterator<Item = usize>) -> f64 {
        cells.map(|idx| self.weights[idx]).sum()
    }
}

fn class_weight(dims: Dimensions, pos: Pos) -> f64 {
    let last_col = dims.width() - 1;
    let last_row = dims.height() - 1;
    let (col, row) = (pos.col as usize, pos.row as usize);

    // Distance to the nearest vertical / horizontal edge
    let dx = col.min(last_col - col);
    let dy = row.min(last_row - row);

    match (dx, dy) {
        (0, 0) => CORNER,
        (1, 1) => X_SQUARE,
        (0, 1) | (1, 0) => C_SQUARE,
        (0, _) | (_, 0) => EDGE,
        (1, _) | (_, 1) => INNER_RING,
        _ => INTERIOR,
    }
}

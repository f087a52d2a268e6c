//! Individual heuristic terms
//!
//! Every function scores the board from the point of view of `root`, the
//! color the search is playing for. Positive favors `root`. Weights are
//! applied by [`Evaluator`](super::Evaluator), not here.

use crate::board::{Board, Cell, Color, Move, Pos, DIRECTIONS};

use super::weights::WeightTable;

/// The four axes a disc can be flipped along, one direction per axis.
const AXES: [(i32, i32); 4] = [
    (1, 0),  // Horizontal
    (0, 1),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Diagonal NE
];

#[inline]
fn sign(owner: Color, root: Color) -> f64 {
    if owner == root {
        1.0
    } else {
        -1.0
    }
}

/// Table weight of the cell just played, signed by who played it.
pub fn last_move(board: &Board, table: &WeightTable, root: Color, last: Option<Move>) -> f64 {
    let Some(Move::Place(pos)) = last else {
        return 0.0;
    };
    match board.get(pos).color() {
        Some(owner) => sign(owner, root) * table.weight(pos),
        None => 0.0,
    }
}

/// Sum of table weights over root discs minus opponent discs.
pub fn positional(board: &Board, table: &WeightTable, root: Color) -> f64 {
    let mine = table.sum(board.discs(root).iter_ones());
    let theirs = table.sum(board.discs(root.opponent()).iter_ones());
    mine - theirs
}

/// Corners owned by root minus corners owned by the opponent.
pub fn corners(board: &Board, root: Color) -> f64 {
    board
        .dims()
        .corners()
        .iter()
        .filter_map(|&pos| board.get(pos).color())
        .map(|owner| sign(owner, root))
        .sum()
}

/// Legal move count difference.
#[inline]
pub fn mobility(root_moves: usize, opponent_moves: usize) -> f64 {
    root_moves as f64 - opponent_moves as f64
}

/// A disc with at least one empty neighbour.
pub fn is_frontier(board: &Board, pos: Pos) -> bool {
    let dims = board.dims();
    DIRECTIONS.iter().any(|&(d_col, d_row)| {
        dims.step(pos, d_col, d_row)
            .is_some_and(|next| board.get(next) == Cell::Empty)
    })
}

/// Root interior discs minus root frontier discs.
pub fn frontier(board: &Board, root: Color) -> f64 {
    let dims = board.dims();
    board
        .discs(root)
        .iter_ones()
        .map(|idx| if is_frontier(board, dims.pos(idx)) { -1.0 } else { 1.0 })
        .sum()
}

/// Whether every cell from `pos` (exclusive) to the edge along a direction is occupied.
fn ray_full(board: &Board, pos: Pos, d_col: i32, d_row: i32) -> bool {
    let dims = board.dims();
    let mut cur = pos;
    while let Some(next) = dims.step(cur, d_col, d_row) {
        if board.is_empty(next) {
            return false;
        }
        cur = next;
    }
    true
}

/// Conservative stability test.
///
/// Along each axis the disc must either sit on the grid edge (no bracket can
/// form across it) or see a completely filled line in both directions (no
/// placement can happen on that line). Corners always pass.
pub fn is_stable(board: &Board, pos: Pos) -> bool {
    let dims = board.dims();
    AXES.iter().all(|&(d_col, d_row)| {
        let on_edge =
            dims.step(pos, d_col, d_row).is_none() || dims.step(pos, -d_col, -d_row).is_none();
        on_edge || (ray_full(board, pos, d_col, d_row) && ray_full(board, pos, -d_col, -d_row))
    })
}

/// Root stable discs minus opponent stable discs.
pub fn stability(board: &Board, root: Color) -> f64 {
    let dims = board.dims();
    let count = |color: Color| {
        board
            .discs(color)
            .iter_ones()
            .filter(|&idx| is_stable(board, dims.pos(idx)))
            .count() as f64
    };
    count(root) - count(root.opponent())
}

/// Root disc count minus opponent disc count.
#[inline]
pub fn disc_difference(board: &Board, root: Color) -> f64 {
    f64::from(board.count(root)) - f64::from(board.count(root.opponent()))
}

/// +1 when root is expected to make the last move, -1 otherwise, 0 on a
/// full board. Assumes no further passes.
pub fn parity(board: &Board, root: Color, to_move: Color) -> f64 {
    let empties = board.empty_count();
    if empties == 0 {
        return 0.0;
    }
    let last_mover = if empties % 2 == 1 {
        to_move
    } else {
        to_move.opponent()
    };
    sign(last_mover, root)
}

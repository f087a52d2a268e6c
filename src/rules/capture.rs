//! Capture rules: legality test and disc flipping
//!
//! A placement is legal when the target is empty and at least one of the
//! eight rays leaving it crosses one or more opponent discs and then reaches
//! a disc of the mover's color. Those bracketed discs are flipped.

use crate::board::{Bitboard, Board, Color, Pos, DIRECTIONS};
use crate::error::{EngineError, Result};

/// Discs bracketed along a single ray, or an empty set when the ray runs off
/// the grid or into an empty cell before reaching a friendly disc.
fn ray_flips(board: &Board, pos: Pos, color: Color, d_col: i32, d_row: i32) -> Bitboard {
    let dims = board.dims();
    let own = board.discs(color);
    let opponent = board.discs(color.opponent());

    let mut crossed = Bitboard::new();
    let mut cur = pos;
    while let Some(next) = dims.step(cur, d_col, d_row) {
        let idx = dims.index(next);
        if opponent.get(idx) {
            crossed.set(idx);
            cur = next;
        } else if own.get(idx) {
            return crossed;
        } else {
            break;
        }
    }
    Bitboard::new()
}

#[inline]
fn in_bounds(board: &Board, pos: Pos) -> bool {
    board.dims().contains(i32::from(pos.col), i32::from(pos.row))
}

/// All discs that would be flipped if `color` played at `pos`.
///
/// Returns an empty set for occupied or out-of-bounds targets, which is
/// exactly the illegal case.
pub fn flips(board: &Board, pos: Pos, color: Color) -> Bitboard {
    if !in_bounds(board, pos) || !board.is_empty(pos) {
        return Bitboard::new();
    }
    DIRECTIONS
        .iter()
        .fold(Bitboard::new(), |acc, &(d_col, d_row)| {
            acc | ray_flips(board, pos, color, d_col, d_row)
        })
}

/// Check if `color` may play at `pos`.
#[inline]
pub fn is_legal(board: &Board, pos: Pos, color: Color) -> bool {
    if !in_bounds(board, pos) || !board.is_empty(pos) {
        return false;
    }
    DIRECTIONS
        .iter()
        .any(|&(d_col, d_row)| !ray_flips(board, pos, color, d_col, d_row).is_empty())
}

/// Apply a move and return the successor board.
///
/// The input board is left untouched. Out-of-bounds coordinates and illegal
/// placements are rejected; nothing is ever partially applied.
pub fn apply(board: &Board, pos: Pos, color: Color) -> Result<Board> {
    if !in_bounds(board, pos) {
        return Err(EngineError::OutOfBounds {
            col: i64::from(pos.col),
            row: i64::from(pos.row),
            width: board.dims().width(),
            height: board.dims().height(),
        });
    }

    let flipped = flips(board, pos, color);
    if flipped.is_empty() {
        return Err(EngineError::IllegalMove {
            col: pos.col as usize,
            row: pos.row as usize,
            color,
        });
    }

    Ok(place_and_flip(board, pos, color, flipped))
}

/// Apply a move already known to be legal.
///
/// Used by the search, which only ever plays moves taken from
/// [`legal_moves`](super::legal_moves).
#[inline]
pub(crate) fn play(board: &Board, pos: Pos, color: Color) -> Board {
    let flipped = flips(board, pos, color);
    debug_assert!(!flipped.is_empty(), "{color:?} cannot play at {pos}");
    place_and_flip(board, pos, color, flipped)
}

fn place_and_flip(board: &Board, pos: Pos, color: Color, flipped: Bitboard) -> Board {
    let mut next = *board;
    let dims = board.dims();
    let own = next.discs_mut(color);
    *own = *own | flipped;
    own.set(dims.index(pos));
    let opponent = next.discs_mut(color.opponent());
    *opponent = *opponent & !flipped;
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Cell, Dimensions};

    fn empty() -> Board {
        Board::new(Dimensions::TOURNAMENT)
    }

    #[test]
    fn test_opening_moves_are_legal() {
        let board = Board::tournament();
        assert!(is_legal(&board, Pos::new(2, 3), Color::Black));
        assert!(is_legal(&board, Pos::new(3, 2), Color::Black));
        assert!(is_legal(&board, Pos::new(4, 5), Color::Black));
        assert!(is_legal(&board, Pos::new(5, 4), Color::Black));
        assert!(!is_legal(&board, Pos::new(2, 2), Color::Black));
        assert!(!is_legal(&board, Pos::new(5, 3), Color::Black));
    }

    #[test]
    fn test_occupied_cell_is_illegal() {
        let board = Board::tournament();
        assert!(!is_legal(&board, Pos::new(3, 3), Color::Black));
        assert!(!is_legal(&board, Pos::new(3, 4), Color::White));
        assert!(flips(&board, Pos::new(4, 4), Color::Black).is_empty());
    }

    #[test]
    fn test_out_of_bounds_is_illegal() {
        let board = Board::tournament();
        assert!(!is_legal(&board, Pos::new(9, 0), Color::Black));
        assert!(matches!(
            apply(&board, Pos::new(0, 7), Color::Black),
            Err(EngineError::OutOfBounds { col: 0, row: 7, .. })
        ));
    }

    #[test]
    fn test_flip_horizontal() {
        // B W W _  : black plays at col 3
        let mut board = empty();
        board.place(Pos::new(0, 2), Color::Black);
        board.place(Pos::new(1, 2), Color::White);
        board.place(Pos::new(2, 2), Color::White);

        let next = apply(&board, Pos::new(3, 2), Color::Black).unwrap();
        assert_eq!(next.get(Pos::new(1, 2)), Cell::Black);
        assert_eq!(next.get(Pos::new(2, 2)), Cell::Black);
        assert_eq!(next.get(Pos::new(3, 2)), Cell::Black);
        assert_eq!(next.black_count(), 4);
        assert_eq!(next.white_count(), 0);
    }

    #[test]
    fn test_flip_diagonal() {
        let mut board = empty();
        board.place(Pos::new(0, 0), Color::White);
        board.place(Pos::new(1, 1), Color::Black);
        board.place(Pos::new(2, 2), Color::Black);
        board.place(Pos::new(3, 3), Color::Black);

        let next = apply(&board, Pos::new(4, 4), Color::White).unwrap();
        for i in 1..4 {
            assert_eq!(next.get(Pos::new(i, i)), Cell::White);
        }
    }

    #[test]
    fn test_ray_off_grid_flips_nothing() {
        // _ W W | edge: no terminator
        let mut board = empty();
        board.place(Pos::new(7, 0), Color::White);
        board.place(Pos::new(8, 0), Color::White);

        assert!(!is_legal(&board, Pos::new(6, 0), Color::Black));
        assert!(matches!(
            apply(&board, Pos::new(6, 0), Color::Black),
            Err(EngineError::IllegalMove { col: 6, row: 0, color: Color::Black })
        ));
    }

    #[test]
    fn test_broken_ray_flips_nothing() {
        // _ W . B : gap breaks the ray
        let mut board = empty();
        board.place(Pos::new(1, 3), Color::White);
        board.place(Pos::new(3, 3), Color::Black);
        assert!(!is_legal(&board, Pos::new(0, 3), Color::Black));
    }

    #[test]
    fn test_adjacent_own_disc_flips_nothing() {
        let mut board = empty();
        board.place(Pos::new(1, 1), Color::Black);
        board.place(Pos::new(2, 1), Color::White);
        board.place(Pos::new(3, 1), Color::Black);
        // West of (0,1) is off-grid, east is own disc at distance 1 -> nothing
        board.place(Pos::new(0, 2), Color::Black);
        assert!(!is_legal(&board, Pos::new(0, 1), Color::Black));
    }

    #[test]
    fn test_flips_stop_at_first_terminator() {
        // _ W B W B : only the first white disc flips
        let mut board = empty();
        board.place(Pos::new(1, 5), Color::White);
        board.place(Pos::new(2, 5), Color::Black);
        board.place(Pos::new(3, 5), Color::White);
        board.place(Pos::new(4, 5), Color::Black);

        let next = apply(&board, Pos::new(0, 5), Color::Black).unwrap();
        assert_eq!(next.get(Pos::new(1, 5)), Cell::Black);
        assert_eq!(next.get(Pos::new(3, 5)), Cell::White);
    }

    #[test]
    fn test_multiple_directions() {
        let mut board = empty();
        board.place(Pos::new(3, 2), Color::Black);
        board.place(Pos::new(3, 3), Color::White);
        board.place(Pos::new(1, 5), Color::Black);
        board.place(Pos::new(2, 5), Color::White);
        board.place(Pos::new(5, 3), Color::Black);
        board.place(Pos::new(4, 4), Color::White);

        // (3,4): only the north ray is bracketed
        let set = flips(&board, Pos::new(3, 4), Color::Black);
        assert_eq!(set.count(), 1);

        // (3,5): west ray and north-east ray
        let set = flips(&board, Pos::new(3, 5), Color::Black);
        assert_eq!(set.count(), 2);
        let next = apply(&board, Pos::new(3, 5), Color::Black).unwrap();
        assert_eq!(next.get(Pos::new(2, 5)), Cell::Black);
        assert_eq!(next.get(Pos::new(4, 4)), Cell::Black);
        assert_eq!(next.get(Pos::new(3, 3)), Cell::White);
    }

    #[test]
    fn test_apply_leaves_parent_untouched() {
        let board = Board::tournament();
        let snapshot = board;
        let next = apply(&board, Pos::new(2, 3), Color::Black).unwrap();
        assert_eq!(board, snapshot);
        assert_ne!(board, next);
        assert_eq!(next.black_count(), 4);
        assert_eq!(next.white_count(), 1);
    }

    #[test]
    fn test_legal_iff_flips_nonempty() {
        let board = Board::tournament();
        for pos in board.dims().positions() {
            for color in [Color::White, Color::Black] {
                assert_eq!(is_legal(&board, pos, color), !flips(&board, pos, color).is_empty());
            }
        }
    }
}

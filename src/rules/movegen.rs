//! Legal move generation
//!
//! Cells are scanned in column-major raster order (column 0 rows 0..h, then
//! column 1, ...). Search tie-breaking depends on this order, so it must not
//! change.

use crate::board::{Board, Color, Pos};

use super::capture::is_legal;

/// All legal placements for `color`, in raster order.
///
/// An empty result means `color` is forced to pass.
#[must_use]
pub fn legal_moves(board: &Board, color: Color) -> Vec<Pos> {
    let dims = board.dims();
    board
        .empties()
        .iter_ones()
        .map(|idx| dims.pos(idx))
        .filter(|&pos| is_legal(board, pos, color))
        .collect()
}

/// Number of legal placements for `color`.
#[must_use]
pub fn legal_move_count(board: &Board, color: Color) -> usize {
    let dims = board.dims();
    board
        .empties()
        .iter_ones()
        .filter(|&idx| is_legal(board, dims.pos(idx), color))
        .count()
}

/// Whether `color` has at least one legal placement.
#[inline]
#[must_use]
pub fn has_legal_move(board: &Board, color: Color) -> bool {
    let dims = board.dims();
    board
        .empties()
        .iter_ones()
        .any(|idx| is_legal(board, dims.pos(idx), color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Dimensions;

    #[test]
    fn test_opening_black_moves() {
        let board = Board::tournament();
        let moves = legal_moves(&board, Color::Black);
        assert_eq!(
            moves,
            vec![Pos::new(2, 3), Pos::new(3, 2), Pos::new(4, 5), Pos::new(5, 4)]
        );
        assert_eq!(legal_move_count(&board, Color::Black), 4);
    }

    #[test]
    fn test_opening_white_moves() {
        let board = Board::tournament();
        let moves = legal_moves(&board, Color::White);
        assert_eq!(
            moves,
            vec![Pos::new(2, 4), Pos::new(3, 5), Pos::new(4, 2), Pos::new(5, 3)]
        );
    }

    #[test]
    fn test_moves_are_sorted_and_empty() {
        let board = Board::tournament();
        for color in [Color::White, Color::Black] {
            let moves = legal_moves(&board, color);
            assert!(moves.windows(2).all(|w| w[0] < w[1]));
            assert!(moves.iter().all(|&pos| board.is_empty(pos)));
        }
    }

    #[test]
    fn test_idempotent_and_independent() {
        let board = Board::tournament();
        let white_first = legal_moves(&board, Color::White);
        let black = legal_moves(&board, Color::Black);
        let white_second = legal_moves(&board, Color::White);
        assert_eq!(white_first, white_second);
        assert_eq!(black, legal_moves(&board, Color::Black));
    }

    #[test]
    fn test_no_moves_on_empty_board() {
        let board = Board::new(Dimensions::TOURNAMENT);
        assert!(legal_moves(&board, Color::Black).is_empty());
        assert!(!has_legal_move(&board, Color::White));
    }

    #[test]
    fn test_no_moves_on_full_board() {
        let mut board = Board::new(Dimensions::TOURNAMENT);
        for (i, pos) in Dimensions::TOURNAMENT.positions().enumerate() {
            let color = if i % 2 == 0 { Color::White } else { Color::Black };
            board.place(pos, color);
        }
        assert!(legal_moves(&board, Color::Black).is_empty());
        assert_eq!(legal_move_count(&board, Color::White), 0);
    }

    #[test]
    fn test_has_legal_move_agrees_with_count() {
        let mut board = Board::new(Dimensions::TOURNAMENT);
        board.place(Pos::new(0, 0), Color::Black);
        board.place(Pos::new(1, 0), Color::White);
        assert!(has_legal_move(&board, Color::Black));
        assert!(!has_legal_move(&board, Color::White));
        assert_eq!(legal_moves(&board, Color::Black), vec![Pos::new(2, 0)]);
    }
}

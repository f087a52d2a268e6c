//! Board structure with disc counting

use std::fmt;

use super::bitboard::Bitboard;
use super::{Cell, Color, Dimensions, Pos};
use crate::error::{EngineError, Result};

/// Game board.
///
/// `Board` is `Copy`: applying a move yields a new value, so sibling search
/// branches never share storage. White and black discs are kept in disjoint
/// bitboards, which makes `white + black + empty == width * height` hold by
/// construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    dims: Dimensions,
    white: Bitboard,
    black: Bitboard,
}

impl Board {
    /// Empty board of the given dimensions.
    pub fn new(dims: Dimensions) -> Self {
        Self {
            dims,
            white: Bitboard::new(),
            black: Bitboard::new(),
        }
    }

    /// Board with the four-disc opening.
    ///
    /// On 9x7 this is (3,3)=White, (4,4)=White, (3,4)=Black, (4,3)=Black.
    pub fn initial(dims: Dimensions) -> Self {
        let mut board = Self::new(dims);
        let col = (dims.width() / 2 - 1) as u8;
        let row = ((dims.height() - 1) / 2) as u8;
        board.place(Pos::new(col, row), Color::White);
        board.place(Pos::new(col + 1, row + 1), Color::White);
        board.place(Pos::new(col, row + 1), Color::Black);
        board.place(Pos::new(col + 1, row), Color::Black);
        board
    }

    /// Opening position on the 9x7 tournament board.
    pub fn tournament() -> Self {
        Self::initial(Dimensions::TOURNAMENT)
    }

    #[inline]
    pub fn dims(&self) -> Dimensions {
        self.dims
    }

    /// Get cell at position
    ///
    /// # Panics
    ///
    /// If `pos` is outside the board, like every accessor taking a [`Pos`].
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        let idx = self.dims.index(pos);
        if self.white.get(idx) {
            Cell::White
        } else if self.black.get(idx) {
            Cell::Black
        } else {
            Cell::Empty
        }
    }

    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.occupied().get(self.dims.index(pos))
    }

    /// Put a disc on the board without applying any captures.
    /// Use [`apply`](crate::rules::apply) for game moves.
    ///
    /// # Panics
    ///
    /// If `pos` is outside the board.
    #[inline]
    pub fn place(&mut self, pos: Pos, color: Color) {
        let idx = self.dims.index(pos);
        match color {
            Color::White => {
                self.black.clear(idx);
                self.white.set(idx);
            }
            Color::Black => {
                self.white.clear(idx);
                self.black.set(idx);
            }
        }
    }

    /// Remove a disc
    #[inline]
    pub fn remove(&mut self, pos: Pos) {
        let idx = self.dims.index(pos);
        self.white.clear(idx);
        self.black.clear(idx);
    }

    /// Discs of one color
    #[inline]
    pub fn discs(&self, color: Color) -> Bitboard {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    #[inline]
    pub(crate) fn discs_mut(&mut self, color: Color) -> &mut Bitboard {
        match color {
            Color::White => &mut self.white,
            Color::Black => &mut self.black,
        }
    }

    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.white | self.black
    }

    /// Empty cells
    #[inline]
    pub fn empties(&self) -> Bitboard {
        !self.occupied() & Bitboard::full(self.dims.cells())
    }

    #[inline]
    pub fn count(&self, color: Color) -> u32 {
        self.discs(color).count()
    }

    #[inline]
    pub fn white_count(&self) -> u32 {
        self.white.count()
    }

    #[inline]
    pub fn black_count(&self) -> u32 {
        self.black.count()
    }

    /// Total discs on board
    #[inline]
    pub fn disc_count(&self) -> u32 {
        self.occupied().count()
    }

    #[inline]
    pub fn empty_count(&self) -> u32 {
        self.dims.cells() as u32 - self.disc_count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.empty_count() == 0
    }

    /// Build a board from the boundary grid, indexed `grid[column][row]`
    /// with -1 = empty, 0 = white, 1 = black.
    pub fn from_grid<R: AsRef<[i32]>>(grid: &[R]) -> Result<Self> {
        let width = grid.len();
        let height = grid.first().map_or(0, |column| column.as_ref().len());
        if grid.iter().any(|column| column.as_ref().len() != height) {
            return Err(EngineError::InvalidGrid {
                reason: format!("columns must all have {height} rows"),
            });
        }
        let dims = Dimensions::new(width, height)?;

        let mut board = Self::new(dims);
        for (col, column) in grid.iter().enumerate() {
            for (row, &value) in column.as_ref().iter().enumerate() {
                let cell = Cell::from_grid_value(value)
                    .ok_or(EngineError::InvalidCell { value, col, row })?;
                if let Some(color) = cell.color() {
                    board.place(Pos::new(col as u8, row as u8), color);
                }
            }
        }
        Ok(board)
    }

    /// Export to the boundary grid, indexed `grid[column][row]`.
    pub fn to_grid(&self) -> Vec<Vec<i32>> {
        (0..self.dims.width())
            .map(|col| {
                (0..self.dims.height())
                    .map(|row| self.get(Pos::new(col as u8, row as u8)).to_grid_value())
                    .collect()
            })
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::tournament()
    }
}

/// One line per row: `W` white, `B` black, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.dims.height() {
            for col in 0..self.dims.width() {
                let ch = match self.get(Pos::new(col as u8, row as u8)) {
                    Cell::White => 'W',
                    Cell::Black => 'B',
                    Cell::Empty => '.',
                };
                write!(f, "{ch}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

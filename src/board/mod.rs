//! Board representation for Othello on rectangular grids

pub mod bitboard;
pub mod board;


use std::fmt;

use crate::error::{EngineError, Result};

// Re-exports
pub use bitboard::Bitboard;
pub use board::Board;

/// Ray directions as `(d_col, d_row)`, enumerated in a fixed order.
pub const DIRECTIONS: [(i32, i32); 8] = [
    (0, -1),  // North
    (0, 1),   // South
    (-1, 0),  // West
    (1, 0),   // East
    (-1, -1), // North-west
    (1, 1),   // South-east
    (1, -1),  // North-east
    (-1, 1),  // South-west
];

/// Side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Get opponent color
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Map the tournament "white turn" flag to a color.
    #[inline]
    pub fn from_white_turn(white_turn: bool) -> Color {
        if white_turn {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    pub fn is_white(self) -> bool {
        self == Color::White
    }
}

/// Cell states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    White,
    Black,
}

impl Cell {
    /// Owner of the cell, `None` when empty.
    #[inline]
    pub fn color(self) -> Option<Color> {
        match self {
            Cell::Empty => None,
            Cell::White => Some(Color::White),
            Cell::Black => Some(Color::Black),
        }
    }

    /// Boundary encoding: -1 empty, 0 white, 1 black.
    #[inline]
    pub fn to_grid_value(self) -> i32 {
        match self {
            Cell::Empty => -1,
            Cell::White => 0,
            Cell::Black => 1,
        }
    }

    #[inline]
    pub fn from_grid_value(value: i32) -> Option<Cell> {
        match value {
            -1 => Some(Cell::Empty),
            0 => Some(Cell::White),
            1 => Some(Cell::Black),
            _ => None,
        }
    }
}

impl From<Color> for Cell {
    fn from(color: Color) -> Self {
        match color {
            Color::White => Cell::White,
            Color::Black => Cell::Black,
        }
    }
}

/// Position on the board. `col` indexes the width axis, `row` the height axis.
///
/// Ordering is column-major, which is also the raster order used for move
/// generation and tie-breaking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pos {
    pub col: u8,
    pub row: u8,
}

impl Pos {
    #[inline]
    pub fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}

/// A placement or a forced pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    Place(Pos),
    Pass,
}

impl Move {
    #[inline]
    pub fn pos(self) -> Option<Pos> {
        match self {
            Move::Place(pos) => Some(pos),
            Move::Pass => None,
        }
    }

    #[inline]
    pub fn is_pass(self) -> bool {
        self == Move::Pass
    }
}

impl From<Pos> for Move {
    fn from(pos: Pos) -> Self {
        Move::Place(pos)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Move::Place(pos) => write!(f, "{pos}"),
            Move::Pass => f.write_str("pass"),
        }
    }
}

/// Grid dimensions, validated once at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    width: u8,
    height: u8,
}

impl Dimensions {
    /// The 9 columns x 7 rows tournament board.
    pub const TOURNAMENT: Dimensions = Dimensions {
        width: 9,
        height: 7,
    };

    /// Largest number of cells a [`Bitboard`] can hold.
    pub const MAX_CELLS: usize = Bitboard::CAPACITY;

    /// Create dimensions, rejecting grids smaller than 2x2 or larger than
    /// [`Self::MAX_CELLS`] cells.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        let too_large = width
            .checked_mul(height)
            .map_or(true, |cells| cells > Self::MAX_CELLS);
        if width < 2 || height < 2 || too_large {
            return Err(EngineError::InvalidDimensions { width, height });
        }
        // Both sides are <= 64 here, so the casts are lossless.
        Ok(Self {
            width: width as u8,
            height: height as u8,
        })
    }

    #[inline]
    pub fn width(self) -> usize {
        self.width as usize
    }

    #[inline]
    pub fn height(self) -> usize {
        self.height as usize
    }

    #[inline]
    pub fn cells(self) -> usize {
        self.width() * self.height()
    }

    /// Whether signed coordinates fall inside the grid
    #[inline]
    pub fn contains(self, col: i32, row: i32) -> bool {
        col >= 0 && col < self.width as i32 && row >= 0 && row < self.height as i32
    }

    /// Validate caller-supplied coordinates.
    pub fn checked_pos(self, col: i64, row: i64) -> Result<Pos> {
        if col < 0 || row < 0 || col >= self.width as i64 || row >= self.height as i64 {
            return Err(EngineError::OutOfBounds {
                col,
                row,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(Pos::new(col as u8, row as u8))
    }

    /// Column-major bit index
    ///
    /// # Panics
    ///
    /// If `pos` lies outside the grid. Use [`checked_pos`](Self::checked_pos)
    /// to validate caller-supplied coordinates first.
    #[inline]
    pub fn index(self, pos: Pos) -> usize {
        assert!(
            pos.col < self.width && pos.row < self.height,
            "{pos} is outside the {}x{} board",
            self.width,
            self.height
        );
        pos.col as usize * self.height() + pos.row as usize
    }

    #[inline]
    pub fn pos(self, idx: usize) -> Pos {
        Pos {
            col: (idx / self.height()) as u8,
            row: (idx % self.height()) as u8,
        }
    }

    /// Step from `pos` by `(d_col, d_row)`; `None` when the step leaves the grid.
    #[inline]
    pub fn step(self, pos: Pos, d_col: i32, d_row: i32) -> Option<Pos> {
        let col = i32::from(pos.col) + d_col;
        let row = i32::from(pos.row) + d_row;
        if self.contains(col, row) {
            Some(Pos::new(col as u8, row as u8))
        } else {
            None
        }
    }

    /// The four corner cells.
    pub fn corners(self) -> [Pos; 4] {
        let (w, h) = (self.width - 1, self.height - 1);
        [
            Pos::new(0, 0),
            Pos::new(w, 0),
            Pos::new(0, h),
            Pos::new(w, h),
        ]
    }

    /// Every position in raster (column-major) order.
    pub fn positions(self) -> impl Iterator<Item = Pos> {
        (0..self.cells()).map(move |idx| self.pos(idx))
    }
}

impl Default for Dimensions {
    fn default() -> Self {
        Self::TOURNAMENT
    }
}

//! Cell identities.
//!
//! A [`Cell`] is an index into the 81 grid cells in row-major order: cell `i`
//! lies in row `i / 9` and column `i % 9`.
//!
//! # Examples
//!
//! ```
//! use peertab_core::Cell;
//!
//! let cell = Cell::new(40);
//! assert_eq!((cell.row(), cell.col()), (4, 4));
//! assert_eq!((cell.box_row(), cell.box_col()), (3, 3));
//! assert_eq!(cell.box_index(), 4);
//! ```

use std::iter::FusedIterator;

use crate::geometry::{BOX_SIZE, CELL_COUNT, SIDE};

#[expect(clippy::cast_possible_truncation)]
const BOX_SIZE_U8: u8 = BOX_SIZE as u8;
#[expect(clippy::cast_possible_truncation)]
const CELL_COUNT_U8: u8 = CELL_COUNT as u8;

/// A grid cell in the range 0-80.
///
/// The range is checked at construction time, so every accessor can assume a
/// valid index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, derive_more::Display)]
#[display("{index}")]
pub struct Cell {
    index: u8,
}

impl Cell {
    /// Creates a new cell.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in the range 0-80.
    #[must_use]
    #[inline]
    pub const fn new(index: u8) -> Self {
        assert!((index as usize) < CELL_COUNT, "cell index out of range");
        Self { index }
    }

    /// Creates a cell from its row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not in the range 0-8.
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn from_row_col(row: u8, col: u8) -> Self {
        assert!((row as usize) < SIDE && (col as usize) < SIDE);
        Self::new(row * SIDE as u8 + col)
    }

    /// Returns the underlying index (0-80).
    #[must_use]
    #[inline]
    pub const fn index(self) -> u8 {
        self.index
    }

    /// Returns the underlying index as `usize`, for slice indexing.
    #[must_use]
    #[inline]
    pub const fn as_usize(self) -> usize {
        self.index as usize
    }

    /// Returns the row (0-8).
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn row(self) -> u8 {
        (self.as_usize() / SIDE) as u8
    }

    /// Returns the column (0-8).
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn col(self) -> u8 {
        (self.as_usize() % SIDE) as u8
    }

    /// Returns the row of the top-left cell of this cell's box.
    #[must_use]
    #[inline]
    pub const fn box_row(self) -> u8 {
        (self.row() / BOX_SIZE_U8) * BOX_SIZE_U8
    }

    /// Returns the column of the top-left cell of this cell's box.
    #[must_use]
    #[inline]
    pub const fn box_col(self) -> u8 {
        (self.col() / BOX_SIZE_U8) * BOX_SIZE_U8
    }

    /// Returns the index of this cell's box (0-8, left to right, top to bottom).
    #[must_use]
    #[inline]
    pub const fn box_index(self) -> u8 {
        self.box_row() + self.box_col() / BOX_SIZE_U8
    }

    /// Returns an iterator over all 81 cells in ascending order.
    ///
    /// # Examples
    ///
    /// ```
    /// # use peertab_core::Cell;
    /// let cells: Vec<_> = Cell::all().collect();
    /// assert_eq!(cells.len(), 81);
    /// assert_eq!(cells[80], Cell::new(80));
    /// ```
    #[must_use]
    pub fn all() -> AllCells {
        AllCells {
            front: 0,
            back: CELL_COUNT_U8,
        }
    }
}

/// Iterator over all cells, returned by [`Cell::all`].
#[derive(Debug, Clone)]
pub struct AllCells {
    front: u8,
    back: u8,
}

impl Iterator for AllCells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let cell = Cell::new(self.front);
        self.front += 1;
        Some(cell)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.back.saturating_sub(self.front));
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for AllCells {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(Cell::new(self.back))
    }
}

impl FusedIterator for AllCells {}
impl ExactSizeIterator for AllCells {}

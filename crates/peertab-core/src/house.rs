//! Rows, columns, and boxes.

use std::iter::FusedIterator;

use crate::{
    Cell,
    geometry::{BOX_OFFSETS, BOX_SIZE, SIDE},
};

#[expect(clippy::cast_possible_truncation)]
const SIDE_U8: u8 = SIDE as u8;

/// A Sudoku house (row, column, or 3×3 box).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum House {
    /// A row identified by its y coordinate (0-8).
    Row {
        /// Row index (0-8).
        y: u8,
    },
    /// A column identified by its x coordinate (0-8).
    Column {
        /// Column index (0-8).
        x: u8,
    },
    /// A 3×3 box identified by its index (0-8, left to right, top to bottom).
    Box {
        /// Box index (0-8).
        index: u8,
    },
}

impl House {
    /// Returns the row containing `cell`.
    #[must_use]
    #[inline]
    pub const fn row_of(cell: Cell) -> Self {
        Self::Row { y: cell.row() }
    }

    /// Returns the column containing `cell`.
    #[must_use]
    #[inline]
    pub const fn column_of(cell: Cell) -> Self {
        Self::Column { x: cell.col() }
    }

    /// Returns the box containing `cell`.
    #[must_use]
    #[inline]
    pub const fn box_of(cell: Cell) -> Self {
        Self::Box {
            index: cell.box_index(),
        }
    }

    /// Converts a cell index within the house (0-8) into an absolute [`Cell`].
    ///
    /// Rows are scanned left to right, columns top to bottom, and boxes in
    /// row-major order starting from their top-left cell.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in the range 0-8.
    #[must_use]
    #[inline]
    #[expect(clippy::cast_possible_truncation)]
    pub fn cell_at(self, i: u8) -> Cell {
        assert!(usize::from(i) < SIDE);
        let index = match self {
            House::Row { y } => usize::from(y) * SIDE + usize::from(i),
            House::Column { x } => usize::from(i) * SIDE + usize::from(x),
            House::Box { index } => {
                let index = usize::from(index);
                let box_row = (index / BOX_SIZE) * BOX_SIZE;
                let box_col = (index % BOX_SIZE) * BOX_SIZE;
                box_row * SIDE + box_col + BOX_OFFSETS[usize::from(i)]
            }
        };
        Cell::new(index as u8)
    }

    /// Returns `true` if `cell` belongs to this house.
    #[must_use]
    #[inline]
    pub fn contains(self, cell: Cell) -> bool {
        match self {
            House::Row { y } => cell.row() == y,
            House::Column { x } => cell.col() == x,
            House::Box { index } => cell.box_index() == index,
        }
    }

    /// Returns an iterator over the cells of this house in scan order.
    ///
    /// # Examples
    ///
    /// ```
    /// use peertab_core::{Cell, House};
    ///
    /// let cells: Vec<_> = House::Box { index: 4 }.cells().map(Cell::index).collect();
    /// assert_eq!(cells, [30, 31, 32, 39, 40, 41, 48, 49, 50]);
    /// ```
    #[must_use]
    #[inline]
    pub fn cells(self) -> HouseCells {
        HouseCells {
            house: self,
            front: 0,
            back: SIDE_U8,
        }
    }
}

/// Iterator over the cells of a [`House`].
#[derive(Debug, Clone)]
pub struct HouseCells {
    house: House,
    front: u8,
    back: u8,
}

impl Iterator for HouseCells {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        let cell = self.house.cell_at(self.front);
        self.front += 1;
        Some(cell)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = usize::from(self.back.saturating_sub(self.front));
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for HouseCells {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        Some(self.house.cell_at(self.back))
    }
}

impl FusedIterator for HouseCells {}
impl ExactSizeIterator for HouseCells {}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(house: House) -> Vec<u8> {
        house.cells().map(Cell::index).collect()
    }

    #[test]
    fn test_row_cells() {
        assert_eq!(indices(House::Row { y: 4 }), (36..45).collect::<Vec<_>>());
    }

    #[test]
    fn test_column_cells() {
        assert_eq!(
            indices(House::Column { x: 4 }),
            [4, 13, 22, 31, 40, 49, 58, 67, 76]
        );
    }

    #[test]
    fn test_box_cells() {
        assert_eq!(
            indices(House::Box { index: 0 }),
            [0, 1, 2, 9, 10, 11, 18, 19, 20]
        );
        assert_eq!(
            indices(House::Box { index: 8 }),
            [60, 61, 62, 69, 70, 71, 78, 79, 80]
        );
    }

    #[test]
    fn test_houses_of_cell_contain_it() {
        for cell in Cell::all() {
            for house in [House::row_of(cell), House::column_of(cell), House::box_of(cell)] {
                assert!(house.contains(cell));
                assert_eq!(house.cells().filter(|&c| c == cell).count(), 1);
            }
        }
    }

    #[test]
    fn test_every_cell_in_three_houses() {
        let houses = (0..SIDE_U8)
            .flat_map(|i| [House::Row { y: i }, House::Column { x: i }, House::Box { index: i }])
            .collect::<Vec<_>>();
        for cell in Cell::all() {
            let count = houses.iter().filter(|h| h.contains(cell)).count();
            assert_eq!(count, 3);
        }
    }

    #[test]
    fn test_cells_iterator_both_ends() {
        let mut iter = House::Column { x: 2 }.cells();
        assert_eq!(iter.next(), Some(Cell::new(2)));
        assert_eq!(iter.next_back(), Some(Cell::new(74)));
        assert_eq!(iter.len(), 7);
    }
}

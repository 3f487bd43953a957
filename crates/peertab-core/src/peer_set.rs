//! A set of grid cells backed by a 128-bit word.
//!
//! Bit `n` is set when cell `n` is a member. Only bits 0-80 are ever used.

use std::iter::FusedIterator;

use crate::Cell;

/// A set of cells.
///
/// # Examples
///
/// ```
/// use peertab_core::{Cell, PeerSet};
///
/// let mut set = PeerSet::new();
/// assert!(set.insert(Cell::new(3)));
/// assert!(!set.insert(Cell::new(3)));
/// assert!(set.contains(Cell::new(3)));
/// assert_eq!(set.len(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PeerSet {
    bits: u128,
}

impl PeerSet {
    /// Creates an empty set.
    #[must_use]
    #[inline]
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Returns the raw bit representation.
    #[must_use]
    #[inline]
    pub const fn bits(self) -> u128 {
        self.bits
    }

    /// Adds `cell` to the set.
    ///
    /// Returns `true` if the cell was not already present.
    #[inline]
    pub fn insert(&mut self, cell: Cell) -> bool {
        let bit = 1u128 << cell.index();
        let inserted = self.bits & bit == 0;
        self.bits |= bit;
        inserted
    }

    /// Returns `true` if `cell` is in the set.
    #[must_use]
    #[inline]
    pub const fn contains(self, cell: Cell) -> bool {
        self.bits & (1u128 << cell.index()) != 0
    }

    /// Returns the number of cells in the set.
    #[must_use]
    #[inline]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    #[inline]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns an iterator over the cells in ascending order.
    #[must_use]
    #[inline]
    pub fn iter(self) -> PeerSetIter {
        PeerSetIter { bits: self.bits }
    }
}

impl FromIterator<Cell> for PeerSet {
    fn from_iter<T: IntoIterator<Item = Cell>>(iter: T) -> Self {
        let mut set = Self::new();
        for cell in iter {
            set.insert(cell);
        }
        set
    }
}

impl IntoIterator for PeerSet {
    type Item = Cell;
    type IntoIter = PeerSetIter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the cells of a [`PeerSet`], in ascending order.
#[derive(Debug, Clone)]
pub struct PeerSetIter {
    bits: u128,
}

impl Iterator for PeerSetIter {
    type Item = Cell;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let index = self.bits.trailing_zeros() as u8;
        self.bits &= self.bits - 1;
        Some(Cell::new(index))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for PeerSetIter {}
impl ExactSizeIterator for PeerSetIter {}

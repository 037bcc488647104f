use std::iter::FusedIterator;

use serde::{Deserialize, Serialize};

use crate::bitset::bitset_traits;
use crate::{CellId, NUM_CELLS};

/// A compact set of board cells.
///
/// Allows intersection/union/xor/difference with other such sets via bitwise
/// ops, and iterates in ascending cell order.
///
/// ```
/// use sequence::CellSet;
/// let mut set = CellSet::new();
/// // This is an immutable data type, so functions like `insert` return a new `CellSet`.
/// set = set.insert(42);
/// set = set.insert(42); // Inserting a second time has no effect
/// set = set.insert(7);
/// assert_eq!(Vec::from_iter(set), vec![7, 42]);
/// ```
///
/// Like the other sets in this crate it is [`Copy`], so "mutating" methods
/// return a new value (except for the `std::ops::BitXxxAssign` trait methods).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<CellId>", into = "Vec<CellId>")]
pub struct CellSet {
    // Only the low 100 bits are used.
    pub(crate) bits: u128,
}

const VALID_BITS: u128 = (1u128 << NUM_CELLS) - 1;

impl CellSet {
    /// Creates a new, empty set.
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// All 100 cells.
    pub const fn full() -> Self {
        Self { bits: VALID_BITS }
    }

    pub fn len(self) -> u32 {
        self.bits.count_ones()
    }

    pub fn is_empty(self) -> bool {
        self.bits == 0
    }

    pub fn contains(self, cell: CellId) -> bool {
        cell < NUM_CELLS && (self.bits & (1u128 << cell)) != 0
    }

    /// Cells outside the board are ignored.
    #[must_use] // Because users might expect this to be a mutating method
    pub fn insert(self, cell: CellId) -> Self {
        if cell >= NUM_CELLS {
            return self;
        }
        Self {
            bits: self.bits | (1u128 << cell),
        }
    }

    #[must_use] // Because users might expect this to be a mutating method
    pub fn remove(self, cell: CellId) -> Self {
        if cell >= NUM_CELLS {
            return self;
        }
        Self {
            bits: self.bits & !(1u128 << cell),
        }
    }

    /// The lowest cell in the set.
    pub fn first(self) -> Option<CellId> {
        self.into_iter().next()
    }

    pub fn iter(self) -> CellSetIter {
        self.into_iter()
    }
}

bitset_traits!(CellSet, VALID_BITS);

impl FromIterator<CellId> for CellSet {
    fn from_iter<T: IntoIterator<Item = CellId>>(iter: T) -> Self {
        iter.into_iter().fold(Self::new(), |set, cell| set.insert(cell))
    }
}

impl IntoIterator for CellSet {
    type Item = CellId;

    type IntoIter = CellSetIter;

    fn into_iter(self) -> Self::IntoIter {
        CellSetIter { bits: self.bits }
    }
}

impl From<Vec<CellId>> for CellSet {
    fn from(cells: Vec<CellId>) -> Self {
        Self::from_iter(cells)
    }
}

impl From<CellSet> for Vec<CellId> {
    fn from(set: CellSet) -> Self {
        set.into_iter().collect()
    }
}

/// Iterator for a [`CellSet`] that returns cells in ascending order.
#[derive(Clone, Copy, Debug)]
pub struct CellSetIter {
    bits: u128,
}

impl Iterator for CellSetIter {
    type Item = CellId;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            None
        } else {
            // The number of trailing zeros is the cell id, always < 100
            let cell = self.bits.trailing_zeros() as CellId;
            self.bits ^= 1u128 << cell;
            Some(cell)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.bits.count_ones() as usize;
        (size, Some(size))
    }
}

impl ExactSizeIterator for CellSetIter {
    fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }
}

impl FusedIterator for CellSetIter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn complement_stays_on_board() {
        let set = CellSet::from_iter([0, 99]);
        let complement = !set;
        assert_eq!(complement.len(), 98);
        assert!(!complement.contains(0));
        assert!(!complement.contains(99));
        assert_eq!(!CellSet::new(), CellSet::full());
    }

    #[test]
    fn out_of_range_cells_are_ignored() {
        let set = CellSet::new().insert(100).insert(200);
        assert!(set.is_empty());
        assert!(!CellSet::full().contains(100));
    }

    #[test]
    fn serializes_as_sorted_list() {
        let set = CellSet::from_iter([42, 3, 17]);
        assert_eq!(serde_json::to_string(&set).unwrap(), "[3,17,42]");
        let back: CellSet = serde_json::from_str("[42,3,17]").unwrap();
        assert_eq!(back, set);
    }

    quickcheck::quickcheck! {
        fn difference_is_disjoint(a: Vec<u8>, b: Vec<u8>) -> bool {
            let a = CellSet::from_iter(a);
            let b = CellSet::from_iter(b);
            ((a - b) & b).is_empty() && (a - b) | (a & b) == a
        }

        fn iteration_is_ascending(cells: Vec<u8>) -> bool {
            let set = CellSet::from_iter(cells.iter().copied());
            let v: Vec<CellId> = set.into_iter().collect();
            v.windows(2).all(|w| w[0] < w[1]) && v.len() == set.len() as usize
        }
    }
}

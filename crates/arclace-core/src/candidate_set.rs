//! The set of candidate digits (1-9) for a single cell.
//!
//! [`CandidateSet`] is a 9-bit set stored in a `u16`, where bits 0-8
//! represent the digits 1-9. Candidate sets only ever shrink during a solve,
//! and their cardinality is the cell's state: more than one candidate means
//! the cell is undetermined, exactly one means it is determined, and an empty
//! set is a contradiction.
//!
//! # Examples
//!
//! ```
//! use arclace_core::CandidateSet;
//!
//! let mut candidates = CandidateSet::FULL;
//! candidates.remove(5);
//! candidates.remove(7);
//!
//! assert_eq!(candidates.len(), 7);
//! assert!(!candidates.contains(5));
//! assert!(candidates.contains(1));
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitOr},
};

/// A set of candidate digits in the range 1-9.
///
/// Stored as a bitmask in a `u16`; all operations are O(1). Iteration yields
/// the digits in ascending order, which the search relies on for
/// deterministic candidate ordering.
///
/// # Examples
///
/// ```
/// use arclace_core::CandidateSet;
///
/// let a = CandidateSet::from_iter([1, 2, 3]);
/// let b = CandidateSet::from_iter([2, 3, 4]);
///
/// assert_eq!(a | b, CandidateSet::from_iter([1, 2, 3, 4]));
/// assert_eq!(a & b, CandidateSet::from_iter([2, 3]));
/// assert_eq!(a.difference(b), CandidateSet::from_iter([1]));
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CandidateSet {
    bits: u16,
}

impl CandidateSet {
    /// The empty set. For a cell, this is a contradiction.
    pub const EMPTY: Self = Self { bits: 0 };

    /// The full set of all nine digits, the state of every unknown cell.
    pub const FULL: Self = Self { bits: 0b1_1111_1111 };

    fn bit(value: u8) -> u16 {
        assert!(
            (1..=9).contains(&value),
            "digit must be between 1 and 9, got {value}"
        );
        1 << (value - 1)
    }

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates a set containing exactly one digit.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn singleton(value: u8) -> Self {
        Self {
            bits: Self::bit(value),
        }
    }

    /// Adds a digit to the set.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn insert(&mut self, value: u8) {
        self.bits |= Self::bit(value);
    }

    /// Removes a digit from the set, returning whether it was present.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    pub fn remove(&mut self, value: u8) -> bool {
        let bit = Self::bit(value);
        let present = (self.bits & bit) != 0;
        self.bits &= !bit;
        present
    }

    /// Returns `true` if the set contains the digit.
    ///
    /// # Panics
    ///
    /// Panics if `value` is not in the range 1-9.
    #[must_use]
    pub fn contains(self, value: u8) -> bool {
        (self.bits & Self::bit(value)) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Returns `true` if the set contains no digits.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Returns `true` if the set contains exactly one digit.
    #[must_use]
    pub const fn is_singleton(self) -> bool {
        self.bits.count_ones() == 1
    }

    /// Returns the sole digit if the set is a singleton, `None` otherwise.
    #[must_use]
    pub const fn sole(self) -> Option<u8> {
        if self.is_singleton() {
            #[expect(clippy::cast_possible_truncation)]
            let value = self.bits.trailing_zeros() as u8 + 1;
            Some(value)
        } else {
            None
        }
    }

    /// Returns `true` if every digit in `self` is also in `other`.
    #[must_use]
    pub const fn is_subset(self, other: Self) -> bool {
        (self.bits & !other.bits) == 0
    }

    /// Returns the set of digits in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self {
            bits: self.bits | other.bits,
        }
    }

    /// Returns the set of digits in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self {
            bits: self.bits & other.bits,
        }
    }

    /// Returns the set of digits in `self` but not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self {
            bits: self.bits & !other.bits,
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub const fn iter(self) -> Iter {
        Iter { bits: self.bits }
    }
}

impl BitOr for CandidateSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitAnd for CandidateSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl FromIterator<u8> for CandidateSet {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = u8>,
    {
        let mut set = Self::new();
        for value in iter {
            set.insert(value);
        }
        set
    }
}

impl IntoIterator for CandidateSet {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for CandidateSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("CandidateSet")?;
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Iterator over the digits of a [`CandidateSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros();
        self.bits &= self.bits - 1;
        #[expect(clippy::cast_possible_truncation)]
        let value = index as u8 + 1;
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Iter {}
impl FusedIterator for Iter {}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_digit_range() {
        let mut set = CandidateSet::new();
        set.insert(1);
        set.insert(9);
        assert!(set.contains(1));
        assert!(set.contains(9));
        assert_eq!(set.len(), 2);
    }

    #[test]
    #[should_panic(expected = "digit must be")]
    fn test_rejects_zero() {
        let mut set = CandidateSet::new();
        set.insert(0);
    }

    #[test]
    #[should_panic(expected = "digit must be")]
    fn test_rejects_ten() {
        let mut set = CandidateSet::new();
        set.insert(10);
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut set = CandidateSet::from_iter([3, 5]);
        assert!(set.remove(3));
        assert!(!set.remove(3));
        assert_eq!(set, CandidateSet::singleton(5));
    }

    #[test]
    fn test_sole() {
        assert_eq!(CandidateSet::EMPTY.sole(), None);
        assert_eq!(CandidateSet::FULL.sole(), None);
        assert_eq!(CandidateSet::singleton(7).sole(), Some(7));
        assert_eq!(CandidateSet::from_iter([2, 4]).sole(), None);
    }

    #[test]
    fn test_iteration_order() {
        let set = CandidateSet::from_iter([9, 1, 5, 3]);
        let collected: Vec<_> = set.iter().collect();
        assert_eq!(collected, vec![1, 3, 5, 9]);
    }

    #[test]
    fn test_operations() {
        let a = CandidateSet::from_iter([1, 2, 3]);
        let b = CandidateSet::from_iter([2, 3, 4]);

        assert_eq!(a.union(b).len(), 4);
        assert_eq!(a.intersection(b).len(), 2);
        assert_eq!(a.difference(b).len(), 1);
        assert!(a.intersection(b).is_subset(a));
    }

    #[test]
    fn test_constants() {
        assert_eq!(CandidateSet::EMPTY.len(), 0);
        assert!(CandidateSet::EMPTY.is_empty());
        assert_eq!(CandidateSet::FULL.len(), 9);

        for value in 1..=9 {
            assert!(CandidateSet::FULL.contains(value));
        }
    }

    fn arb_set() -> impl Strategy<Value = CandidateSet> {
        prop::collection::vec(1u8..=9, 0..=9).prop_map(CandidateSet::from_iter)
    }

    proptest! {
        #[test]
        fn prop_insert_then_contains(values in prop::collection::vec(1u8..=9, 0..=9)) {
            let set = CandidateSet::from_iter(values.iter().copied());
            for value in &values {
                prop_assert!(set.contains(*value));
            }
            prop_assert!(set.len() <= 9);
        }

        #[test]
        fn prop_union_membership(a in arb_set(), b in arb_set()) {
            let union = a.union(b);
            for value in 1..=9 {
                prop_assert_eq!(union.contains(value), a.contains(value) || b.contains(value));
            }
        }

        #[test]
        fn prop_difference_removes_exactly(a in arb_set(), b in arb_set()) {
            let diff = a.difference(b);
            for value in 1..=9 {
                prop_assert_eq!(diff.contains(value), a.contains(value) && !b.contains(value));
            }
            prop_assert!(diff.is_subset(a));
        }

        #[test]
        fn prop_iter_is_sorted_and_exact(set in arb_set()) {
            let collected: Vec<_> = set.iter().collect();
            prop_assert_eq!(collected.len(), set.len());
            prop_assert!(collected.windows(2).all(|w| w[0] < w[1]));
        }
    }
}

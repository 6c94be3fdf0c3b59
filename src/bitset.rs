//! Fixed-capacity wire sets.
//!
//! The pruning enumerator keeps, for every placed gate, the set of gate wires
//! it transitively reads. These sets are unioned and counted once per
//! candidate, so they are a single machine word: union is one `|`, size is
//! one popcount.

use crate::types::Wire;

/// A set of wires backed by a single `u64`.
///
/// Each bit corresponds to a wire index, so at most [`WireSet::CAPACITY`]
/// wires can be tracked. This bounds the largest circuit the search engines
/// accept (see [`MAX_WIRES`](crate::MAX_WIRES)).
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq, Hash)]
pub struct WireSet(u64);

impl WireSet {
    /// Number of wires a set can hold.
    pub const CAPACITY: usize = 64;

    /// Creates an empty set.
    pub const fn empty() -> Self {
        WireSet(0)
    }

    /// Creates the set of wires `start..end`.
    pub fn range(start: usize, end: usize) -> Self {
        assert!(end <= Self::CAPACITY, "wire {} out of range", end);
        let mut set = WireSet::empty();
        for index in start..end {
            set.insert(Wire::new(index));
        }
        set
    }

    #[inline]
    fn bit(wire: Wire) -> u64 {
        debug_assert!(wire.index() < Self::CAPACITY);
        1u64 << wire.index()
    }

    /// Returns the number of wires in the set.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Returns true if `wire` is in the set.
    #[inline]
    pub fn contains(&self, wire: Wire) -> bool {
        (self.0 & Self::bit(wire)) != 0
    }

    /// Adds `wire`. Returns true if it was not already present.
    #[inline]
    pub fn insert(&mut self, wire: Wire) -> bool {
        let mask = Self::bit(wire);
        let was_clear = (self.0 & mask) == 0;
        self.0 |= mask;
        was_clear
    }

    /// Returns the union of two sets.
    #[inline]
    pub fn union(self, other: WireSet) -> WireSet {
        WireSet(self.0 | other.0)
    }

    /// Returns this set with `wire` added.
    #[inline]
    pub fn with(self, wire: Wire) -> WireSet {
        WireSet(self.0 | Self::bit(wire))
    }

    /// Returns true if every wire of `other` is also in `self`.
    #[inline]
    pub fn is_superset(&self, other: &WireSet) -> bool {
        (other.0 & !self.0) == 0
    }
}

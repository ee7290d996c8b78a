//! Warehouse Sets

use std::fmt;

use smallvec::SmallVec;

/// An ordered set of warehouse positions.
///
/// Positions are kept sorted and unique, so iteration always follows warehouse
/// priority order regardless of how the set was built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WarehouseSet {
    positions: SmallVec<[usize; 8]>,
}

impl WarehouseSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if the set contains a position.
    pub fn contains(&self, position: usize) -> bool {
        self.positions.binary_search(&position).is_ok()
    }

    /// Union of this set and another, in ascending order.
    #[must_use]
    pub fn union(&self, other: &WarehouseSet) -> WarehouseSet {
        self.iter().chain(other.iter()).collect()
    }

    /// Iterate over the positions in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.positions.iter().copied()
    }

    /// Positions as a sorted slice.
    pub fn as_slice(&self) -> &[usize] {
        &self.positions
    }

    /// Get the number of warehouses in the set.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}

impl FromIterator<usize> for WarehouseSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut positions: SmallVec<[usize; 8]> = iter.into_iter().collect();

        positions.sort_unstable();
        positions.dedup();

        WarehouseSet { positions }
    }
}

impl<const N: usize> From<[usize; N]> for WarehouseSet {
    fn from(positions: [usize; N]) -> Self {
        positions.into_iter().collect()
    }
}

impl fmt::Display for WarehouseSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;

        for (i, position) in self.positions.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }

            write!(f, "{position}")?;
        }

        f.write_str("}")
    }
}

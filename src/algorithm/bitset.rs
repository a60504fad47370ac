use bitvec::prelude::*;

/// Fixed-size bitset over oriented variant indices
///
/// Backs one row of a compatibility relation or one cell of the acceptance
/// mask. Provides O(1) membership testing during search.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VariantBitset {
    bits: BitVec,
}

impl VariantBitset {
    /// Create a bitset with no variants present
    pub fn new(len: usize) -> Self {
        Self {
            bits: bitvec![0; len],
        }
    }

    /// Number of variants the set ranges over
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// True when the set ranges over no variants at all
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Insert a variant index; indices past the end are ignored
    pub fn insert(&mut self, variant: usize) {
        if variant < self.bits.len() {
            self.bits.set(variant, true);
        }
    }

    /// Test variant membership
    pub fn contains(&self, variant: usize) -> bool {
        self.bits.get(variant).as_deref() == Some(&true)
    }

    /// Count variants in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }
}

//! Expansion of canonical piece classes into oriented variants

use std::collections::HashSet;

use crate::edge::algebra::EdgeAlgebra;
use crate::io::error::Result;
use crate::spatial::piece::{ORBIT_SIZE, Piece};

/// Distinct oriented placements of a list of canonical classes
///
/// Each variant remembers the class it was generated from. Classes whose
/// pieces are invariant under some transforms contribute fewer than eight
/// variants, so `classes <= len() <= 8 * classes`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VariantSet {
    variants: Vec<Piece>,
    class_of: Vec<usize>,
}

impl VariantSet {
    /// Expand canonical representatives into all their distinct orientations
    ///
    /// Images are generated class-major (all eight images of class 0, then
    /// class 1, ...). Duplicate tuples keep their first occurrence, whose
    /// generation position divided by eight is the recorded class index.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if a class uses a code outside the flip table
    pub fn expand(classes: &[Piece], algebra: &EdgeAlgebra) -> Result<Self> {
        let mut seen = HashSet::with_capacity(classes.len() * ORBIT_SIZE);
        let mut variants = Vec::with_capacity(classes.len() * ORBIT_SIZE);
        let mut class_of = Vec::with_capacity(classes.len() * ORBIT_SIZE);

        for (position, image) in classes
            .iter()
            .map(|class| class.images(algebra))
            .collect::<Result<Vec<_>>>()?
            .into_iter()
            .flatten()
            .enumerate()
        {
            if seen.insert(image) {
                variants.push(image);
                class_of.push(position / ORBIT_SIZE);
            }
        }

        Ok(Self { variants, class_of })
    }

    /// Assemble from precomputed parts without regenerating images
    pub(crate) const fn from_raw(variants: Vec<Piece>, class_of: Vec<usize>) -> Self {
        Self { variants, class_of }
    }

    /// Number of distinct variants
    pub const fn len(&self) -> usize {
        self.variants.len()
    }

    /// True when no classes were expanded
    pub const fn is_empty(&self) -> bool {
        self.variants.is_empty()
    }

    /// All variants in generation order
    pub fn variants(&self) -> &[Piece] {
        &self.variants
    }

    /// Originating class index of each variant
    pub fn class_indices(&self) -> &[usize] {
        &self.class_of
    }

    /// Variant at `index`
    pub fn get(&self, index: usize) -> Option<Piece> {
        self.variants.get(index).copied()
    }

    /// Class index of the variant at `index`
    pub fn class_of(&self, index: usize) -> Option<usize> {
        self.class_of.get(index).copied()
    }

    /// Split into the variant list and the class index list
    pub fn into_parts(self) -> (Vec<Piece>, Vec<usize>) {
        (self.variants, self.class_of)
    }
}

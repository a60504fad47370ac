//! Edge-type vocabulary with its opposite and flip involutions
//!
//! Edge codes are small integers. Two tables map every code to the code it
//! mates with across a shared edge (`opposite`) and to its mirror image under
//! reflection (`flip`). Both tables are validated once at construction so the
//! transforms built on top can rely on total, self-inverse lookups.

use std::collections::BTreeSet;

use crate::io::error::{Result, TilingError};
use crate::spatial::piece::Piece;

/// Integer label identifying a connector shape on one side of a piece
pub type EdgeType = u8;

/// Largest number of codes an edge table may define
pub const MAX_EDGE_TYPES: usize = EdgeType::MAX as usize + 1;

/// Validated opposite/flip tables over the codes `0..len()`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeAlgebra {
    opposite: Vec<EdgeType>,
    flip: Vec<EdgeType>,
}

impl EdgeAlgebra {
    /// Build an algebra from caller-supplied tables
    ///
    /// # Errors
    ///
    /// Returns `InvalidEdgeTable` if the tables are empty, differ in length,
    /// exceed [`MAX_EDGE_TYPES`], contain codes outside the table, or are not
    /// involutions.
    pub fn new(opposite: Vec<EdgeType>, flip: Vec<EdgeType>) -> Result<Self> {
        if opposite.is_empty() || opposite.len() > MAX_EDGE_TYPES {
            return Err(TilingError::InvalidEdgeTable {
                table: "opposite",
                reason: format!(
                    "must define between 1 and {MAX_EDGE_TYPES} codes, got {}",
                    opposite.len()
                ),
            });
        }
        if flip.len() != opposite.len() {
            return Err(TilingError::InvalidEdgeTable {
                table: "flip",
                reason: format!(
                    "defines {} codes but opposite defines {}",
                    flip.len(),
                    opposite.len()
                ),
            });
        }

        validate_involution("opposite", &opposite)?;
        validate_involution("flip", &flip)?;

        Ok(Self { opposite, flip })
    }

    /// Algebra where every code is its own opposite and its own mirror image
    ///
    /// # Errors
    ///
    /// Returns `InvalidEdgeTable` if `len` is zero or exceeds [`MAX_EDGE_TYPES`]
    pub fn identity(len: usize) -> Result<Self> {
        if len > MAX_EDGE_TYPES {
            return Err(TilingError::InvalidEdgeTable {
                table: "opposite",
                reason: format!("must define between 1 and {MAX_EDGE_TYPES} codes, got {len}"),
            });
        }
        let codes: Vec<EdgeType> = (0..len).map(|code| code as EdgeType).collect();
        Self::new(codes.clone(), codes)
    }

    /// Number of codes the tables define
    pub const fn len(&self) -> usize {
        self.opposite.len()
    }

    /// Tables are never empty once constructed
    pub const fn is_empty(&self) -> bool {
        self.opposite.is_empty()
    }

    /// Code that mates with `code` across a shared edge
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if `code` is outside the tables
    pub fn opposite(&self, code: EdgeType) -> Result<EdgeType> {
        lookup(&self.opposite, code)
    }

    /// Mirror image of `code` under reflection
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if `code` is outside the tables
    pub fn flip(&self, code: EdgeType) -> Result<EdgeType> {
        lookup(&self.flip, code)
    }

    /// Opposite table as a slice
    pub fn opposite_table(&self) -> &[EdgeType] {
        &self.opposite
    }

    /// Flip table as a slice
    pub fn flip_table(&self) -> &[EdgeType] {
        &self.flip
    }

    /// Ensure `code` is defined by the tables
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if `code` is outside the tables
    pub fn check(&self, code: EdgeType) -> Result<()> {
        self.opposite(code).map(|_| ())
    }

    /// Ensure every slot of `piece` is defined by the tables
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` for the first undefined slot
    pub fn check_piece(&self, piece: Piece) -> Result<()> {
        piece.edges().iter().try_for_each(|&code| self.check(code))
    }

    /// Smallest superset of `edge_types` closed under opposite, flip and their compositions
    ///
    /// The result is sorted and deduplicated. Closure is computed to a fixpoint,
    /// so closing an already closed set returns it unchanged.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if any input code is outside the tables
    pub fn close(&self, edge_types: &[EdgeType]) -> Result<Vec<EdgeType>> {
        let mut closed = BTreeSet::new();
        let mut pending = Vec::with_capacity(edge_types.len());

        for &code in edge_types {
            self.check(code)?;
            if closed.insert(code) {
                pending.push(code);
            }
        }

        while let Some(code) = pending.pop() {
            let opposite = self.opposite(code)?;
            let flipped = self.flip(code)?;
            for image in [opposite, flipped, self.opposite(flipped)?] {
                if closed.insert(image) {
                    pending.push(image);
                }
            }
        }

        Ok(closed.into_iter().collect())
    }
}

fn lookup(table: &[EdgeType], code: EdgeType) -> Result<EdgeType> {
    table
        .get(code as usize)
        .copied()
        .ok_or(TilingError::UndefinedEdgeCode {
            code: code as usize,
            defined: table.len(),
        })
}

fn validate_involution(name: &'static str, table: &[EdgeType]) -> Result<()> {
    for (code, &image) in table.iter().enumerate() {
        let Some(&back) = table.get(image as usize) else {
            return Err(TilingError::InvalidEdgeTable {
                table: name,
                reason: format!("code {code} maps to undefined code {image}"),
            });
        };
        if back as usize != code {
            return Err(TilingError::InvalidEdgeTable {
                table: name,
                reason: format!("not an involution: {code} -> {image} -> {back}"),
            });
        }
    }
    Ok(())
}

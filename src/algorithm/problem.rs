//! Solver inputs derived from a piece multiset and placement constraints
//!
//! Pieces are reduced to canonical classes with usage counts, the classes
//! are expanded into every distinct orientation, and two relations are
//! tabulated over those orientations: which variant may sit to the right of
//! or below which other, and which variants each cell accepts given the
//! pinned edges. The resulting [`Problem`] is immutable and can drive any
//! number of independent solvers.

use std::collections::BTreeMap;

use log::debug;
use ndarray::Array2;

use crate::algorithm::bitset::VariantBitset;
use crate::algorithm::constraints::{AcceptanceMatrix, Constraints};
use crate::algorithm::solver::Solver;
use crate::edge::algebra::EdgeAlgebra;
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, inconsistent, invalid_parameter, shape_mismatch};
use crate::spatial::piece::Piece;
use crate::spatial::variants::VariantSet;

/// Pairwise adjacency relations between oriented variants
///
/// `horizontal(a, b)` holds when `b` may sit directly to the right of `a`,
/// `vertical(a, b)` when `b` may sit directly below `a`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompatibilityMatrix {
    horizontal: Vec<VariantBitset>,
    vertical: Vec<VariantBitset>,
}

impl CompatibilityMatrix {
    /// Tabulate both relations for a list of variants
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if a variant uses a code outside the tables
    pub fn build(variants: &[Piece], algebra: &EdgeAlgebra) -> Result<Self> {
        let n = variants.len();
        let mated_lefts = variants
            .iter()
            .map(|variant| algebra.opposite(variant.left()))
            .collect::<Result<Vec<_>>>()?;
        let mated_tops = variants
            .iter()
            .map(|variant| algebra.opposite(variant.top()))
            .collect::<Result<Vec<_>>>()?;

        let mut horizontal = Vec::with_capacity(n);
        let mut vertical = Vec::with_capacity(n);
        for variant in variants {
            let mut right_of = VariantBitset::new(n);
            let mut below = VariantBitset::new(n);
            for (index, (&left, &top)) in mated_lefts.iter().zip(&mated_tops).enumerate() {
                if variant.right() == left {
                    right_of.insert(index);
                }
                if variant.bottom() == top {
                    below.insert(index);
                }
            }
            horizontal.push(right_of);
            vertical.push(below);
        }

        Ok(Self {
            horizontal,
            vertical,
        })
    }

    /// Assemble from one bitset row per left/top variant
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless both relations are square over the same size
    pub fn from_rows(horizontal: Vec<VariantBitset>, vertical: Vec<VariantBitset>) -> Result<Self> {
        let n = horizontal.len();
        for (name, rows) in [("horizontal", &horizontal), ("vertical", &vertical)] {
            if rows.len() != n {
                return Err(shape_mismatch(name, &[n, n], &[rows.len(), n]));
            }
            if let Some(row) = rows.iter().find(|row| row.len() != n) {
                return Err(shape_mismatch(name, &[n, n], &[n, row.len()]));
            }
        }
        Ok(Self {
            horizontal,
            vertical,
        })
    }

    /// Number of variants on each axis
    pub const fn len(&self) -> usize {
        self.horizontal.len()
    }

    /// True when the relations range over no variants
    pub const fn is_empty(&self) -> bool {
        self.horizontal.is_empty()
    }

    /// Whether `right` may sit directly to the right of `left`
    pub fn horizontal(&self, left: usize, right: usize) -> bool {
        self.horizontal
            .get(left)
            .is_some_and(|row| row.contains(right))
    }

    /// Whether `bottom` may sit directly below `top`
    pub fn vertical(&self, top: usize, bottom: usize) -> bool {
        self.vertical
            .get(top)
            .is_some_and(|row| row.contains(bottom))
    }
}

/// Raw components of a [`Problem`], for callers assembling inputs by hand
#[derive(Debug, Clone)]
pub struct ProblemParts {
    /// Grid height
    pub rows: usize,
    /// Grid width
    pub cols: usize,
    /// Canonical class representatives (C)
    pub classes: Vec<Piece>,
    /// Available count per class (C)
    pub counts: Vec<usize>,
    /// Oriented variants (N)
    pub variants: Vec<Piece>,
    /// Class index of each variant (N)
    pub class_of: Vec<usize>,
    /// Per-cell acceptance mask (rows x cols x N)
    pub acceptance: AcceptanceMatrix,
    /// Adjacency relations (N x N)
    pub compatibility: CompatibilityMatrix,
}

/// Fully prepared search problem
#[derive(Debug, Clone)]
pub struct Problem {
    rows: usize,
    cols: usize,
    classes: Vec<Piece>,
    counts: Vec<usize>,
    variants: VariantSet,
    acceptance: AcceptanceMatrix,
    compatibility: CompatibilityMatrix,
}

impl Problem {
    /// Derive solver inputs from a flat list of `rows * cols` raw pieces
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `rows` or `cols` is zero or exceeds the grid dimension limit
    /// - The number of pieces differs from `rows * cols`
    /// - A piece or pinned edge uses a code outside the tables
    /// - Explicit constraints have the wrong shape
    pub fn prepare(
        rows: usize,
        cols: usize,
        pieces: &[Piece],
        algebra: &EdgeAlgebra,
        constraints: &Constraints,
    ) -> Result<Self> {
        validate_dimension("rows", rows)?;
        validate_dimension("cols", cols)?;
        if pieces.len() != rows * cols {
            return Err(inconsistent(&format!(
                "{} pieces cannot tile a {rows}x{cols} grid",
                pieces.len()
            )));
        }

        let mut multiset: BTreeMap<Piece, usize> = BTreeMap::new();
        for &piece in pieces {
            algebra.check_piece(piece)?;
            *multiset.entry(piece.canonicalize(algebra)?).or_insert(0) += 1;
        }
        let (classes, counts): (Vec<Piece>, Vec<usize>) = multiset.into_iter().unzip();

        let variants = VariantSet::expand(&classes, algebra)?;
        let compatibility = CompatibilityMatrix::build(variants.variants(), algebra)?;
        let pins = constraints.resolve(rows, cols, algebra)?;
        let acceptance = AcceptanceMatrix::build(&pins, variants.variants(), algebra)?;

        debug!(
            "Prepared {rows}x{cols} problem: {} classes, {} variants, {} pinned edges, {} accepted placements",
            classes.len(),
            variants.len(),
            pins.pinned(),
            acceptance.accepted()
        );

        Ok(Self {
            rows,
            cols,
            classes,
            counts,
            variants,
            acceptance,
            compatibility,
        })
    }

    /// Derive solver inputs from a `rows x cols` array of raw pieces
    ///
    /// # Errors
    ///
    /// Same conditions as [`Problem::prepare`]
    pub fn prepare_grid(
        pieces: &Array2<Piece>,
        algebra: &EdgeAlgebra,
        constraints: &Constraints,
    ) -> Result<Self> {
        let (rows, cols) = pieces.dim();
        let flat: Vec<Piece> = pieces.iter().copied().collect();
        Self::prepare(rows, cols, &flat, algebra, constraints)
    }

    /// Assemble a problem from precomputed parts
    ///
    /// Only shapes are checked. Counts that do not add up to `rows * cols`
    /// are accepted and yield a solver with no solutions.
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if any component disagrees with the
    /// dimensions implied by the others
    pub fn from_parts(parts: ProblemParts) -> Result<Self> {
        let ProblemParts {
            rows,
            cols,
            classes,
            counts,
            variants,
            class_of,
            acceptance,
            compatibility,
        } = parts;
        let (c, n) = (classes.len(), variants.len());

        if counts.len() != c {
            return Err(shape_mismatch("counts", &[c], &[counts.len()]));
        }
        if class_of.len() != n {
            return Err(shape_mismatch("class_of", &[n], &[class_of.len()]));
        }
        if let Some(&class) = class_of.iter().find(|&&class| class >= c) {
            return Err(shape_mismatch("class_of", &[c], &[class + 1]));
        }
        let (a_rows, a_cols, a_variants) = acceptance.dim();
        if (a_rows, a_cols, a_variants) != (rows, cols, n) {
            return Err(shape_mismatch(
                "acceptance",
                &[rows, cols, n],
                &[a_rows, a_cols, a_variants],
            ));
        }
        if compatibility.len() != n {
            return Err(shape_mismatch(
                "compatibility",
                &[n, n],
                &[compatibility.len(), compatibility.len()],
            ));
        }

        Ok(Self {
            rows,
            cols,
            classes,
            counts,
            variants: VariantSet::from_raw(variants, class_of),
            acceptance,
            compatibility,
        })
    }

    /// Split back into raw components
    pub fn into_parts(self) -> ProblemParts {
        let (variants, class_of) = self.variants.into_parts();
        ProblemParts {
            rows: self.rows,
            cols: self.cols,
            classes: self.classes,
            counts: self.counts,
            variants,
            class_of,
            acceptance: self.acceptance,
            compatibility: self.compatibility,
        }
    }

    /// Grid height
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Number of cells to fill
    pub const fn cells(&self) -> usize {
        self.rows * self.cols
    }

    /// Canonical class representatives in increasing order
    pub fn classes(&self) -> &[Piece] {
        &self.classes
    }

    /// Available count per class
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total number of available pieces
    pub fn piece_count(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Oriented variants with their class indices
    pub const fn variants(&self) -> &VariantSet {
        &self.variants
    }

    /// Per-cell acceptance mask
    pub const fn acceptance(&self) -> &AcceptanceMatrix {
        &self.acceptance
    }

    /// Adjacency relations
    pub const fn compatibility(&self) -> &CompatibilityMatrix {
        &self.compatibility
    }

    /// Fresh solver positioned before the first solution
    pub fn solver(&self) -> Solver<'_> {
        Solver::new(self)
    }

    /// Count solutions, stopping once `limit` have been found
    pub fn count_solutions(&self, limit: Option<usize>) -> usize {
        self.solver().count_remaining(limit)
    }
}

fn validate_dimension(parameter: &'static str, value: usize) -> Result<()> {
    if value == 0 || value > MAX_GRID_DIMENSION {
        return Err(invalid_parameter(
            parameter,
            &value,
            &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
        ));
    }
    Ok(())
}

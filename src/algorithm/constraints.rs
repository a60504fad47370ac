//! Boundary and custom edge constraints, and the per-cell acceptance mask
//!
//! Constraints pin individual grid edges to a required code. They are
//! resolved into [`EdgePins`] shaped like an [`EdgeGrid`](crate::spatial::grid::EdgeGrid)
//! and then folded, cell by cell, into an [`AcceptanceMatrix`] listing which
//! oriented variants may sit at each cell.

use ndarray::Array2;

use crate::algorithm::bitset::VariantBitset;
use crate::edge::algebra::{EdgeAlgebra, EdgeType, MAX_EDGE_TYPES};
use crate::io::configuration::FLAT_EDGE;
use crate::io::error::{Result, TilingError, shape_mismatch};
use crate::spatial::piece::Piece;

/// Placement restrictions applied on top of neighbour compatibility
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Constraints {
    /// Every edge is free
    #[default]
    None,
    /// Every outward perimeter edge is flat
    Border,
    /// Caller-provided pins
    Explicit(EdgePins),
}

impl Constraints {
    /// Resolve into per-edge pins for a `rows x cols` grid
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` if explicit pins have the wrong shape and
    /// `UndefinedEdgeCode` if a pinned code is outside the tables
    pub fn resolve(&self, rows: usize, cols: usize, algebra: &EdgeAlgebra) -> Result<EdgePins> {
        let pins = match self {
            Self::None => EdgePins::unconstrained(rows, cols),
            Self::Border => EdgePins::border(rows, cols, FLAT_EDGE),
            Self::Explicit(pins) => pins.clone(),
        };
        pins.check(rows, cols, algebra)?;
        Ok(pins)
    }
}

/// Optional required code for every grid edge
///
/// Pinned codes follow the grid convention: a horizontal edge is seen from
/// the cell on its right, a vertical edge from the cell above it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgePins {
    /// Pins for edges between horizontally adjacent cells, shape `(rows, cols + 1)`
    pub horizontal: Array2<Option<EdgeType>>,
    /// Pins for edges between vertically adjacent cells, shape `(rows + 1, cols)`
    pub vertical: Array2<Option<EdgeType>>,
}

impl EdgePins {
    /// No edge pinned
    pub fn unconstrained(rows: usize, cols: usize) -> Self {
        Self {
            horizontal: Array2::from_elem((rows, cols + 1), None),
            vertical: Array2::from_elem((rows + 1, cols), None),
        }
    }

    /// Perimeter pinned to `code`, interior free
    pub fn border(rows: usize, cols: usize, code: EdgeType) -> Self {
        let mut pins = Self::unconstrained(rows, cols);
        for mut row in pins.horizontal.rows_mut() {
            if let Some(first) = row.get_mut(0) {
                *first = Some(code);
            }
            if let Some(last) = row.get_mut(cols) {
                *last = Some(code);
            }
        }
        for mut column in pins.vertical.columns_mut() {
            if let Some(first) = column.get_mut(0) {
                *first = Some(code);
            }
            if let Some(last) = column.get_mut(rows) {
                *last = Some(code);
            }
        }
        pins
    }

    /// Build from signed arrays where any negative value means "unconstrained"
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` for values too large to be an edge code
    pub fn from_signed(horizontal: &Array2<i32>, vertical: &Array2<i32>) -> Result<Self> {
        Ok(Self {
            horizontal: signed_to_pins(horizontal)?,
            vertical: signed_to_pins(vertical)?,
        })
    }

    /// Convert back to signed arrays using `sentinel` for free edges
    pub fn to_signed(&self, sentinel: i32) -> (Array2<i32>, Array2<i32>) {
        let convert = |pin: &Option<EdgeType>| pin.map_or(sentinel, i32::from);
        (self.horizontal.map(convert), self.vertical.map(convert))
    }

    /// Number of pinned edges
    pub fn pinned(&self) -> usize {
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .flatten()
            .count()
    }

    fn check(&self, rows: usize, cols: usize, algebra: &EdgeAlgebra) -> Result<()> {
        if self.horizontal.dim() != (rows, cols + 1) {
            let (r, c) = self.horizontal.dim();
            return Err(shape_mismatch("horizontal constraints", &[rows, cols + 1], &[r, c]));
        }
        if self.vertical.dim() != (rows + 1, cols) {
            let (r, c) = self.vertical.dim();
            return Err(shape_mismatch("vertical constraints", &[rows + 1, cols], &[r, c]));
        }
        self.horizontal
            .iter()
            .chain(self.vertical.iter())
            .flatten()
            .try_for_each(|&code| algebra.check(code))
    }

    /// Required codes for the four sides of cell `(row, col)`, from the piece's point of view
    fn cell_requirements(
        &self,
        row: usize,
        col: usize,
        algebra: &EdgeAlgebra,
    ) -> Result<[Option<EdgeType>; 4]> {
        let right = self.horizontal.get((row, col + 1)).copied().flatten();
        let top = self.vertical.get((row, col)).copied().flatten();
        let left = self.horizontal.get((row, col)).copied().flatten();
        let bottom = self.vertical.get((row + 1, col)).copied().flatten();
        Ok([
            right.map(|code| algebra.opposite(code)).transpose()?,
            top.map(|code| algebra.opposite(code)).transpose()?,
            left,
            bottom,
        ])
    }
}

fn signed_to_pins(values: &Array2<i32>) -> Result<Array2<Option<EdgeType>>> {
    let mut pins = Array2::from_elem(values.dim(), None);
    for (pin, &value) in pins.iter_mut().zip(values.iter()) {
        if value >= 0 {
            let Ok(code) = EdgeType::try_from(value) else {
                return Err(TilingError::UndefinedEdgeCode {
                    code: value as usize,
                    defined: MAX_EDGE_TYPES,
                });
            };
            *pin = Some(code);
        }
    }
    Ok(pins)
}

/// Per-cell mask of the variants that satisfy every pinned edge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AcceptanceMatrix {
    rows: usize,
    cols: usize,
    variants: usize,
    cells: Vec<VariantBitset>,
}

impl AcceptanceMatrix {
    /// Fold pins into the mask for the given variants
    ///
    /// A variant is accepted at a cell when each of its four sides either
    /// faces an unpinned edge or carries the code the pin requires.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if a pinned code is outside the tables
    pub fn build(pins: &EdgePins, variants: &[Piece], algebra: &EdgeAlgebra) -> Result<Self> {
        let (rows, cols) = (pins.horizontal.nrows(), pins.vertical.ncols());
        let mut cells = Vec::with_capacity(rows * cols);

        for row in 0..rows {
            for col in 0..cols {
                let required = pins.cell_requirements(row, col, algebra)?;
                let mut accepted = VariantBitset::new(variants.len());
                for (index, variant) in variants.iter().enumerate() {
                    let fits = required
                        .iter()
                        .zip(variant.edges())
                        .all(|(pin, edge)| pin.is_none_or(|code| code == edge));
                    if fits {
                        accepted.insert(index);
                    }
                }
                cells.push(accepted);
            }
        }

        Ok(Self {
            rows,
            cols,
            variants: variants.len(),
            cells,
        })
    }

    /// Assemble from one bitset per cell in row-major order
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless there are `rows * cols` cells, each
    /// ranging over exactly `variants` indices
    pub fn from_cells(
        rows: usize,
        cols: usize,
        variants: usize,
        cells: Vec<VariantBitset>,
    ) -> Result<Self> {
        if cells.len() != rows * cols {
            return Err(shape_mismatch(
                "acceptance",
                &[rows, cols, variants],
                &[cells.len(), 1, variants],
            ));
        }
        if let Some(cell) = cells.iter().find(|cell| cell.len() != variants) {
            return Err(shape_mismatch(
                "acceptance",
                &[rows, cols, variants],
                &[rows, cols, cell.len()],
            ));
        }
        Ok(Self {
            rows,
            cols,
            variants,
            cells,
        })
    }

    /// Shape as `(rows, cols, variants)`
    pub const fn dim(&self) -> (usize, usize, usize) {
        (self.rows, self.cols, self.variants)
    }

    /// Total number of accepted (cell, variant) placements
    pub fn accepted(&self) -> usize {
        self.cells.iter().map(VariantBitset::count).sum()
    }

    /// Whether `variant` may be placed at row-major cell index `cell`
    pub fn accepts(&self, cell: usize, variant: usize) -> bool {
        self.cells
            .get(cell)
            .is_some_and(|accepted| accepted.contains(variant))
    }
}

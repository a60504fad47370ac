//! Shared-edge grids and their conversion to per-cell pieces
//!
//! A grid of `rows x cols` cells is described by its edges. `horizontal`
//! holds the `rows x (cols + 1)` edges separating horizontally adjacent cells
//! (including the left and right borders) and `vertical` the
//! `(rows + 1) x cols` edges separating vertically adjacent cells. Each stored
//! code is seen from the cell to its right (for `horizontal`) or above it (for
//! `vertical`); the codec applies `opposite` where a piece sees the edge from
//! the other side.

use ndarray::Array2;

use crate::edge::algebra::{EdgeAlgebra, EdgeType};
use crate::io::error::{Result, inconsistent, shape_mismatch};
use crate::spatial::piece::Piece;

/// Edge codes of a rectangular grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EdgeGrid {
    /// Edges between horizontally adjacent cells, shape `(rows, cols + 1)`
    pub horizontal: Array2<EdgeType>,
    /// Edges between vertically adjacent cells, shape `(rows + 1, cols)`
    pub vertical: Array2<EdgeType>,
}

impl EdgeGrid {
    /// Create a grid from its two edge arrays
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` unless the shapes are exactly
    /// `(rows, cols + 1)` and `(rows + 1, cols)` with `rows, cols >= 1`
    pub fn new(horizontal: Array2<EdgeType>, vertical: Array2<EdgeType>) -> Result<Self> {
        let (rows, width) = horizontal.dim();
        let (_, cols) = vertical.dim();
        if rows == 0 || width < 2 {
            return Err(shape_mismatch(
                "horizontal",
                &[rows.max(1), width.max(2)],
                &[rows, width],
            ));
        }
        if width != cols + 1 {
            return Err(shape_mismatch("horizontal", &[rows, cols + 1], &[rows, width]));
        }
        if vertical.dim() != (rows + 1, cols) {
            let (found_rows, found_cols) = vertical.dim();
            return Err(shape_mismatch(
                "vertical",
                &[rows + 1, cols],
                &[found_rows, found_cols],
            ));
        }
        Ok(Self {
            horizontal,
            vertical,
        })
    }

    /// Grid with every edge set to `code`
    pub fn filled(rows: usize, cols: usize, code: EdgeType) -> Self {
        Self {
            horizontal: Array2::from_elem((rows, cols + 1), code),
            vertical: Array2::from_elem((rows + 1, cols), code),
        }
    }

    /// Number of cell rows
    pub fn rows(&self) -> usize {
        self.horizontal.nrows()
    }

    /// Number of cell columns
    pub fn cols(&self) -> usize {
        self.vertical.ncols()
    }

    /// Overwrite the outer perimeter with `code`
    pub fn set_border(&mut self, code: EdgeType) {
        let last_col = self.cols();
        let last_row = self.rows();
        for mut row in self.horizontal.rows_mut() {
            if let Some(first) = row.get_mut(0) {
                *first = code;
            }
            if let Some(last) = row.get_mut(last_col) {
                *last = code;
            }
        }
        for mut column in self.vertical.columns_mut() {
            if let Some(first) = column.get_mut(0) {
                *first = code;
            }
            if let Some(last) = column.get_mut(last_row) {
                *last = code;
            }
        }
    }

    /// Convert to per-cell pieces, each expressed from its own point of view
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if an edge is outside the opposite table
    pub fn to_pieces(&self, algebra: &EdgeAlgebra) -> Result<Array2<Piece>> {
        let (rows, cols) = (self.rows(), self.cols());
        let mut pieces = Array2::from_elem((rows, cols), Piece::default());

        for ((r, c), piece) in pieces.indexed_iter_mut() {
            let right = self.horizontal_at(r, c + 1)?;
            let top = self.vertical_at(r, c)?;
            let left = self.horizontal_at(r, c)?;
            let bottom = self.vertical_at(r + 1, c)?;
            *piece = Piece::new([
                algebra.opposite(right)?,
                algebra.opposite(top)?,
                left,
                bottom,
            ]);
        }

        Ok(pieces)
    }

    /// Rebuild a grid from per-cell pieces
    ///
    /// # Errors
    ///
    /// Returns `ShapeMismatch` for an empty piece array,
    /// `InconsistentPieceSet` if two neighbouring pieces do not mate, and
    /// `UndefinedEdgeCode` if a code is outside the opposite table
    pub fn from_pieces(pieces: &Array2<Piece>, algebra: &EdgeAlgebra) -> Result<Self> {
        let (rows, cols) = pieces.dim();
        if rows == 0 || cols == 0 {
            return Err(shape_mismatch(
                "pieces",
                &[rows.max(1), cols.max(1), 4],
                &[rows, cols, 4],
            ));
        }

        for window in pieces.windows((1, 2)) {
            let (Some(left), Some(right)) = (window.get((0, 0)), window.get((0, 1))) else {
                continue;
            };
            if left.right() != algebra.opposite(right.left())? {
                return Err(inconsistent(&format!(
                    "horizontal neighbours {left} and {right} do not mate"
                )));
            }
        }
        for window in pieces.windows((2, 1)) {
            let (Some(top), Some(bottom)) = (window.get((0, 0)), window.get((1, 0))) else {
                continue;
            };
            if top.bottom() != algebra.opposite(bottom.top())? {
                return Err(inconsistent(&format!(
                    "vertical neighbours {top} and {bottom} do not mate"
                )));
            }
        }

        let mut grid = Self::filled(rows, cols, 0);
        for ((r, c), piece) in pieces.indexed_iter() {
            if c == 0 {
                grid.set_horizontal(r, 0, piece.left());
            }
            grid.set_horizontal(r, c + 1, algebra.opposite(piece.right())?);
            if r == 0 {
                grid.set_vertical(0, c, algebra.opposite(piece.top())?);
            }
            grid.set_vertical(r + 1, c, piece.bottom());
        }

        Ok(grid)
    }

    fn horizontal_at(&self, row: usize, col: usize) -> Result<EdgeType> {
        self.horizontal.get((row, col)).copied().ok_or_else(|| {
            let (rows, cols) = self.horizontal.dim();
            shape_mismatch("horizontal", &[row + 1, col + 1], &[rows, cols])
        })
    }

    fn vertical_at(&self, row: usize, col: usize) -> Result<EdgeType> {
        self.vertical.get((row, col)).copied().ok_or_else(|| {
            let (rows, cols) = self.vertical.dim();
            shape_mismatch("vertical", &[row + 1, col + 1], &[rows, cols])
        })
    }

    fn set_horizontal(&mut self, row: usize, col: usize, code: EdgeType) {
        if let Some(edge) = self.horizontal.get_mut((row, col)) {
            *edge = code;
        }
    }

    fn set_vertical(&mut self, row: usize, col: usize, code: EdgeType) {
        if let Some(edge) = self.vertical.get_mut((row, col)) {
            *edge = code;
        }
    }
}

/// Convert two edge arrays into per-cell pieces
///
/// # Errors
///
/// Returns `ShapeMismatch` if the arrays are not `(rows, cols + 1)` and
/// `(rows + 1, cols)`, or `UndefinedEdgeCode` for codes outside the tables
pub fn grid_to_pieces(
    horizontal: &Array2<EdgeType>,
    vertical: &Array2<EdgeType>,
    algebra: &EdgeAlgebra,
) -> Result<Array2<Piece>> {
    EdgeGrid::new(horizontal.clone(), vertical.clone())?.to_pieces(algebra)
}

/// Convert per-cell pieces back into two edge arrays
///
/// # Errors
///
/// Returns `InconsistentPieceSet` if neighbouring pieces do not mate
pub fn pieces_to_grid(
    pieces: &Array2<Piece>,
    algebra: &EdgeAlgebra,
) -> Result<(Array2<EdgeType>, Array2<EdgeType>)> {
    let grid = EdgeGrid::from_pieces(pieces, algebra)?;
    Ok((grid.horizontal, grid.vertical))
}

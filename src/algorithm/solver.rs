//! Backtracking enumeration of complete tilings
//!
//! The solver fills cells in row-major order. Each cell holds the index of
//! the oriented variant currently tried there; a candidate is placed only if
//! its class still has pieces left, the cell accepts it, and it mates with
//! the already placed neighbours to the left and above. When a cell runs
//! out of candidates the search backtracks and returns the piece taken by
//! the previous cell to the pool.
//!
//! All state lives in pre-sized vectors owned by the solver, and is frozen
//! between calls to [`Solver::step`], so enumeration is lazy and can stop at
//! any point. Solutions come out in strictly increasing lexicographic order
//! of their variant index sequence, each exactly once.

use std::iter::FusedIterator;

use ndarray::Array2;

use crate::algorithm::problem::Problem;
use crate::edge::algebra::EdgeAlgebra;
use crate::io::error::Result;
use crate::spatial::grid::EdgeGrid;
use crate::spatial::piece::Piece;

/// Result of advancing the search
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The stack holds a complete tiling
    Found,
    /// Every assignment has been explored
    Exhausted,
}

/// One complete tiling
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tiling {
    variants: Array2<usize>,
    pieces: Array2<Piece>,
}

impl Tiling {
    /// Variant index placed at each cell
    pub const fn variant_indices(&self) -> &Array2<usize> {
        &self.variants
    }

    /// Concrete oriented piece placed at each cell
    pub const fn pieces(&self) -> &Array2<Piece> {
        &self.pieces
    }

    /// Take ownership of the piece grid
    pub fn into_pieces(self) -> Array2<Piece> {
        self.pieces
    }

    /// Grid height
    pub fn rows(&self) -> usize {
        self.pieces.nrows()
    }

    /// Grid width
    pub fn cols(&self) -> usize {
        self.pieces.ncols()
    }

    /// Shared-edge representation of the tiling
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if `algebra` is not the one the problem was built with
    pub fn to_edge_grid(&self, algebra: &EdgeAlgebra) -> Result<EdgeGrid> {
        EdgeGrid::from_pieces(&self.pieces, algebra)
    }

    /// Pieces as nested rows, for serialization
    pub fn to_rows(&self) -> Vec<Vec<Piece>> {
        self.pieces
            .rows()
            .into_iter()
            .map(|row| row.iter().copied().collect())
            .collect()
    }
}

/// Resumable depth-first search over one [`Problem`]
///
/// A solver is forward-only: once exhausted it stays exhausted, and a fresh
/// solver is needed to enumerate again.
#[derive(Debug, Clone)]
pub struct Solver<'p> {
    problem: &'p Problem,
    stack: Vec<usize>,
    remaining: Vec<usize>,
    depth: usize,
    just_found: bool,
    exhausted: bool,
}

impl<'p> Solver<'p> {
    /// Create a solver positioned before the first solution
    ///
    /// A problem whose piece counts do not add up to the number of cells, or
    /// that has no variants at all, starts out exhausted.
    pub fn new(problem: &'p Problem) -> Self {
        let cells = problem.cells();
        let exhausted =
            cells == 0 || problem.variants().is_empty() || problem.piece_count() != cells;

        Self {
            problem,
            stack: vec![0; cells],
            remaining: problem.counts().to_vec(),
            depth: 0,
            just_found: false,
            exhausted,
        }
    }

    /// Problem this solver enumerates
    pub const fn problem(&self) -> &'p Problem {
        self.problem
    }

    /// Index of the cell currently being decided
    pub const fn depth(&self) -> usize {
        self.depth
    }

    /// Variant stack; entries past `depth()` are stale
    pub fn stack(&self) -> &[usize] {
        &self.stack
    }

    /// Variants committed to the cells before `depth()`
    pub fn placed(&self) -> &[usize] {
        self.stack.get(..self.depth).unwrap_or_default()
    }

    /// Live count of unused pieces per class
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    /// Whether the search has finished
    pub const fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Advance to the next complete tiling
    ///
    /// After [`StepOutcome::Found`] the full stack is a valid assignment until
    /// the next call.
    pub fn step(&mut self) -> StepOutcome {
        if self.exhausted {
            return StepOutcome::Exhausted;
        }

        let last_variant = self.problem.variants().len() - 1;
        let last_cell = self.stack.len() - 1;

        loop {
            let candidate = self.current();
            if !self.just_found && self.fits(candidate) {
                if self.depth == last_cell {
                    self.just_found = true;
                    return StepOutcome::Found;
                }
                self.take(candidate);
                self.depth += 1;
                self.set_current(0);
                continue;
            }
            self.just_found = false;

            while self.current() == last_variant {
                if self.depth == 0 {
                    self.exhausted = true;
                    return StepOutcome::Exhausted;
                }
                self.depth -= 1;
                self.give_back(self.current());
            }

            self.set_current(self.current() + 1);
        }
    }

    /// Advance and return the next tiling, if any
    pub fn try_next(&mut self) -> Option<Tiling> {
        match self.step() {
            StepOutcome::Found => Some(self.tiling()),
            StepOutcome::Exhausted => None,
        }
    }

    /// Count the solutions not yet emitted, stopping at `limit`
    pub fn count_remaining(&mut self, limit: Option<usize>) -> usize {
        let mut found = 0;
        while limit.is_none_or(|cap| found < cap) && self.step() == StepOutcome::Found {
            found += 1;
        }
        found
    }

    fn tiling(&self) -> Tiling {
        let (rows, cols) = (self.problem.rows(), self.problem.cols());
        let variants = Array2::from_shape_fn((rows, cols), |(r, c)| {
            self.stack.get(r * cols + c).copied().unwrap_or(0)
        });
        let pieces = variants.map(|&index| self.problem.variants().get(index).unwrap_or_default());
        Tiling { variants, pieces }
    }

    fn current(&self) -> usize {
        self.stack.get(self.depth).copied().unwrap_or(0)
    }

    fn set_current(&mut self, variant: usize) {
        if let Some(slot) = self.stack.get_mut(self.depth) {
            *slot = variant;
        }
    }

    fn fits(&self, candidate: usize) -> bool {
        let problem = self.problem;
        let cols = problem.cols();

        let available = problem
            .variants()
            .class_of(candidate)
            .and_then(|class| self.remaining.get(class))
            .is_some_and(|&count| count > 0);
        if !available || !problem.acceptance().accepts(self.depth, candidate) {
            return false;
        }

        if !self.depth.is_multiple_of(cols) {
            let left = self.stack.get(self.depth - 1).copied().unwrap_or(0);
            if !problem.compatibility().horizontal(left, candidate) {
                return false;
            }
        }
        if self.depth >= cols {
            let above = self.stack.get(self.depth - cols).copied().unwrap_or(0);
            if !problem.compatibility().vertical(above, candidate) {
                return false;
            }
        }
        true
    }

    fn take(&mut self, variant: usize) {
        if let Some(count) = self.class_count_mut(variant) {
            *count -= 1;
        }
    }

    fn give_back(&mut self, variant: usize) {
        if let Some(count) = self.class_count_mut(variant) {
            *count += 1;
        }
    }

    fn class_count_mut(&mut self, variant: usize) -> Option<&mut usize> {
        let class = self.problem.variants().class_of(variant)?;
        self.remaining.get_mut(class)
    }
}

impl Iterator for Solver<'_> {
    type Item = Tiling;

    fn next(&mut self) -> Option<Self::Item> {
        self.try_next()
    }
}

impl FusedIterator for Solver<'_> {}

//! Random puzzles whose solution is unique up to board symmetry
//!
//! A puzzle is drawn as a bordered edge grid, cut into pieces, and checked by
//! running the solver. Grids that contain two identical pieces are skipped
//! outright, since swapping them would always give a second solution. A grid
//! is accepted when the solver finds no more solutions than the board has
//! symmetries, i.e. every solution is a rotation or reflection of the drawn one.

use std::collections::HashSet;

use log::{debug, info};
use rand::{SeedableRng, rngs::StdRng, seq::SliceRandom};

use crate::algorithm::constraints::Constraints;
use crate::algorithm::problem::Problem;
use crate::edge::algebra::{EdgeAlgebra, EdgeType};
use crate::generation::sampling::{first_edge_types, sample_grid};
use crate::io::configuration::{
    DEFAULT_COLS, DEFAULT_EDGE_TYPES, DEFAULT_MAX_ATTEMPTS, DEFAULT_ROWS, DEFAULT_SEED, FLAT_EDGE,
    RECTANGULAR_BOARD_SYMMETRIES, SQUARE_BOARD_SYMMETRIES,
};
use crate::io::error::{Result, TilingError, invalid_parameter};
use crate::spatial::grid::EdgeGrid;
use crate::spatial::piece::Piece;

/// Parameters for puzzle generation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PuzzleConfig {
    /// Grid height
    pub rows: usize,
    /// Grid width
    pub cols: usize,
    /// Codes to draw from; the first one is the border code
    pub edge_types: Vec<EdgeType>,
    /// Seed for sampling and shuffling
    pub seed: u64,
    /// Sampled grids to try before giving up
    pub max_attempts: usize,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            edge_types: first_edge_types(DEFAULT_EDGE_TYPES),
            seed: DEFAULT_SEED,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }
}

/// Generated puzzle with its reference solution
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    /// Grid height
    pub rows: usize,
    /// Grid width
    pub cols: usize,
    /// Pieces in canonical orientation, shuffled
    pub pieces: Vec<Piece>,
    /// Edge grid the pieces were cut from
    pub solution: EdgeGrid,
    /// Number of solutions found, all symmetric images of `solution`
    pub solutions: usize,
    /// Grids sampled until this one was accepted
    pub attempts: usize,
}

/// Number of solutions a puzzle may have while still counting as unique
pub const fn symmetry_bound(rows: usize, cols: usize) -> usize {
    if rows == cols {
        SQUARE_BOARD_SYMMETRIES
    } else {
        RECTANGULAR_BOARD_SYMMETRIES
    }
}

/// Whether two pieces of the list are equal up to rotation and reflection
///
/// # Errors
///
/// Returns `UndefinedEdgeCode` if a piece uses a code outside the tables
pub fn has_duplicate_pieces(pieces: &[Piece], algebra: &EdgeAlgebra) -> Result<bool> {
    let mut seen = HashSet::with_capacity(pieces.len());
    for piece in pieces {
        if !seen.insert(piece.canonicalize(algebra)?) {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Sample grids until one yields a puzzle with an essentially unique solution
///
/// # Errors
///
/// Returns `InvalidParameter` or `UndefinedEdgeCode` for bad configuration,
/// and `GenerationExhausted` if no grid is accepted within `max_attempts`
pub fn generate_puzzle(config: &PuzzleConfig, algebra: &EdgeAlgebra) -> Result<Puzzle> {
    if config.max_attempts == 0 {
        return Err(invalid_parameter(
            "max_attempts",
            &config.max_attempts,
            &"must be positive",
        ));
    }

    let mut rng = StdRng::seed_from_u64(config.seed);
    let bound = symmetry_bound(config.rows, config.cols);

    for attempt in 1..=config.max_attempts {
        let grid = sample_grid(
            config.rows,
            config.cols,
            &config.edge_types,
            Some(FLAT_EDGE),
            algebra,
            &mut rng,
        )?;
        let pieces: Vec<Piece> = grid.to_pieces(algebra)?.into_iter().collect();

        if has_duplicate_pieces(&pieces, algebra)? {
            debug!("Attempt {attempt}: rejected, repeated piece");
            continue;
        }

        let problem = Problem::prepare(
            config.rows,
            config.cols,
            &pieces,
            algebra,
            &Constraints::Border,
        )?;
        let solutions = problem.count_solutions(Some(bound + 1));
        if solutions > bound {
            debug!("Attempt {attempt}: rejected, more than {bound} solutions");
            continue;
        }

        let mut canonical = pieces
            .iter()
            .map(|piece| piece.canonicalize(algebra))
            .collect::<Result<Vec<_>>>()?;
        canonical.shuffle(&mut rng);

        info!(
            "Accepted {}x{} puzzle after {attempt} attempts ({solutions} symmetric solutions)",
            config.rows, config.cols
        );

        return Ok(Puzzle {
            rows: config.rows,
            cols: config.cols,
            pieces: canonical,
            solution: grid,
            solutions,
            attempts: attempt,
        });
    }

    Err(TilingError::GenerationExhausted {
        attempts: config.max_attempts,
    })
}

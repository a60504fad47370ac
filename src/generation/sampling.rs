//! Seeded random edge grids

use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::edge::algebra::{EdgeAlgebra, EdgeType, MAX_EDGE_TYPES};
use crate::io::configuration::MAX_GRID_DIMENSION;
use crate::io::error::{Result, invalid_parameter};
use crate::spatial::grid::EdgeGrid;

/// The `count` lowest edge codes, starting with the flat border code
///
/// Turns an edge-type count into the set form [`sample_grid`] expects.
pub fn first_edge_types(count: usize) -> Vec<EdgeType> {
    (0..count.min(MAX_EDGE_TYPES))
        .map(|code| code as EdgeType)
        .collect()
}

/// Draw a random `rows x cols` edge grid
///
/// Every edge is drawn uniformly from `edge_types[1..]`; the first entry is
/// reserved for the border. When `border` is set, the perimeter is
/// overwritten with that code afterwards.
///
/// # Errors
///
/// Returns `InvalidParameter` if the dimensions are out of range or fewer
/// than two edge types are given, and `UndefinedEdgeCode` if a code is
/// outside the tables
pub fn sample_grid<R: Rng>(
    rows: usize,
    cols: usize,
    edge_types: &[EdgeType],
    border: Option<EdgeType>,
    algebra: &EdgeAlgebra,
    rng: &mut R,
) -> Result<EdgeGrid> {
    for (parameter, value) in [("rows", rows), ("cols", cols)] {
        if value == 0 || value > MAX_GRID_DIMENSION {
            return Err(invalid_parameter(
                parameter,
                &value,
                &format!("must be between 1 and {MAX_GRID_DIMENSION}"),
            ));
        }
    }
    let Some((_, drawable)) = edge_types.split_first().filter(|(_, rest)| !rest.is_empty())
    else {
        return Err(invalid_parameter(
            "edge_types",
            &edge_types.len(),
            &"at least two edge types are required",
        ));
    };
    edge_types
        .iter()
        .chain(border.iter())
        .try_for_each(|&code| algebra.check(code))?;

    let mut draw = || {
        drawable
            .get(rng.random_range(0..drawable.len()))
            .copied()
            .unwrap_or_default()
    };

    let mut grid = EdgeGrid::filled(rows, cols, 0);
    grid.horizontal.iter_mut().for_each(|edge| *edge = draw());
    grid.vertical.iter_mut().for_each(|edge| *edge = draw());

    if let Some(code) = border {
        grid.set_border(code);
    }

    Ok(grid)
}

/// Draw a random edge grid from a fixed seed
///
/// # Errors
///
/// Same conditions as [`sample_grid`]
pub fn sample_grid_seeded(
    rows: usize,
    cols: usize,
    edge_types: &[EdgeType],
    border: Option<EdgeType>,
    algebra: &EdgeAlgebra,
    seed: u64,
) -> Result<EdgeGrid> {
    let mut rng = StdRng::seed_from_u64(seed);
    sample_grid(rows, cols, edge_types, border, algebra, &mut rng)
}

//! Search constants and runtime configuration defaults

use crate::edge::algebra::EdgeType;

/// Code of the flat edge pinned on every border by the `border` constraint
pub const FLAT_EDGE: EdgeType = 0;

/// Signed value marking an edge as unconstrained in puzzle files
pub const UNCONSTRAINED: i32 = -1;

// Default values for configurable parameters
/// Fixed seed for reproducible sampling
pub const DEFAULT_SEED: u64 = 42;

/// Default number of edge types drawn from when sampling puzzles
pub const DEFAULT_EDGE_TYPES: usize = 5;

/// Default number of sampled grids before puzzle generation gives up
pub const DEFAULT_MAX_ATTEMPTS: usize = 10_000;

/// Default puzzle height
pub const DEFAULT_ROWS: usize = 4;

/// Default puzzle width
pub const DEFAULT_COLS: usize = 4;

// Safety limit to keep the acceptance mask and stack bounded
/// Maximum allowed grid dimension
pub const MAX_GRID_DIMENSION: usize = 64;

/// Number of whole-board symmetries of a square grid
pub const SQUARE_BOARD_SYMMETRIES: usize = 8;

/// Number of whole-board symmetries of a non-square grid
pub const RECTANGULAR_BOARD_SYMMETRIES: usize = 4;

// Progress display settings
/// Spinner refresh interval
pub const PROGRESS_TICK_MS: u64 = 100;

/// Solutions between two spinner message updates
pub const PROGRESS_UPDATE_EVERY: usize = 64;

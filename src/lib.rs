//! Exhaustive enumeration of edge-matching jigsaw tilings
//!
//! Pieces are four edge codes. They are reduced to canonical classes under
//! rotation and reflection, re-expanded into every distinct orientation, and
//! placed cell by cell by a backtracking solver that respects per-class piece
//! counts, neighbour compatibility, and pinned border edges.

#![forbid(unsafe_code)]

/// Backtracking solver and the tables it consumes
pub mod algorithm;
/// Edge codes with their opposite and flip involutions
pub mod edge;
/// Random grids and unique-solution puzzle generation
pub mod generation;
/// Input/output operations and error handling
pub mod io;
/// Pieces, their orientations, and shared-edge grids
pub mod spatial;

pub use io::error::{Result, TilingError};

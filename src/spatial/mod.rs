//! Pieces and grids
//!
//! This module contains spatial-related functionality including:
//! - Single pieces and their rotations and reflections
//! - Expansion of canonical classes into oriented variants
//! - Conversion between shared-edge grids and per-cell pieces

/// Shared-edge grids and the grid/piece codec
pub mod grid;
/// Four-edge pieces and the symmetry group acting on them
pub mod piece;
/// Distinct oriented variants of canonical classes
pub mod variants;

pub use grid::EdgeGrid;
pub use piece::Piece;

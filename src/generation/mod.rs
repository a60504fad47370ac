/// Unique-solution puzzle generation
pub mod puzzle;
/// Seeded random edge grids
pub mod sampling;

/// Fixed-size bitsets over variant indices
pub mod bitset;
/// Edge pins and the per-cell acceptance mask
pub mod constraints;
/// Canonical classes, variants, and compatibility tables for one search
pub mod problem;
/// Resumable backtracking enumeration
pub mod solver;

//! Edge codes and the involutions acting on them

/// Opposite/flip tables and their closure
pub mod algebra;
/// The default jigsaw connector vocabulary
pub mod vocabulary;

pub use algebra::{EdgeAlgebra, EdgeType};

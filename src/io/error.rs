//! Error types and context management for tiling operations

use std::fmt;
use std::path::{Path, PathBuf};

/// Main error type for all tiling operations
#[derive(Debug)]
pub enum TilingError {
    /// An array's dimensions disagree with the dimensions derived from other inputs
    ShapeMismatch {
        /// Name of the offending array
        array: &'static str,
        /// Shape implied by the other inputs
        expected: Vec<usize>,
        /// Shape actually provided
        found: Vec<usize>,
    },

    /// An edge code has no entry in the opposite/flip tables
    UndefinedEdgeCode {
        /// The undefined code
        code: usize,
        /// Number of codes the tables define
        defined: usize,
    },

    /// Piece set cannot tile the grid, or adjacent pieces do not mate
    ///
    /// Raised when:
    /// - The number of pieces differs from `rows * cols`
    /// - Two neighbouring pieces fail the opposite-edge identity
    InconsistentPieceSet {
        /// Description of the inconsistency
        reason: String,
    },

    /// Opposite/flip tables are malformed
    InvalidEdgeTable {
        /// Which table is malformed
        table: &'static str,
        /// Explanation of the defect
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Puzzle or solution JSON could not be read or written
    Format {
        /// Path of the document
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Puzzle generation ran out of attempts without a unique puzzle
    GenerationExhausted {
        /// Number of sampled grids that were rejected
        attempts: usize,
    },
}

impl fmt::Display for TilingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch {
                array,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Shape mismatch for '{array}': expected {expected:?}, found {found:?}"
                )
            }
            Self::UndefinedEdgeCode { code, defined } => {
                write!(
                    f,
                    "Edge code {code} is undefined (tables cover codes 0..{defined})"
                )
            }
            Self::InconsistentPieceSet { reason } => {
                write!(f, "Inconsistent piece set: {reason}")
            }
            Self::InvalidEdgeTable { table, reason } => {
                write!(f, "Invalid {table} table: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Format { path, source } => {
                write!(f, "Malformed JSON in '{}': {source}", path.display())
            }
            Self::GenerationExhausted { attempts } => {
                write!(
                    f,
                    "No puzzle with a unique solution found after {attempts} attempts"
                )
            }
        }
    }
}

impl std::error::Error for TilingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Format { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for tiling results
pub type Result<T> = std::result::Result<T, TilingError>;

/// Attaches a file path to errors raised by file and JSON operations
pub trait WithPath<T> {
    /// Record the path and operation on a failed I/O or JSON result
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path applied
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T>;
}

impl<T, E> WithPath<T> for std::result::Result<T, E>
where
    E: Into<TilingError>,
{
    fn with_path(self, path: &Path, operation: &'static str) -> Result<T> {
        self.map_err(|e| match e.into() {
            TilingError::FileSystem { source, .. } => TilingError::FileSystem {
                path: path.to_path_buf(),
                operation,
                source,
            },
            TilingError::Format { source, .. } => TilingError::Format {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })
    }
}

impl From<std::io::Error> for TilingError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for TilingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Format {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> TilingError {
    TilingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a shape mismatch error
pub fn shape_mismatch(array: &'static str, expected: &[usize], found: &[usize]) -> TilingError {
    TilingError::ShapeMismatch {
        array,
        expected: expected.to_vec(),
        found: found.to_vec(),
    }
}

/// Create an inconsistent piece set error
pub fn inconsistent(reason: &impl ToString) -> TilingError {
    TilingError::InconsistentPieceSet {
        reason: reason.to_string(),
    }
}

//! JSON puzzle files and line-delimited solution output

use std::fs;
use std::io::Write;
use std::path::Path;

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::algorithm::constraints::{Constraints, EdgePins};
use crate::algorithm::problem::Problem;
use crate::algorithm::solver::Tiling;
use crate::edge::algebra::{EdgeAlgebra, EdgeType};
use crate::generation::puzzle::Puzzle;
use crate::io::configuration::UNCONSTRAINED;
use crate::io::error::{Result, WithPath, invalid_parameter, shape_mismatch};
use crate::spatial::piece::Piece;

/// Keyword selecting the flat-border constraint
pub const BORDER_KEYWORD: &str = "border";

/// On-disk description of a puzzle
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleFile {
    /// Grid height
    pub rows: usize,
    /// Grid width
    pub cols: usize,
    /// Raw pieces, `rows * cols` of them, in any orientation
    pub pieces: Vec<Piece>,
    /// Placement restrictions; absent or `null` means none
    #[serde(default)]
    pub constraints: Option<ConstraintSpec>,
    /// Opposite table; the jigsaw vocabulary is used when both tables are absent
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opposite: Option<Vec<EdgeType>>,
    /// Flip table
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flip: Option<Vec<EdgeType>>,
}

/// Constraint section of a puzzle file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConstraintSpec {
    /// A named preset, currently only `"border"`
    Named(String),
    /// Signed pins per edge, negative values are free
    Explicit {
        /// `rows` lists of `cols + 1` values
        horizontal: Vec<Vec<i32>>,
        /// `rows + 1` lists of `cols` values
        vertical: Vec<Vec<i32>>,
    },
}

impl ConstraintSpec {
    /// Encode constraints for a puzzle file, `None` when nothing is pinned
    ///
    /// Explicit pins are written as signed arrays with free edges set to
    /// [`UNCONSTRAINED`].
    pub fn from_constraints(constraints: &Constraints) -> Option<Self> {
        match constraints {
            Constraints::None => None,
            Constraints::Border => Some(Self::Named(BORDER_KEYWORD.to_string())),
            Constraints::Explicit(pins) => {
                let (horizontal, vertical) = pins.to_signed(UNCONSTRAINED);
                Some(Self::Explicit {
                    horizontal: array_to_nested(&horizontal),
                    vertical: array_to_nested(&vertical),
                })
            }
        }
    }
}

impl PuzzleFile {
    /// Describe a puzzle over the jigsaw vocabulary
    pub fn new(rows: usize, cols: usize, pieces: Vec<Piece>, constraints: &Constraints) -> Self {
        Self {
            rows,
            cols,
            pieces,
            constraints: ConstraintSpec::from_constraints(constraints),
            opposite: None,
            flip: None,
        }
    }

    /// Describe a generated puzzle, constrained to a flat border
    pub fn from_puzzle(puzzle: &Puzzle) -> Self {
        Self::new(
            puzzle.rows,
            puzzle.cols,
            puzzle.pieces.clone(),
            &Constraints::Border,
        )
    }

    /// Edge tables declared by the file, or the jigsaw vocabulary
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if only one table is given and
    /// `InvalidEdgeTable` if the tables are malformed
    pub fn algebra(&self) -> Result<EdgeAlgebra> {
        match (&self.opposite, &self.flip) {
            (None, None) => EdgeAlgebra::jigsaw(),
            (Some(opposite), Some(flip)) => EdgeAlgebra::new(opposite.clone(), flip.clone()),
            (Some(_), None) => Err(invalid_parameter(
                "flip",
                &"missing",
                &"required when 'opposite' is given",
            )),
            (None, Some(_)) => Err(invalid_parameter(
                "opposite",
                &"missing",
                &"required when 'flip' is given",
            )),
        }
    }

    /// Decode the constraint section
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for an unknown preset name, `ShapeMismatch`
    /// for ragged pin arrays and `UndefinedEdgeCode` for out-of-range pins
    pub fn constraints(&self) -> Result<Constraints> {
        match &self.constraints {
            None => Ok(Constraints::None),
            Some(ConstraintSpec::Named(name)) if name == BORDER_KEYWORD => Ok(Constraints::Border),
            Some(ConstraintSpec::Named(name)) => Err(invalid_parameter(
                "constraints",
                name,
                &format!("only \"{BORDER_KEYWORD}\" is supported"),
            )),
            Some(ConstraintSpec::Explicit {
                horizontal,
                vertical,
            }) => {
                let horizontal = nested_to_array("horizontal constraints", horizontal)?;
                let vertical = nested_to_array("vertical constraints", vertical)?;
                Ok(Constraints::Explicit(EdgePins::from_signed(
                    &horizontal,
                    &vertical,
                )?))
            }
        }
    }

    /// Build the solver problem together with the tables it was built from
    ///
    /// # Errors
    ///
    /// Propagates table, constraint and preparation errors
    pub fn problem(&self) -> Result<(Problem, EdgeAlgebra)> {
        let algebra = self.algebra()?;
        let constraints = self.constraints()?;
        let problem = Problem::prepare(self.rows, self.cols, &self.pieces, &algebra, &constraints)?;
        Ok((problem, algebra))
    }
}

fn array_to_nested(array: &Array2<i32>) -> Vec<Vec<i32>> {
    array
        .rows()
        .into_iter()
        .map(|row| row.iter().copied().collect())
        .collect()
}

fn nested_to_array<T: Copy + Default>(name: &'static str, rows: &[Vec<T>]) -> Result<Array2<T>> {
    let width = rows.first().map_or(0, Vec::len);
    if let Some(row) = rows.iter().find(|row| row.len() != width) {
        return Err(shape_mismatch(name, &[rows.len(), width], &[rows.len(), row.len()]));
    }
    Ok(Array2::from_shape_fn((rows.len(), width), |(r, c)| {
        rows.get(r)
            .and_then(|row| row.get(c))
            .copied()
            .unwrap_or_default()
    }))
}

/// Read a puzzle file
///
/// # Errors
///
/// Returns `FileSystem` if the file cannot be read and `Format` if it is not
/// a valid puzzle document
pub fn read_puzzle(path: &Path) -> Result<PuzzleFile> {
    let text = fs::read_to_string(path).with_path(path, "read puzzle")?;
    serde_json::from_str(&text).with_path(path, "parse puzzle")
}

/// Write a puzzle file as pretty-printed JSON
///
/// # Errors
///
/// Returns `Format` or `FileSystem` if serialization or writing fails
pub fn write_puzzle(path: &Path, puzzle: &PuzzleFile) -> Result<()> {
    let mut text = serde_json::to_string_pretty(puzzle).with_path(path, "serialize puzzle")?;
    text.push('\n');
    fs::write(path, text).with_path(path, "write puzzle")
}

/// Streams tilings as one JSON array of rows per line
#[derive(Debug)]
pub struct SolutionWriter<W: Write> {
    writer: W,
    written: usize,
}

impl<W: Write> SolutionWriter<W> {
    /// Wrap an output stream
    pub const fn new(writer: W) -> Self {
        Self { writer, written: 0 }
    }

    /// Append one tiling
    ///
    /// # Errors
    ///
    /// Returns `Format` or `FileSystem` if serialization or writing fails
    pub fn write(&mut self, tiling: &Tiling) -> Result<()> {
        serde_json::to_writer(&mut self.writer, &tiling.to_rows())?;
        self.writer.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of tilings written so far
    pub const fn written(&self) -> usize {
        self.written
    }

    /// Flush and return the underlying stream
    ///
    /// # Errors
    ///
    /// Returns `FileSystem` if flushing fails
    pub fn finish(mut self) -> Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Parse line-delimited solutions back into piece grids
///
/// # Errors
///
/// Returns `Format` for malformed lines and `ShapeMismatch` for ragged rows
pub fn parse_solutions(text: &str) -> Result<Vec<Array2<Piece>>> {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            let rows: Vec<Vec<Piece>> = serde_json::from_str(line)?;
            nested_to_array("solution", &rows)
        })
        .collect()
}

//! Four-edge pieces and their rotation/reflection group
//!
//! A piece lists its edge codes counter-clockwise starting from the right
//! side: right, top, left, bottom. Each code is expressed from the piece's
//! own point of view. Rotation cyclically permutes the slots; reflection
//! reverses the slot order and mirrors every code through `flip`. Together
//! they generate a group of eight images, and the lexicographically smallest
//! image identifies the piece's symmetry class.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::edge::algebra::{EdgeAlgebra, EdgeType};
use crate::io::error::Result;

/// Slot holding the right edge
pub const RIGHT: usize = 0;
/// Slot holding the top edge
pub const TOP: usize = 1;
/// Slot holding the left edge
pub const LEFT: usize = 2;
/// Slot holding the bottom edge
pub const BOTTOM: usize = 3;

/// Number of images in a piece's symmetry orbit
pub const ORBIT_SIZE: usize = 8;

/// Ordered 4-tuple of edge codes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Piece([EdgeType; 4]);

impl Piece {
    /// Create a piece from its right, top, left and bottom codes
    pub const fn new(edges: [EdgeType; 4]) -> Self {
        Self(edges)
    }

    /// All four codes in slot order
    pub const fn edges(self) -> [EdgeType; 4] {
        self.0
    }

    /// Code on the right side
    pub const fn right(self) -> EdgeType {
        self.0[RIGHT]
    }

    /// Code on the top side
    pub const fn top(self) -> EdgeType {
        self.0[TOP]
    }

    /// Code on the left side
    pub const fn left(self) -> EdgeType {
        self.0[LEFT]
    }

    /// Code on the bottom side
    pub const fn bottom(self) -> EdgeType {
        self.0[BOTTOM]
    }

    /// Rotate a quarter turn clockwise
    #[must_use]
    pub const fn rotate_cw(self) -> Self {
        let [right, top, left, bottom] = self.0;
        Self([top, left, bottom, right])
    }

    /// Rotate a quarter turn counter-clockwise
    #[must_use]
    pub const fn rotate_ccw(self) -> Self {
        let [right, top, left, bottom] = self.0;
        Self([bottom, right, top, left])
    }

    /// Reverse the slot order and mirror each code
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if a slot is outside the flip table
    pub fn reflect(self, algebra: &EdgeAlgebra) -> Result<Self> {
        let [right, top, left, bottom] = self.0;
        Ok(Self([
            algebra.flip(bottom)?,
            algebra.flip(left)?,
            algebra.flip(top)?,
            algebra.flip(right)?,
        ]))
    }

    /// The eight images of this piece
    ///
    /// Ordered as the piece and its three further clockwise rotations,
    /// followed by its reflection and that reflection's three rotations.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if a slot is outside the flip table
    pub fn images(self, algebra: &EdgeAlgebra) -> Result<[Self; ORBIT_SIZE]> {
        let mut images = [self; ORBIT_SIZE];
        let (rotations, reflections) = images.split_at_mut(ORBIT_SIZE / 2);

        let mut cursor = self;
        for image in rotations {
            *image = cursor;
            cursor = cursor.rotate_cw();
        }

        cursor = self.reflect(algebra)?;
        for image in reflections {
            *image = cursor;
            cursor = cursor.rotate_cw();
        }

        Ok(images)
    }

    /// Representative of this piece's symmetry class
    ///
    /// Returns the lexicographically smallest of the eight images, so every
    /// image of a piece canonicalizes to the same representative.
    ///
    /// # Errors
    ///
    /// Returns `UndefinedEdgeCode` if a slot is outside the flip table
    pub fn canonicalize(self, algebra: &EdgeAlgebra) -> Result<Self> {
        let images = self.images(algebra)?;
        Ok(images.into_iter().min().unwrap_or(self))
    }
}

impl From<[EdgeType; 4]> for Piece {
    fn from(edges: [EdgeType; 4]) -> Self {
        Self(edges)
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [right, top, left, bottom] = self.0;
        write!(f, "[{right}, {top}, {left}, {bottom}]")
    }
}

//! Default jigsaw edge vocabulary
//!
//! Thirty-two connector shapes: a flat edge, five tab families in three sizes
//! with male and female variants, and an alternative flat edge. Opposite pairs
//! a male tab with its female counterpart; asymmetric (right/left) tabs mate
//! with the mirrored family. Flip mirrors right and left tabs into each other
//! and swaps the gender of twisted tabs.

use crate::edge::algebra::{EdgeAlgebra, EdgeType};
use crate::io::error::Result;

/// Tab family of a jigsaw edge
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabFamily {
    /// Tab centered on the edge
    Centered,
    /// Tab shifted towards the right end
    Right,
    /// Tab shifted towards the left end
    Left,
    /// Pair of tabs, symmetric
    Double,
    /// Pair of tabs with opposite genders
    Twisted,
}

/// Tab size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabSize {
    /// Large tab
    Big,
    /// Medium tab
    Medium,
    /// Small tab
    Small,
}

/// Decoded meaning of a default-vocabulary edge code
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeKind {
    /// Straight edge, used on the puzzle border
    Flat,
    /// Straight edge distinct from [`EdgeKind::Flat`]
    FlatAlternative,
    /// A tab or blank
    Tab {
        /// Tab family
        family: TabFamily,
        /// Tab size
        size: TabSize,
        /// Whether the tab protrudes (male) or is a blank (female)
        male: bool,
    },
}

/// Code of the flat edge
pub const FLAT: EdgeType = 0;
/// Code of the alternative flat edge
pub const FLAT_ALTERNATIVE: EdgeType = 31;
/// Number of codes in the default vocabulary
pub const JIGSAW_EDGE_TYPES: usize = 32;

const FAMILIES: [TabFamily; 5] = [
    TabFamily::Centered,
    TabFamily::Right,
    TabFamily::Left,
    TabFamily::Double,
    TabFamily::Twisted,
];
const SIZES: [TabSize; 3] = [TabSize::Big, TabSize::Medium, TabSize::Small];

impl EdgeKind {
    /// Decode a default-vocabulary code
    pub fn from_code(code: EdgeType) -> Option<Self> {
        match code {
            FLAT => Some(Self::Flat),
            FLAT_ALTERNATIVE => Some(Self::FlatAlternative),
            _ => {
                let index = (code - 1) as usize;
                let family = *FAMILIES.get(index / 6)?;
                let size = *SIZES.get((index % 6) / 2)?;
                Some(Self::Tab {
                    family,
                    size,
                    male: index.is_multiple_of(2),
                })
            }
        }
    }

    /// Encode back into a default-vocabulary code
    pub fn code(self) -> EdgeType {
        match self {
            Self::Flat => FLAT,
            Self::FlatAlternative => FLAT_ALTERNATIVE,
            Self::Tab { family, size, male } => {
                let family_index = FAMILIES.iter().position(|&f| f == family).unwrap_or(0);
                let size_index = SIZES.iter().position(|&s| s == size).unwrap_or(0);
                (1 + family_index * 6 + size_index * 2 + usize::from(!male)) as EdgeType
            }
        }
    }

    /// Kind that mates with this one across a shared edge
    pub const fn opposite(self) -> Self {
        match self {
            Self::Tab { family, size, male } => match family {
                TabFamily::Twisted => self,
                TabFamily::Right => Self::Tab {
                    family: TabFamily::Left,
                    size,
                    male: !male,
                },
                TabFamily::Left => Self::Tab {
                    family: TabFamily::Right,
                    size,
                    male: !male,
                },
                TabFamily::Centered | TabFamily::Double => Self::Tab {
                    family,
                    size,
                    male: !male,
                },
            },
            other => other,
        }
    }

    /// Mirror image of this kind
    pub const fn flip(self) -> Self {
        match self {
            Self::Tab { family, size, male } => match family {
                TabFamily::Right => Self::Tab {
                    family: TabFamily::Left,
                    size,
                    male,
                },
                TabFamily::Left => Self::Tab {
                    family: TabFamily::Right,
                    size,
                    male,
                },
                TabFamily::Twisted => Self::Tab {
                    family,
                    size,
                    male: !male,
                },
                TabFamily::Centered | TabFamily::Double => self,
            },
            other => other,
        }
    }

    /// Upper-case symbolic name, e.g. `RIGHT_BIG_MALE`
    pub fn name(self) -> String {
        match self {
            Self::Flat => "FLAT".to_string(),
            Self::FlatAlternative => "FLAT_ALTERNATIVE".to_string(),
            Self::Tab { family, size, male } => {
                let family = match family {
                    TabFamily::Centered => "CENTERED",
                    TabFamily::Right => "RIGHT",
                    TabFamily::Left => "LEFT",
                    TabFamily::Double => "DOUBLE",
                    TabFamily::Twisted => "TWISTED",
                };
                let size = match size {
                    TabSize::Big => "BIG",
                    TabSize::Medium => "MEDIUM",
                    TabSize::Small => "SMALL",
                };
                let gender = if male { "MALE" } else { "FEMALE" };
                format!("{family}_{size}_{gender}")
            }
        }
    }
}

impl EdgeAlgebra {
    /// The default 32-code jigsaw vocabulary
    ///
    /// # Errors
    ///
    /// Never fails in practice; the tables are validated like any other
    pub fn jigsaw() -> Result<Self> {
        let mut opposite = Vec::with_capacity(JIGSAW_EDGE_TYPES);
        let mut flip = Vec::with_capacity(JIGSAW_EDGE_TYPES);
        for code in 0..JIGSAW_EDGE_TYPES as EdgeType {
            let kind = EdgeKind::from_code(code).unwrap_or(EdgeKind::Flat);
            opposite.push(kind.opposite().code());
            flip.push(kind.flip().code());
        }
        Self::new(opposite, flip)
    }
}

//! Board shapes
//!
//! Each game version is identified by a short string and fixes the board
//! dimensions plus the set of hole cells that can never hold a letter.

use super::SolverError;
use std::fmt;
use std::str::FromStr;

/// A `(row, col)` board coordinate
pub type Cell = (usize, usize);

/// Holes for the cross-shaped 5x5 board
const CROSS_HOLES: &[Cell] = &[(2, 0), (0, 2), (4, 2), (2, 4)];

/// Holes for the ring-shaped 5x5 board
const RING_HOLES: &[Cell] = &[(0, 0), (0, 4), (2, 2), (4, 0), (4, 4)];

/// Supported board layouts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoardShape {
    /// Word Hunt 4x4
    Square4,
    /// Word Hunt 5x5
    Square5,
    /// Word Hunt 5x5 "X" board
    Cross,
    /// Word Hunt 5x5 "O" board
    Ring,
    /// Anagrams with six letters
    Anagram6,
    /// Anagrams with seven letters
    Anagram7,
}

impl BoardShape {
    /// Resolve a board-shape identifier
    ///
    /// # Errors
    /// Returns `SolverError::UnsupportedConfiguration` for unknown identifiers.
    /// The shape is never guessed.
    pub fn from_identifier(identifier: &str) -> Result<Self, SolverError> {
        match identifier {
            "4x4" => Ok(Self::Square4),
            "5x5" => Ok(Self::Square5),
            "X" => Ok(Self::Cross),
            "O" => Ok(Self::Ring),
            "ANAGRAM6" => Ok(Self::Anagram6),
            "ANAGRAM7" => Ok(Self::Anagram7),
            other => Err(SolverError::UnsupportedConfiguration(other.to_string())),
        }
    }

    /// The identifier this shape was parsed from
    #[must_use]
    pub const fn identifier(self) -> &'static str {
        match self {
            Self::Square4 => "4x4",
            Self::Square5 => "5x5",
            Self::Cross => "X",
            Self::Ring => "O",
            Self::Anagram6 => "ANAGRAM6",
            Self::Anagram7 => "ANAGRAM7",
        }
    }

    /// Number of rows on the board
    #[must_use]
    pub const fn rows(self) -> usize {
        match self {
            Self::Square4 => 4,
            Self::Square5 | Self::Cross | Self::Ring => 5,
            Self::Anagram6 | Self::Anagram7 => 1,
        }
    }

    /// Number of columns on the board
    #[must_use]
    pub const fn cols(self) -> usize {
        match self {
            Self::Square4 => 4,
            Self::Square5 | Self::Cross | Self::Ring => 5,
            Self::Anagram6 => 6,
            Self::Anagram7 => 7,
        }
    }

    /// Cells that are not part of the playing area
    #[must_use]
    pub const fn holes(self) -> &'static [Cell] {
        match self {
            Self::Cross => CROSS_HOLES,
            Self::Ring => RING_HOLES,
            _ => &[],
        }
    }

    /// Whether this is an anagram (single-row letter bag) shape
    #[must_use]
    pub const fn is_anagram(self) -> bool {
        matches!(self, Self::Anagram6 | Self::Anagram7)
    }
}

impl FromStr for BoardShape {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_identifier(s)
    }
}

impl fmt::Display for BoardShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("4x4", BoardShape::Square4, 4, 4)]
    #[case("5x5", BoardShape::Square5, 5, 5)]
    #[case("X", BoardShape::Cross, 5, 5)]
    #[case("O", BoardShape::Ring, 5, 5)]
    #[case("ANAGRAM6", BoardShape::Anagram6, 1, 6)]
    #[case("ANAGRAM7", BoardShape::Anagram7, 1, 7)]
    fn identifiers_resolve(
        #[case] id: &str,
        #[case] shape: BoardShape,
        #[case] rows: usize,
        #[case] cols: usize,
    ) {
        let parsed = BoardShape::from_identifier(id).unwrap();
        assert_eq!(parsed, shape);
        assert_eq!(parsed.rows(), rows);
        assert_eq!(parsed.cols(), cols);
        assert_eq!(parsed.to_string(), id);
    }

    #[test]
    fn unknown_identifier_is_rejected() {
        assert!(matches!(
            BoardShape::from_identifier("6x6"),
            Err(SolverError::UnsupportedConfiguration(id)) if id == "6x6"
        ));
        assert!("x".parse::<BoardShape>().is_err());
    }

    #[test]
    fn holes_per_shape() {
        assert!(BoardShape::Square4.holes().is_empty());
        assert_eq!(BoardShape::Cross.holes().len(), 4);
        assert!(BoardShape::Ring.holes().contains(&(2, 2)));
        assert!(BoardShape::Anagram7.is_anagram());
        assert!(!BoardShape::Ring.is_anagram());
    }
}

//! Word Bites tiles
//!
//! A block is an immutable value. Moving one produces a new block at the new
//! position; the old value simply stops describing the board.

use super::{Cell, SolverError};
use std::fmt;
use std::str::FromStr;

/// Shape of a block
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum BlockKind {
    /// One letter in one cell
    Single,
    /// Two letters side by side, primary cell on the left
    Horizontal,
    /// Two letters stacked, primary cell on top
    Vertical,
}

impl BlockKind {
    /// Number of letters (and cells) a block of this kind carries
    #[inline]
    #[must_use]
    pub const fn len(self) -> usize {
        match self {
            Self::Single => 1,
            Self::Horizontal | Self::Vertical => 2,
        }
    }

    /// Offset from the primary cell to the second cell
    #[inline]
    #[must_use]
    pub const fn second_offset(self) -> Option<(usize, usize)> {
        match self {
            Self::Single => None,
            Self::Horizontal => Some((0, 1)),
            Self::Vertical => Some((1, 0)),
        }
    }
}

/// A movable tile carrying one or two letters
///
/// Equality is structural: two blocks with the same kind, letters and
/// position are the same block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Block {
    kind: BlockKind,
    letters: [char; 2],
    position: Cell,
}

impl Block {
    /// Create a block, checking the letter count against the kind
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if a single block does not have
    /// exactly one letter or a double block does not have exactly two.
    pub fn new(kind: BlockKind, letters: &[char], position: Cell) -> Result<Self, SolverError> {
        match (kind, letters) {
            (BlockKind::Single, &[a]) => Ok(Self::single(a, position)),
            (BlockKind::Horizontal, &[a, b]) => Ok(Self::horizontal(a, b, position)),
            (BlockKind::Vertical, &[a, b]) => Ok(Self::vertical(a, b, position)),
            _ => Err(SolverError::invalid(format!(
                "{kind:?} block cannot carry {} letters",
                letters.len()
            ))),
        }
    }

    #[must_use]
    pub fn single(letter: char, position: Cell) -> Self {
        Self {
            kind: BlockKind::Single,
            letters: [normalise(letter), ' '],
            position,
        }
    }

    #[must_use]
    pub fn horizontal(first: char, second: char, position: Cell) -> Self {
        Self {
            kind: BlockKind::Horizontal,
            letters: [normalise(first), normalise(second)],
            position,
        }
    }

    #[must_use]
    pub fn vertical(first: char, second: char, position: Cell) -> Self {
        Self {
            kind: BlockKind::Vertical,
            letters: [normalise(first), normalise(second)],
            position,
        }
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> BlockKind {
        self.kind
    }

    /// Letters in reading order (left-to-right or top-to-bottom)
    #[inline]
    #[must_use]
    pub fn letters(&self) -> &[char] {
        &self.letters[..self.kind.len()]
    }

    /// Primary (top-left) cell
    #[inline]
    #[must_use]
    pub const fn position(&self) -> Cell {
        self.position
    }

    #[inline]
    #[must_use]
    pub const fn is_single(&self) -> bool {
        matches!(self.kind, BlockKind::Single)
    }

    /// Cells this block covers when its primary cell is at `position`
    ///
    /// Letters and cells line up index for index. A second cell past
    /// `usize::MAX` saturates, which no board contains.
    #[must_use]
    pub fn cells_at(&self, (row, col): Cell) -> Vec<Cell> {
        let mut cells = vec![(row, col)];
        if let Some((dr, dc)) = self.kind.second_offset() {
            cells.push((row.saturating_add(dr), col.saturating_add(dc)));
        }
        cells
    }

    /// Cells this block currently covers
    #[must_use]
    pub fn all_positions(&self) -> Vec<Cell> {
        self.cells_at(self.position)
    }

    /// The same block at a new primary position
    #[must_use]
    pub const fn moved_to(&self, position: Cell) -> Self {
        Self {
            kind: self.kind,
            letters: self.letters,
            position,
        }
    }
}

fn normalise(letter: char) -> char {
    letter.to_uppercase().next().unwrap_or(letter)
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.position;
        match self.kind {
            BlockKind::Single => write!(f, "{}@{row},{col}", self.letters[0]),
            BlockKind::Horizontal => {
                write!(f, "{}-{}@{row},{col}", self.letters[0], self.letters[1])
            }
            BlockKind::Vertical => write!(f, "{}|{}@{row},{col}", self.letters[0], self.letters[1]),
        }
    }
}

/// Parse `E@0,4`, `R-A@4,1` (horizontal) or `S|T@1,2` (vertical)
impl FromStr for Block {
    type Err = SolverError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || SolverError::invalid(format!("malformed block '{s}'"));

        let (letters, position) = s.split_once('@').ok_or_else(malformed)?;
        let (row, col) = position.split_once(',').ok_or_else(malformed)?;
        let position = (
            row.trim().parse().map_err(|_| malformed())?,
            col.trim().parse().map_err(|_| malformed())?,
        );

        let (kind, letters): (BlockKind, Vec<char>) =
            if let Some((a, b)) = letters.split_once('-') {
                (BlockKind::Horizontal, a.chars().chain(b.chars()).collect())
            } else if let Some((a, b)) = letters.split_once('|') {
                (BlockKind::Vertical, a.chars().chain(b.chars()).collect())
            } else {
                (BlockKind::Single, letters.chars().collect())
            };

        if !letters.iter().all(|ch| ch.is_alphabetic()) {
            return Err(malformed());
        }
        Self::new(kind, &letters, position)
    }
}

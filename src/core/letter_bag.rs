//! Letter bag for Anagrams boards

use super::{Grid, SolverError};
use rustc_hash::FxHashMap;
use std::fmt;

/// An unordered multiset of letters, keeping the on-screen tile order
///
/// Tile order matters only to the click layer, which needs to know which
/// tile to tap for each letter of a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LetterBag {
    tiles: Vec<char>,
}

impl LetterBag {
    /// Create a bag from a string of letters
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the string is empty or contains
    /// anything other than letters.
    pub fn new(letters: &str) -> Result<Self, SolverError> {
        if letters.is_empty() {
            return Err(SolverError::invalid("letter bag is empty"));
        }
        let tiles = letters
            .chars()
            .map(|ch| {
                if ch.is_alphabetic() {
                    ch.to_uppercase()
                        .next()
                        .ok_or_else(|| SolverError::invalid(format!("'{ch}' has no uppercase")))
                } else {
                    Err(SolverError::invalid(format!("'{ch}' is not a letter")))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { tiles })
    }

    /// Take the letters of a single-row anagram board
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the grid has more than one row
    /// or contains holes.
    pub fn from_grid(grid: &Grid) -> Result<Self, SolverError> {
        if grid.rows() != 1 {
            return Err(SolverError::invalid(format!(
                "anagram board must be a single row, got {} rows",
                grid.rows()
            )));
        }
        let tiles = (0..grid.cols())
            .map(|col| grid.letter((0, col)))
            .collect::<Option<Vec<_>>>()
            .ok_or_else(|| SolverError::invalid("anagram board has an empty tile"))?;
        Ok(Self { tiles })
    }

    /// Tiles in on-screen order
    #[inline]
    #[must_use]
    pub fn tiles(&self) -> &[char] {
        &self.tiles
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Count of each letter in the bag
    #[must_use]
    pub fn counts(&self) -> FxHashMap<char, usize> {
        letter_counts(self.tiles.iter().copied())
    }

    /// Pick a tile index for each letter of `word`, leftmost unused tile first
    ///
    /// Returns `None` if the bag cannot supply the word.
    #[must_use]
    pub fn tiles_for(&self, word: &str) -> Option<Vec<usize>> {
        let mut used = vec![false; self.tiles.len()];
        word.chars()
            .map(|ch| {
                let idx = self
                    .tiles
                    .iter()
                    .enumerate()
                    .position(|(i, &tile)| tile == ch && !used[i])?;
                used[idx] = true;
                Some(idx)
            })
            .collect()
    }
}

/// Count letters in a character stream
pub(crate) fn letter_counts(letters: impl Iterator<Item = char>) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for ch in letters {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

impl fmt::Display for LetterBag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.tiles.iter().try_for_each(|ch| write!(f, "{ch}"))
    }
}

//! Main solver interface

use super::anagram::{AnagramWord, anagram_words};
use super::bites::{WordBitesMove, find_word_bites_words};
use super::grid::{GridWord, WordPaths, find_words, unique_words};
use super::ordering::optimize_order;
use crate::config::MIN_WORD_LENGTH;
use crate::core::{BlockBoard, Grid, LetterBag};
use crate::wordlists::Dictionary;

/// Word game solver
///
/// Binds a dictionary and a minimum word length, and hands back results in
/// play order.
pub struct Solver<'a> {
    dictionary: &'a Dictionary,
    min_length: usize,
}

impl<'a> Solver<'a> {
    /// Create a solver with the default minimum word length
    #[must_use]
    pub const fn new(dictionary: &'a Dictionary) -> Self {
        Self {
            dictionary,
            min_length: MIN_WORD_LENGTH,
        }
    }

    /// Override the minimum word length
    #[must_use]
    pub const fn with_min_length(mut self, min_length: usize) -> Self {
        self.min_length = min_length;
        self
    }

    #[must_use]
    pub const fn min_length(&self) -> usize {
        self.min_length
    }

    /// Lazily trace words on a grid, duplicates included
    #[must_use]
    pub fn trace(&self, grid: &'a Grid) -> WordPaths<'a> {
        find_words(grid, self.dictionary, self.min_length)
    }

    /// Distinct grid words in play order
    #[must_use]
    pub fn grid(&self, grid: &Grid) -> Vec<GridWord> {
        optimize_order(unique_words(grid, self.dictionary, self.min_length))
    }

    /// Anagram words in play order
    #[must_use]
    pub fn anagram(&self, bag: &LetterBag) -> Vec<AnagramWord> {
        optimize_order(anagram_words(bag, self.dictionary, self.min_length))
    }

    /// Word Bites moves in play order
    #[must_use]
    pub fn word_bites(&self, board: &BlockBoard) -> Vec<WordBitesMove> {
        optimize_order(find_word_bites_words(board, self.dictionary, self.min_length))
    }
}

//! Anagrams solving
//!
//! A straight filter over the dictionary: a word is playable when the bag
//! holds at least as many of each of its letters.

use crate::core::{LetterBag, letter_counts, score};
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use std::collections::BTreeMap;

/// A word spelled from the letter bag
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnagramWord {
    pub word: String,
    /// Tile index tapped for each letter, in spelling order
    pub tiles: Vec<usize>,
    pub score: u32,
}

/// Find every dictionary word the bag can spell
///
/// Maps each word to the bag tiles used to spell it. Shorter words are
/// allowed: any multiset subset of the bag counts.
///
/// # Examples
/// ```
/// use word_game_solver::core::LetterBag;
/// use word_game_solver::solver::find_anagrams;
/// use word_game_solver::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["TEN", "SEE", "LISTEN"]);
/// let bag = LetterBag::new("LISTEN").unwrap();
///
/// let found = find_anagrams(&bag, &dictionary, 3);
/// assert!(found.contains_key("TEN"));
/// assert!(found.contains_key("LISTEN"));
/// assert!(!found.contains_key("SEE"));
/// ```
#[must_use]
pub fn find_anagrams(
    bag: &LetterBag,
    dictionary: &Dictionary,
    min_length: usize,
) -> BTreeMap<String, Vec<usize>> {
    let available = bag.counts();
    let max_length = bag.len();

    let found: BTreeMap<String, Vec<usize>> = dictionary
        .words()
        .par_iter()
        .filter(|word| {
            let length = word.chars().count();
            length >= min_length && length <= max_length
        })
        .filter(|word| {
            letter_counts(word.chars())
                .iter()
                .all(|(letter, &needed)| available.get(letter).is_some_and(|&have| have >= needed))
        })
        .filter_map(|word| bag.tiles_for(word).map(|tiles| (word.clone(), tiles)))
        .collect();

    log::debug!("bag {bag} spells {} words", found.len());
    found
}

/// Anagram results as scored words, alphabetical
#[must_use]
pub fn anagram_words(
    bag: &LetterBag,
    dictionary: &Dictionary,
    min_length: usize,
) -> Vec<AnagramWord> {
    find_anagrams(bag, dictionary, min_length)
        .into_iter()
        .map(|(word, tiles)| AnagramWord {
            score: score(&word),
            word,
            tiles,
        })
        .collect()
}

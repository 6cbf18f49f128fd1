//! Dictionary with prefix index
//!
//! Membership and prefix tests drive every solver. The prefix index is what
//! lets the grid search abandon a path as soon as no word can start with it.

use super::embedded::SAMPLE;
use super::loader::read_word_list;
use crate::core::SolverError;
use rustc_hash::FxHashSet;
use std::borrow::Cow;
use std::path::Path;

/// An immutable set of uppercase words plus all their proper prefixes
///
/// Build it once and pass it by reference to each solver.
#[derive(Debug, Clone, Default)]
pub struct Dictionary {
    words: Vec<String>,
    lookup: FxHashSet<String>,
    prefixes: FxHashSet<String>,
}

impl Dictionary {
    /// Load a newline-separated word list
    ///
    /// # Errors
    /// Returns `SolverError::MissingResource` if the file cannot be read.
    ///
    /// # Examples
    /// ```no_run
    /// use word_game_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::load("word_lists/collins-word-list-2019-filtered.txt").unwrap();
    /// assert!(dictionary.contains("cat"));
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SolverError> {
        let path = path.as_ref();
        let words = read_word_list(path)?;
        let dictionary = Self::from_words(words);
        log::debug!(
            "loaded {} words ({} prefixes) from {}",
            dictionary.len(),
            dictionary.prefixes.len(),
            path.display()
        );
        Ok(dictionary)
    }

    /// Dictionary over the embedded sample word list
    #[must_use]
    pub fn builtin() -> Self {
        Self::from_words(SAMPLE.iter().copied())
    }

    /// Build a dictionary from any list of words
    ///
    /// Words are trimmed and uppercased; blanks and words containing
    /// non-letters are skipped. The first occurrence fixes a word's
    /// position in iteration order.
    ///
    /// # Examples
    /// ```
    /// use word_game_solver::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_words(["cat", "cater"]);
    /// assert!(dictionary.contains("CAT"));
    /// assert!(dictionary.is_viable_extension("CATE"));
    /// assert!(!dictionary.is_viable_extension("CATS"));
    /// ```
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut dictionary = Self::default();
        let mut skipped = 0usize;

        for raw in words {
            let word = raw.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            if !word.chars().all(char::is_alphabetic) {
                skipped += 1;
                continue;
            }
            let word = word.to_uppercase();
            if dictionary.lookup.contains(&word) {
                continue;
            }

            // Every proper, non-empty prefix
            for (idx, _) in word.char_indices().skip(1) {
                dictionary.prefixes.insert(word[..idx].to_string());
            }
            dictionary.lookup.insert(word.clone());
            dictionary.words.push(word);
        }

        if skipped > 0 {
            log::warn!("skipped {skipped} word list entries containing non-letters");
        }
        dictionary
    }

    /// Exact, case-insensitive membership
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.lookup.contains(normalise(word).as_ref())
    }

    /// Whether `prefix` is a word or the start of a longer word
    #[must_use]
    pub fn is_viable_extension(&self, prefix: &str) -> bool {
        let prefix = normalise(prefix);
        self.prefixes.contains(prefix.as_ref()) || self.lookup.contains(prefix.as_ref())
    }

    /// Words in load order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn normalise(word: &str) -> Cow<'_, str> {
    if word.chars().any(char::is_lowercase) {
        Cow::Owned(word.to_uppercase())
    } else {
        Cow::Borrowed(word)
    }
}

//! Word list loading and filtering
//!
//! Word lists are plain text, one word per line, case-insensitive.

use crate::config::{MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::core::SolverError;
use std::fs;
use std::path::Path;

/// Read a word list file into trimmed, non-empty lines
///
/// # Errors
///
/// Returns `SolverError::MissingResource` if the file cannot be read.
///
/// # Examples
/// ```no_run
/// use word_game_solver::wordlists::loader::read_word_list;
///
/// let words = read_word_list("word_lists/collins-word-list-2019.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn read_word_list<P: AsRef<Path>>(path: P) -> Result<Vec<String>, SolverError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| SolverError::MissingResource {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

/// Counts reported by a filtering pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterStats {
    pub original: usize,
    pub too_short: usize,
    pub too_long: usize,
    pub kept: usize,
}

impl FilterStats {
    #[must_use]
    pub const fn removed(&self) -> usize {
        self.too_short + self.too_long
    }
}

/// Keep only words the games can accept (3 to 16 letters)
#[must_use]
pub fn filter_words(words: &[String]) -> (Vec<String>, FilterStats) {
    let mut stats = FilterStats {
        original: words.len(),
        ..FilterStats::default()
    };

    let kept: Vec<String> = words
        .iter()
        .filter(|word| {
            let length = word.chars().count();
            if length < MIN_WORD_LENGTH {
                stats.too_short += 1;
                false
            } else if length > MAX_WORD_LENGTH {
                stats.too_long += 1;
                false
            } else {
                true
            }
        })
        .cloned()
        .collect();

    stats.kept = kept.len();
    (kept, stats)
}

/// Filter a raw word list file into a playable one
///
/// # Errors
///
/// Returns `SolverError::MissingResource` if the input cannot be read and
/// `SolverError::WriteFailed` if the output cannot be written.
pub fn filter_word_list<P, Q>(input: P, output: Q) -> Result<FilterStats, SolverError>
where
    P: AsRef<Path>,
    Q: AsRef<Path>,
{
    let words = read_word_list(input)?;
    let (kept, stats) = filter_words(&words);

    let output = output.as_ref();
    fs::write(output, kept.join("\n")).map_err(|source| SolverError::WriteFailed {
        path: output.to_path_buf(),
        source,
    })?;

    log::info!(
        "filtered word list: kept {} of {} words",
        stats.kept,
        stats.original
    );
    Ok(stats)
}

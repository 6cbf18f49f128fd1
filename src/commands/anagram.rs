//! Anagrams command

use crate::core::{BoardShape, Grid, LetterBag, SolverError, total_score};
use crate::solver::{AnagramWord, Solver};

/// Result of solving an anagram board
pub struct AnagramReport {
    pub bag: LetterBag,
    /// Words in play order
    pub words: Vec<AnagramWord>,
    pub total_score: u32,
}

/// Solve an anagram board
///
/// With a shape, the letters must fill exactly one row of that shape.
///
/// # Errors
///
/// Returns an error if:
/// - The shape is a grid shape rather than a single row
/// - The letters do not fit the shape
/// - The letters contain anything other than letters
pub fn solve_anagram(
    letters: &str,
    shape: Option<BoardShape>,
    solver: &Solver<'_>,
) -> Result<AnagramReport, SolverError> {
    let bag = match shape {
        Some(shape) if !shape.is_anagram() => {
            return Err(SolverError::invalid(format!(
                "{shape} is not a single-row anagram board"
            )));
        }
        Some(shape) => LetterBag::from_grid(&Grid::with_shape(&[letters], shape)?)?,
        None => LetterBag::new(letters)?,
    };

    let words = solver.anagram(&bag);
    let total_score = total_score(words.iter().map(|w| w.word.as_str()));

    log::info!("anagram {bag}: {} words, {total_score} points", words.len());
    Ok(AnagramReport {
        bag,
        words,
        total_score,
    })
}

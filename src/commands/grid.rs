//! Word Hunt command
//!
//! Solves a letter grid and returns the words in play order.

use crate::core::{BoardShape, Grid, SolverError, total_score};
use crate::solver::{GridWord, Solver};

/// Result of solving a grid
pub struct GridReport {
    pub shape: BoardShape,
    pub grid: Grid,
    /// Distinct words in play order
    pub words: Vec<GridWord>,
    pub total_score: u32,
}

/// Solve a Word Hunt board given as one string per row
///
/// # Errors
///
/// Returns an error if:
/// - The shape is a single-row anagram shape
/// - The rows do not match the shape's size
/// - A cell holds something other than a letter or a hole
pub fn solve_grid<S: AsRef<str>>(
    rows: &[S],
    shape: BoardShape,
    solver: &Solver<'_>,
) -> Result<GridReport, SolverError> {
    if shape.is_anagram() {
        return Err(SolverError::invalid(format!(
            "{shape} is an anagram board, not a grid"
        )));
    }

    let grid = Grid::with_shape(rows, shape)?;
    let words = solver.grid(&grid);
    let total_score = total_score(words.iter().map(|w| w.word.as_str()));

    log::info!("{shape} grid: {} words, {total_score} points", words.len());
    Ok(GridReport {
        shape,
        grid,
        words,
        total_score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::Dictionary;

    #[test]
    fn solves_square_board() {
        let dictionary = Dictionary::from_words(["TEN", "NET", "TENS", "CAT"]);
        let solver = Solver::new(&dictionary);
        let report = solve_grid(
            &["TENX", "XSXX", "XXXX", "XXXX"],
            BoardShape::Square4,
            &solver,
        )
        .unwrap();

        let words: Vec<&str> = report.words.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(words.len(), 3);
        assert!(!words.contains(&"CAT"));
        assert_eq!(report.total_score, 100 + 100 + 400);
    }

    #[test]
    fn rejects_wrong_size() {
        let dictionary = Dictionary::from_words(["TEN"]);
        let solver = Solver::new(&dictionary);
        let result = solve_grid(&["TEN", "XSX", "XXX"], BoardShape::Square4, &solver);
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    }

    #[test]
    fn rejects_anagram_shape() {
        let dictionary = Dictionary::from_words(["TEN"]);
        let solver = Solver::new(&dictionary);
        let result = solve_grid(&["LISTEN"], BoardShape::Anagram6, &solver);
        assert!(matches!(result, Err(SolverError::InvalidInput(_))));
    }
}

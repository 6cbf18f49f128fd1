//! Word Hunt grid search
//!
//! Depth-first search from every playable cell over the 8-neighbour graph,
//! pruned by the dictionary's prefix index. Results are produced lazily so
//! the caller can start drawing words before the search finishes.

use crate::config::MAX_PATH_LENGTH;
use crate::core::{Cell, Grid, score};
use crate::wordlists::Dictionary;
use rustc_hash::FxHashSet;

/// A word traced on the grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridWord {
    pub word: String,
    pub path: Vec<Cell>,
    pub score: u32,
}

/// One level of the explicit DFS stack
struct Frame {
    cell: Cell,
    /// Next neighbour direction to try; `Grid::direction_count()` when done
    next_dir: usize,
}

/// Lazy iterator over every `(word, path)` on a grid
///
/// The same word may appear more than once through different paths; see
/// [`unique_words`] for the deduplicated form.
pub struct WordPaths<'a> {
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    min_length: usize,
    starts: Vec<Cell>,
    next_start: usize,
    stack: Vec<Frame>,
    path: Vec<Cell>,
    word: String,
    visited: Vec<bool>,
}

impl<'a> WordPaths<'a> {
    fn new(grid: &'a Grid, dictionary: &'a Dictionary, min_length: usize) -> Self {
        Self {
            grid,
            dictionary,
            min_length,
            starts: grid.cells().collect(),
            next_start: 0,
            stack: Vec::with_capacity(MAX_PATH_LENGTH),
            path: Vec::with_capacity(MAX_PATH_LENGTH),
            word: String::with_capacity(MAX_PATH_LENGTH),
            visited: vec![false; grid.rows() * grid.cols()],
        }
    }

    /// Step onto `cell`; returns the word if the new path spells one
    fn enter(&mut self, cell: Cell) -> Option<(String, Vec<Cell>)> {
        let letter = self.grid.letter(cell)?;
        self.visited[self.grid.index(cell)] = true;
        self.path.push(cell);
        self.word.push(letter);

        let viable = self.dictionary.is_viable_extension(&self.word);
        let exhausted = !viable || self.path.len() >= MAX_PATH_LENGTH;
        self.stack.push(Frame {
            cell,
            next_dir: if exhausted { Grid::direction_count() } else { 0 },
        });

        if viable
            && self.path.len() >= self.min_length
            && self.dictionary.contains(&self.word)
        {
            Some((self.word.clone(), self.path.clone()))
        } else {
            None
        }
    }

    /// Step back off the top cell
    fn leave(&mut self) {
        if let Some(frame) = self.stack.pop() {
            self.visited[self.grid.index(frame.cell)] = false;
            self.path.pop();
            self.word.pop();
        }
    }
}

impl Iterator for WordPaths<'_> {
    type Item = (String, Vec<Cell>);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let Some(top) = self.stack.last_mut() else {
                let start = *self.starts.get(self.next_start)?;
                self.next_start += 1;
                if let Some(found) = self.enter(start) {
                    return Some(found);
                }
                continue;
            };

            if top.next_dir >= Grid::direction_count() {
                self.leave();
                continue;
            }

            let dir = top.next_dir;
            top.next_dir += 1;
            let from = top.cell;

            if let Some(next) = self.grid.neighbor(from, dir) {
                if !self.visited[self.grid.index(next)] {
                    if let Some(found) = self.enter(next) {
                        return Some(found);
                    }
                }
            }
        }
    }
}

/// Find every dictionary word that can be traced on the grid
///
/// Paths never revisit a cell and each step moves to one of the eight
/// surrounding cells. Calling again restarts the search from scratch.
///
/// # Examples
/// ```
/// use word_game_solver::core::Grid;
/// use word_game_solver::solver::find_words;
/// use word_game_solver::wordlists::Dictionary;
///
/// let dictionary = Dictionary::from_words(["CAT"]);
/// let grid = Grid::new(&["CAT", "XXX", "XXX"]).unwrap();
///
/// let found: Vec<_> = find_words(&grid, &dictionary, 3).collect();
/// assert_eq!(found, vec![("CAT".to_string(), vec![(0, 0), (0, 1), (0, 2)])]);
/// ```
#[must_use]
pub fn find_words<'a>(
    grid: &'a Grid,
    dictionary: &'a Dictionary,
    min_length: usize,
) -> WordPaths<'a> {
    WordPaths::new(grid, dictionary, min_length)
}

/// One entry per distinct word, keeping the first path found
#[must_use]
pub fn unique_words(grid: &Grid, dictionary: &Dictionary, min_length: usize) -> Vec<GridWord> {
    let mut seen = FxHashSet::default();
    let words: Vec<GridWord> = find_words(grid, dictionary, min_length)
        .filter(|(word, _)| seen.insert(word.clone()))
        .map(|(word, path)| GridWord {
            score: score(&word),
            word,
            path,
        })
        .collect();

    log::debug!("grid search found {} distinct words", words.len());
    words
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::BoardShape;

    fn is_adjacent(a: Cell, b: Cell) -> bool {
        a != b && a.0.abs_diff(b.0) <= 1 && a.1.abs_diff(b.1) <= 1
    }

    #[test]
    fn straight_line_word_is_found() {
        let dictionary = Dictionary::from_words(["CAT"]);
        let grid = Grid::new(&["CAT", "XXX", "XXX"]).unwrap();
        let found: Vec<_> = find_words(&grid, &dictionary, 3).collect();
        assert_eq!(found, vec![("CAT".to_string(), vec![(0, 0), (0, 1), (0, 2)])]);
    }

    #[test]
    fn diagonal_and_bent_paths() {
        let dictionary = Dictionary::from_words(["CAT", "ACT", "TAC"]);
        let grid = Grid::new(&["CX", "AT"]).unwrap();
        let words: FxHashSet<String> = find_words(&grid, &dictionary, 3).map(|(w, _)| w).collect();
        assert!(words.contains("CAT"));
        assert!(words.contains("ACT"));
        assert!(words.contains("TAC"));
    }

    #[test]
    fn paths_are_simple_and_connected() {
        let dictionary = Dictionary::builtin();
        let grid = Grid::new(&["STEN", "LIAR", "ETON", "CASH"]).unwrap();

        let mut count = 0;
        for (word, path) in find_words(&grid, &dictionary, 3) {
            count += 1;
            assert_eq!(word.chars().count(), path.len());
            let unique: FxHashSet<&Cell> = path.iter().collect();
            assert_eq!(unique.len(), path.len(), "{word} revisits a cell");
            assert!(path.windows(2).all(|w| is_adjacent(w[0], w[1])), "{word}");
            let spelled: String = path.iter().filter_map(|&c| grid.letter(c)).collect();
            assert_eq!(spelled, word);
            assert!(dictionary.contains(&word));
        }
        assert!(count > 0);
    }

    #[test]
    fn cells_are_not_reused() {
        // "ANNA" would need the single N twice
        let dictionary = Dictionary::from_words(["ANNA", "ANA"]);
        let grid = Grid::new(&["ANA"]).unwrap();
        let words: Vec<String> = find_words(&grid, &dictionary, 3).map(|(w, _)| w).collect();
        assert_eq!(words, vec!["ANA".to_string(), "ANA".to_string()]);
    }

    #[test]
    fn min_length_filters_short_words() {
        let dictionary = Dictionary::from_words(["AT", "CAT"]);
        let grid = Grid::new(&["CAT"]).unwrap();
        let words: Vec<String> = find_words(&grid, &dictionary, 3).map(|(w, _)| w).collect();
        assert_eq!(words, vec!["CAT".to_string()]);
        let short: Vec<String> = find_words(&grid, &dictionary, 2).map(|(w, _)| w).collect();
        assert_eq!(short, vec!["CAT".to_string(), "AT".to_string()]);
    }

    #[test]
    fn holes_break_paths() {
        let dictionary = Dictionary::from_words(["CAT"]);
        let grid = Grid::new(&["C.T", ".A."]).unwrap();
        assert_eq!(find_words(&grid, &dictionary, 3).count(), 1);

        let blocked = Grid::new(&["C.T", "..A"]).unwrap();
        assert_eq!(find_words(&blocked, &dictionary, 3).count(), 0);
    }

    #[test]
    fn shape_holes_are_skipped() {
        // The X board blanks (0,2); the letters there are ignored
        let dictionary = Dictionary::from_words(["ABC"]);
        let rows = ["ABCDE", "FGHIJ", "KLMNO", "PQRST", "UVWXY"];
        let square = Grid::with_shape(&rows, BoardShape::Square5).unwrap();
        let cross = Grid::with_shape(&rows, BoardShape::Cross).unwrap();
        assert_eq!(find_words(&square, &dictionary, 3).count(), 1);
        assert_eq!(find_words(&cross, &dictionary, 3).count(), 0);
    }

    #[test]
    fn search_is_restartable() {
        let dictionary = Dictionary::from_words(["TEN", "NET"]);
        let grid = Grid::new(&["TEN"]).unwrap();
        let first: Vec<_> = find_words(&grid, &dictionary, 3).collect();
        let second: Vec<_> = find_words(&grid, &dictionary, 3).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 2);
    }

    #[test]
    fn path_length_is_capped() {
        let row = "A".repeat(MAX_PATH_LENGTH + 1);
        let grid = Grid::new(&[row.as_str()]).unwrap();

        let too_long = Dictionary::from_words([row.as_str()]);
        assert_eq!(find_words(&grid, &too_long, 3).next(), None);

        let longest = "A".repeat(MAX_PATH_LENGTH);
        let fits = Dictionary::from_words([longest.as_str()]);
        assert!(find_words(&grid, &fits, 3).next().is_some());
    }

    #[test]
    fn unique_words_keep_first_path() {
        let dictionary = Dictionary::from_words(["ANA"]);
        let grid = Grid::new(&["ANA"]).unwrap();
        let words = unique_words(&grid, &dictionary, 3);
        assert_eq!(words.len(), 1);
        assert_eq!(words[0].path, vec![(0, 0), (0, 1), (0, 2)]);
        assert_eq!(words[0].score, 100);
    }
}

//! Solver constants
//!
//! Defaults shared by the library and the command-line interface.

/// Default location of the filtered word list
pub const WORD_LIST_PATH: &str = "word_lists/collins-word-list-2019-filtered.txt";

/// `--wordlist` value selecting the embedded sample list
pub const BUILTIN_WORD_LIST: &str = "builtin";

/// Shortest word any game accepts
pub const MIN_WORD_LENGTH: usize = 3;

/// Longest word kept in a filtered word list
pub const MAX_WORD_LENGTH: usize = 16;

/// Longest path the grid search will follow
pub const MAX_PATH_LENGTH: usize = 15;

/// Score gap tolerated when pulling related words forward in the play order
pub const SCORE_THRESHOLD: u32 = 400;

/// Word Bites board rows
pub const BITES_ROWS: usize = 8;

/// Word Bites board columns
pub const BITES_COLS: usize = 9;

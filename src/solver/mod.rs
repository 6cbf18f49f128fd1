//! Word game solving algorithms
//!
//! One search per game mode, plus the play-order optimizer shared by all.

pub mod anagram;
pub mod bites;
mod engine;
pub mod grid;
pub mod ordering;

pub use anagram::{AnagramWord, anagram_words, find_anagrams};
pub use bites::{
    BlockMove, Direction, Placement, WordBitesMove, apply_moves, find_word_bites_words,
    plan_first_placement, plan_word,
};
pub use engine::Solver;
pub use grid::{GridWord, WordPaths, find_words, unique_words};
pub use ordering::{Scored, are_words_related, optimize_order};

//! Command implementations

pub mod anagram;
pub mod bites;
pub mod filter;
pub mod grid;

pub use anagram::{AnagramReport, solve_anagram};
pub use bites::{BitesConfig, BitesReport, solve_bites};
pub use filter::{FilterReport, run_filter};
pub use grid::{GridReport, solve_grid};

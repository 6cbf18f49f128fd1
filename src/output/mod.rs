//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_anagram_report, print_bites_report, print_filter_report, print_grid_report};

//! Word Game Solver
//!
//! Finds every playable word on Word Hunt grids, Anagrams letter bags and
//! Word Bites block boards, and orders them for play.
//!
//! # Quick Start
//!
//! ```rust
//! use word_game_solver::core::Grid;
//! use word_game_solver::solver::Solver;
//! use word_game_solver::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::from_words(["TEN", "NET", "TENS"]);
//! let grid = Grid::new(&["TEN", "XSX"]).unwrap();
//!
//! let words = Solver::new(&dictionary).grid(&grid);
//! assert_eq!(words.len(), 3);
//! ```

// Shared constants
pub mod config;

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

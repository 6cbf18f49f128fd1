//! Core domain types for the word games
//!
//! Boards, tiles, scoring and the shared error type. Everything here is pure
//! and free of I/O.

mod block;
mod board;
mod error;
mod grid;
mod letter_bag;
mod scoring;
mod shape;

pub use block::{Block, BlockKind};
pub use board::BlockBoard;
pub use error::SolverError;
pub use grid::{Grid, HOLE_MARKER};
pub use letter_bag::LetterBag;
pub(crate) use letter_bag::letter_counts;
pub use scoring::{score, score_for_length, total_score};
pub use shape::{BoardShape, Cell};

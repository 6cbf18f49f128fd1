//! Word lists and the dictionary index
//!
//! Provides the `Dictionary` every solver consults, file loading and
//! filtering, and a small sample list compiled into the binary.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{SAMPLE, SAMPLE_COUNT};

//! Word list filtering command

use crate::core::SolverError;
use crate::wordlists::loader::{FilterStats, filter_word_list};
use std::path::{Path, PathBuf};

/// Result of filtering a word list
pub struct FilterReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub stats: FilterStats,
}

/// Write the playable words of `input` to `output`
///
/// # Errors
///
/// Returns an error if the input cannot be read or the output cannot be
/// written.
pub fn run_filter(input: &Path, output: &Path) -> Result<FilterReport, SolverError> {
    let stats = filter_word_list(input, output)?;
    Ok(FilterReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        stats,
    })
}

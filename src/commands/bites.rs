//! Word Bites command
//!
//! Builds a block board, optionally merges touching singles, and plans a
//! drag sequence for every playable word.

use crate::config::{BITES_COLS, BITES_ROWS};
use crate::core::{Block, BlockBoard, total_score};
use crate::solver::{Solver, WordBitesMove};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::{Duration, Instant};

/// Configuration for a Word Bites board
pub struct BitesConfig {
    pub rows: usize,
    pub cols: usize,
    pub blocks: Vec<Block>,
    /// Merge touching single blocks before solving
    pub combine: bool,
}

impl BitesConfig {
    /// Standard board size with combining enabled
    #[must_use]
    pub const fn new(blocks: Vec<Block>) -> Self {
        Self {
            rows: BITES_ROWS,
            cols: BITES_COLS,
            blocks,
            combine: true,
        }
    }
}

/// Result of solving a Word Bites board
pub struct BitesReport {
    /// The board as solved, after any merging
    pub board: BlockBoard,
    /// Blocks that did not fit on the board
    pub rejected: Vec<Block>,
    /// Words in play order, each with its drag sequence
    pub moves: Vec<WordBitesMove>,
    pub total_score: u32,
    pub duration: Duration,
}

/// Solve a Word Bites board
#[must_use]
pub fn solve_bites(config: &BitesConfig, solver: &Solver<'_>) -> BitesReport {
    let (mut board, rejected) = BlockBoard::from_blocks(config.rows, config.cols, &config.blocks);
    for block in &rejected {
        log::warn!("block {block} does not fit on the board, skipping");
    }
    if config.combine {
        board.combine_touching_blocks();
    }

    let spinner = ProgressBar::new_spinner();
    if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(style);
    }
    spinner.set_message(format!("Planning moves for {} blocks...", board.len()));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let start = Instant::now();
    let moves = solver.word_bites(&board);
    let duration = start.elapsed();
    spinner.finish_and_clear();

    let total_score = total_score(moves.iter().map(|m| m.word.as_str()));
    log::info!(
        "word bites: {} words, {total_score} points in {:.2}s",
        moves.len(),
        duration.as_secs_f64()
    );

    BitesReport {
        board,
        rejected,
        moves,
        total_score,
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::apply_moves;
    use crate::wordlists::Dictionary;

    fn blocks() -> Vec<Block> {
        vec![
            Block::single('C', (0, 0)),
            Block::single('A', (2, 2)),
            Block::single('T', (4, 4)),
            Block::horizontal('N', 'E', (6, 0)),
        ]
    }

    #[test]
    fn solves_and_sorts() {
        let dictionary = Dictionary::from_words(["CAT", "ACT", "NET", "TEN", "CANE"]);
        let solver = Solver::new(&dictionary);
        let report = solve_bites(&BitesConfig::new(blocks()), &solver);

        assert!(report.rejected.is_empty());
        assert_eq!(report.board.len(), 4);
        let words: Vec<&str> = report.moves.iter().map(|m| m.word.as_str()).collect();
        assert!(words.contains(&"CAT"));
        assert!(words.contains(&"ACT"));
        assert!(words.contains(&"CANE"));
        assert_eq!(words[0], "CANE");
        assert_eq!(report.total_score, total_score(words.iter().copied()));

        for planned in &report.moves {
            let after = apply_moves(&report.board, &planned.moves).unwrap();
            let cells = planned.placement.cells(planned.word.len());
            assert_eq!(after.read(&cells).as_deref(), Some(planned.word.as_str()));
        }
    }

    #[test]
    fn reports_blocks_that_do_not_fit() {
        let dictionary = Dictionary::from_words(["CAT"]);
        let solver = Solver::new(&dictionary);
        let mut config = BitesConfig::new(vec![
            Block::single('C', (0, 0)),
            Block::single('A', (0, 0)),
            Block::horizontal('T', 'S', (0, 8)),
        ]);
        config.combine = false;

        let report = solve_bites(&config, &solver);
        assert_eq!(report.rejected.len(), 2);
        assert_eq!(report.board.len(), 1);
        assert!(report.moves.is_empty());
    }

    #[test]
    fn combining_merges_neighbours() {
        let dictionary = Dictionary::from_words(["CAT"]);
        let solver = Solver::new(&dictionary);
        let config = BitesConfig::new(vec![
            Block::single('C', (0, 0)),
            Block::single('A', (0, 1)),
            Block::single('T', (5, 5)),
        ]);

        let report = solve_bites(&config, &solver);
        assert_eq!(report.board.len(), 2);
        assert_eq!(report.moves.len(), 1);
        assert_eq!(report.moves[0].word, "CAT");
    }
}

//! Word Bites solving
//!
//! For every dictionary word and every place it could be laid (across a row
//! or down a column) the planner looks for a set of blocks that spell it and
//! an order of drags that gets them there without collisions. The board
//! itself is never touched; plans are checked on scratch copies.
//!
//! Placement rules:
//! - a single block supplies one letter;
//! - a double block lying along the word supplies two consecutive letters,
//!   in its own order, and never just one;
//! - a double block lying across the word supplies one letter, its other
//!   letter hanging off the side (after the word cell when its first letter
//!   is used, before it when its second letter is used);
//! - the cells just before and after the word must end up empty.

use crate::core::{Block, BlockBoard, BlockKind, Cell, letter_counts, score};
use crate::wordlists::Dictionary;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;

/// Which way a word reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Left to right along a row
    Across,
    /// Top to bottom down a column
    Down,
}

impl Direction {
    /// Double block kind that lies along this direction
    const fn along(self) -> BlockKind {
        match self {
            Self::Across => BlockKind::Horizontal,
            Self::Down => BlockKind::Vertical,
        }
    }

    /// Double block kind that lies across this direction
    const fn athwart(self) -> BlockKind {
        match self {
            Self::Across => BlockKind::Vertical,
            Self::Down => BlockKind::Horizontal,
        }
    }
}

/// Where a word is laid: its first cell and reading direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Placement {
    pub direction: Direction,
    pub row: usize,
    pub col: usize,
}

impl Placement {
    #[must_use]
    pub const fn new(direction: Direction, row: usize, col: usize) -> Self {
        Self {
            direction,
            row,
            col,
        }
    }

    /// Cell holding the word's `index`-th letter
    #[must_use]
    pub const fn cell(&self, index: usize) -> Cell {
        match self.direction {
            Direction::Across => (self.row, self.col + index),
            Direction::Down => (self.row + index, self.col),
        }
    }

    /// Cells for a word of `length` letters
    #[must_use]
    pub fn cells(&self, length: usize) -> Vec<Cell> {
        (0..length).map(|i| self.cell(i)).collect()
    }

    /// Cell just before the first letter, if on the board's top/left side
    #[must_use]
    pub const fn before(&self) -> Option<Cell> {
        match self.direction {
            Direction::Across if self.col > 0 => Some((self.row, self.col - 1)),
            Direction::Down if self.row > 0 => Some((self.row - 1, self.col)),
            _ => None,
        }
    }

    /// Primary cell for a crosswise block whose second letter lands on `cell`
    const fn shifted_back(&self, (row, col): Cell) -> Option<Cell> {
        match self.direction {
            Direction::Across if row > 0 => Some((row - 1, col)),
            Direction::Down if col > 0 => Some((row, col - 1)),
            _ => None,
        }
    }

    /// All placements of a word of `length` on the board, in search order:
    /// across (row, then column) before down (column, then row)
    fn all(rows: usize, cols: usize, length: usize) -> impl Iterator<Item = Self> {
        let across = (0..rows).flat_map(move |row| {
            (0..=cols.saturating_sub(length))
                .filter(move |_| length <= cols)
                .map(move |col| Self::new(Direction::Across, row, col))
        });
        let down = (0..cols).flat_map(move |col| {
            (0..=rows.saturating_sub(length))
                .filter(move |_| length <= rows)
                .map(move |row| Self::new(Direction::Down, row, col))
        });
        across.chain(down)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let direction = match self.direction {
            Direction::Across => "across",
            Direction::Down => "down",
        };
        write!(f, "{direction} from ({}, {})", self.row, self.col)
    }
}

/// Drag one block so its primary cell lands on `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockMove {
    /// The block as it sits on the board before the plan starts
    pub block: Block,
    pub target: Cell,
}

impl BlockMove {
    /// Whether the block is already where it needs to be
    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.block.position() == self.target
    }
}

/// A word and the drags that spell it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBitesMove {
    pub word: String,
    pub placement: Placement,
    /// Drags in execution order
    pub moves: Vec<BlockMove>,
    pub score: u32,
}

impl WordBitesMove {
    #[must_use]
    pub fn new(word: String, placement: Placement, moves: Vec<BlockMove>) -> Self {
        Self {
            score: score(&word),
            word,
            placement,
            moves,
        }
    }
}

/// Replay a move list on a copy of the board
///
/// Returns `None` as soon as a drag is rejected.
#[must_use]
pub fn apply_moves(board: &BlockBoard, moves: &[BlockMove]) -> Option<BlockBoard> {
    let mut scratch = board.clone();
    for m in moves {
        let (from_row, from_col) = m.block.position();
        let (to_row, to_col) = m.target;
        if !scratch.move_block(from_row, from_col, to_row, to_col) {
            return None;
        }
    }
    Some(scratch)
}

/// Find every word that can be spelled by rearranging the blocks
///
/// One move per word. Words are tried in dictionary order; each keeps the
/// first placement that works (across rows top to bottom, then down columns
/// left to right).
#[must_use]
pub fn find_word_bites_words(
    board: &BlockBoard,
    dictionary: &Dictionary,
    min_length: usize,
) -> Vec<WordBitesMove> {
    let available = letter_counts(board.blocks().flat_map(|b| b.letters().iter().copied()));
    let longest = board.rows().max(board.cols());

    let candidates: Vec<&String> = dictionary
        .words()
        .iter()
        .filter(|word| {
            let length = word.chars().count();
            length >= min_length
                && length <= longest
                && letter_counts(word.chars()).iter().all(|(letter, &needed)| {
                    available.get(letter).is_some_and(|&have| have >= needed)
                })
        })
        .collect();
    log::debug!(
        "{} of {} words fit the letters on the board",
        candidates.len(),
        dictionary.len()
    );

    let found: Vec<WordBitesMove> = candidates
        .par_iter()
        .filter_map(|word| plan_first_placement(board, word))
        .collect();

    log::debug!("found {} playable words", found.len());
    found
}

/// Plan a word at its first workable placement
#[must_use]
pub fn plan_first_placement(board: &BlockBoard, word: &str) -> Option<WordBitesMove> {
    let length = word.chars().count();
    Placement::all(board.rows(), board.cols(), length).find_map(|placement| {
        plan_word(board, word, placement)
            .map(|moves| WordBitesMove::new(word.to_string(), placement, moves))
    })
}

/// Plan a word at one placement
///
/// Returns the drags in an order that can be applied one after another, or
/// `None` if the blocks cannot spell the word there.
#[must_use]
pub fn plan_word(board: &BlockBoard, word: &str, placement: Placement) -> Option<Vec<BlockMove>> {
    let letters: Vec<char> = word.chars().collect();
    let last = placement.cell(letters.len().checked_sub(1)?);
    if last.0 >= board.rows() || last.1 >= board.cols() {
        return None;
    }
    if !cells_can_clear(board, &letters, placement) {
        log::trace!("{word} blocked {placement}");
        return None;
    }

    let blocks: Vec<Block> = board.blocks().copied().collect();
    let mut planner = Planner {
        board,
        used: vec![false; blocks.len()],
        chosen: Vec::with_capacity(letters.len()),
        blocks,
        letters,
        placement,
    };
    planner.search(0)
}

/// Quick rejection: any block in the word's cells or at its ends must be
/// able to leave, so it has to carry a letter of the word
fn cells_can_clear(board: &BlockBoard, letters: &[char], placement: Placement) -> bool {
    let wanted: FxHashSet<char> = letters.iter().copied().collect();
    let after = placement.cell(letters.len());

    placement
        .cells(letters.len())
        .into_iter()
        .chain(placement.before())
        .chain(std::iter::once(after))
        .filter_map(|(row, col)| board.block_at(row, col))
        .all(|block| block.letters().iter().any(|l| wanted.contains(l)))
}

/// Backtracking search over block assignments for one placement
struct Planner<'a> {
    board: &'a BlockBoard,
    /// Blocks row-major by primary cell
    blocks: Vec<Block>,
    letters: Vec<char>,
    placement: Placement,
    used: Vec<bool>,
    chosen: Vec<BlockMove>,
}

impl Planner<'_> {
    fn search(&mut self, index: usize) -> Option<Vec<BlockMove>> {
        if index == self.letters.len() {
            return self.sequence();
        }

        // Doubles along the word first, then singles, then crosswise doubles
        for pass in 0..3 {
            for b in 0..self.blocks.len() {
                if self.used[b] {
                    continue;
                }
                let block = self.blocks[b];
                let (targets, step) = match pass {
                    0 => (self.along_target(&block, index), 2),
                    1 => (self.single_target(&block, index), 1),
                    _ => (self.athwart_targets(&block, index), 1),
                };

                for target in targets.into_iter().flatten() {
                    if !self.fits_board(&block, target) {
                        continue;
                    }
                    self.used[b] = true;
                    self.chosen.push(BlockMove { block, target });
                    if let Some(moves) = self.search(index + step) {
                        return Some(moves);
                    }
                    self.chosen.pop();
                    self.used[b] = false;
                }
            }
        }
        None
    }

    fn single_target(&self, block: &Block, index: usize) -> [Option<Cell>; 2] {
        let hit = block.is_single() && block.letters()[0] == self.letters[index];
        [hit.then(|| self.placement.cell(index)), None]
    }

    fn along_target(&self, block: &Block, index: usize) -> [Option<Cell>; 2] {
        let hit = block.kind() == self.placement.direction.along()
            && index + 1 < self.letters.len()
            && block.letters() == [self.letters[index], self.letters[index + 1]];
        [hit.then(|| self.placement.cell(index)), None]
    }

    fn athwart_targets(&self, block: &Block, index: usize) -> [Option<Cell>; 2] {
        if block.kind() != self.placement.direction.athwart() {
            return [None, None];
        }
        let cell = self.placement.cell(index);
        let letter = self.letters[index];
        let letters = block.letters();
        [
            (letters[0] == letter).then_some(cell),
            (letters[1] == letter)
                .then(|| self.placement.shifted_back(cell))
                .flatten(),
        ]
    }

    fn fits_board(&self, block: &Block, target: Cell) -> bool {
        block
            .cells_at(target)
            .iter()
            .all(|&(row, col)| row < self.board.rows() && col < self.board.cols())
    }

    /// Order the chosen drags so each lands on free cells, then check the
    /// finished word reads correctly with empty cells at both ends
    fn sequence(&self) -> Option<Vec<BlockMove>> {
        let mut scratch = self.board.clone();
        let mut pending = self.chosen.clone();
        let mut ordered = Vec::with_capacity(pending.len());

        while !pending.is_empty() {
            let next = pending.iter().position(|m| {
                scratch.is_valid_position(&m.block, m.target.0, m.target.1)
            })?;
            let m = pending.remove(next);
            let (from_row, from_col) = m.block.position();
            if !scratch.move_block(from_row, from_col, m.target.0, m.target.1) {
                return None;
            }
            ordered.push(m);
        }

        let word: String = self.letters.iter().collect();
        let ends_clear = self
            .placement
            .before()
            .into_iter()
            .chain(std::iter::once(self.placement.cell(self.letters.len())))
            .all(|cell| scratch.letter_at(cell).is_none());
        let reads = scratch.read(&self.placement.cells(self.letters.len()));

        (ends_clear && reads.as_deref() == Some(word.as_str())).then_some(ordered)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BITES_COLS, BITES_ROWS};

    fn board_with(rows: usize, cols: usize, blocks: &[Block]) -> BlockBoard {
        let (board, rejected) = BlockBoard::from_blocks(rows, cols, blocks);
        assert!(rejected.is_empty(), "rejected {rejected:?}");
        board
    }

    fn standard(blocks: &[Block]) -> BlockBoard {
        board_with(BITES_ROWS, BITES_COLS, blocks)
    }

    /// Apply the plan and check the word reads across its cells
    fn assert_round_trip(board: &BlockBoard, found: &WordBitesMove) {
        let after = apply_moves(board, &found.moves)
            .unwrap_or_else(|| panic!("{} moves do not apply", found.word));
        let cells = found.placement.cells(found.word.chars().count());
        assert_eq!(after.read(&cells).as_deref(), Some(found.word.as_str()));
    }

    #[test]
    fn singles_spell_word() {
        let board = standard(&[
            Block::single('C', (4, 0)),
            Block::single('A', (4, 1)),
            Block::single('T', (4, 2)),
        ]);
        let dictionary = Dictionary::from_words(["CAT", "DOG"]);
        let found = find_word_bites_words(&board, &dictionary, 3);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].word, "CAT");
        assert_eq!(found[0].placement, Placement::new(Direction::Across, 0, 0));
        assert_eq!(found[0].score, 100);
        assert_round_trip(&board, &found[0]);
    }

    #[test]
    fn along_double_supplies_two_letters() {
        let board = standard(&[
            Block::single('W', (2, 0)),
            Block::horizontal('O', 'R', (5, 3)),
            Block::single('M', (2, 7)),
        ]);
        let moves = plan_word(&board, "WORM", Placement::new(Direction::Across, 0, 0)).unwrap();

        assert_eq!(
            moves,
            vec![
                BlockMove {
                    block: Block::single('W', (2, 0)),
                    target: (0, 0)
                },
                BlockMove {
                    block: Block::horizontal('O', 'R', (5, 3)),
                    target: (0, 1)
                },
                BlockMove {
                    block: Block::single('M', (2, 7)),
                    target: (0, 3)
                },
            ]
        );
    }

    #[test]
    fn along_double_in_wrong_order_is_unusable() {
        let board = standard(&[
            Block::single('W', (2, 0)),
            Block::horizontal('R', 'O', (5, 3)),
            Block::single('M', (2, 7)),
        ]);
        assert!(plan_first_placement(&board, "WORM").is_none());
    }

    #[test]
    fn crosswise_double_first_letter_hangs_below() {
        let board = standard(&[
            Block::single('C', (6, 0)),
            Block::vertical('A', 'N', (5, 5)),
            Block::single('T', (6, 8)),
        ]);
        let found = plan_first_placement(&board, "CAT").unwrap();

        assert_eq!(found.placement, Placement::new(Direction::Across, 0, 0));
        let an = found.moves.iter().find(|m| !m.block.is_single()).unwrap();
        assert_eq!(an.target, (0, 1));

        let after = apply_moves(&board, &found.moves).unwrap();
        assert_eq!(after.letter_at((1, 1)), Some('N'));
        assert_round_trip(&board, &found);
    }

    #[test]
    fn crosswise_double_second_letter_hangs_above() {
        let board = standard(&[
            Block::single('C', (6, 0)),
            Block::vertical('N', 'A', (5, 5)),
            Block::single('T', (6, 8)),
        ]);
        let found = plan_first_placement(&board, "CAT").unwrap();

        // Row 0 leaves no room above for the N
        assert_eq!(found.placement, Placement::new(Direction::Across, 1, 0));
        let na = found.moves.iter().find(|m| !m.block.is_single()).unwrap();
        assert_eq!(na.target, (0, 1));

        let after = apply_moves(&board, &found.moves).unwrap();
        assert_eq!(after.letter_at((0, 1)), Some('N'));
        assert_round_trip(&board, &found);
    }

    #[test]
    fn along_double_never_supplies_one_letter() {
        // A horizontal A-N cannot give just the A to an across word, so CAT
        // has to run down a column with the N hanging to the right
        let board = standard(&[
            Block::single('C', (6, 0)),
            Block::horizontal('A', 'N', (5, 5)),
            Block::single('T', (6, 8)),
        ]);
        let found = plan_first_placement(&board, "CAT").unwrap();

        assert_eq!(found.placement, Placement::new(Direction::Down, 0, 0));
        let after = apply_moves(&board, &found.moves).unwrap();
        assert_eq!(after.letter_at((1, 1)), Some('N'));
        assert_round_trip(&board, &found);
    }

    #[test]
    fn vertical_words_when_rows_too_short() {
        let board = board_with(
            5,
            3,
            &[
                Block::single('T', (0, 0)),
                Block::single('E', (1, 0)),
                Block::single('S', (2, 0)),
                Block::single('T', (3, 0)),
            ],
        );
        let dictionary = Dictionary::from_words(["TEST"]);
        let found = find_word_bites_words(&board, &dictionary, 3);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].placement, Placement::new(Direction::Down, 0, 0));
        assert!(found[0].moves.iter().all(BlockMove::is_noop));
        assert_round_trip(&board, &found[0]);
    }

    #[test]
    fn swap_cycle_is_infeasible() {
        // C T A on a one-row board: A and T would have to trade places
        let board = board_with(
            1,
            3,
            &[
                Block::single('C', (0, 0)),
                Block::single('T', (0, 1)),
                Block::single('A', (0, 2)),
            ],
        );
        assert!(plan_first_placement(&board, "CAT").is_none());
    }

    #[test]
    fn stray_block_at_word_end_blocks_placement() {
        let board = board_with(
            1,
            4,
            &[
                Block::single('C', (0, 0)),
                Block::single('A', (0, 1)),
                Block::single('T', (0, 2)),
                Block::single('X', (0, 3)),
            ],
        );
        assert!(plan_first_placement(&board, "CAT").is_none());
    }

    #[test]
    fn missing_letter_finds_nothing() {
        let board = standard(&[Block::single('C', (0, 0)), Block::single('A', (0, 1))]);
        let dictionary = Dictionary::from_words(["CAT"]);
        assert!(find_word_bites_words(&board, &dictionary, 3).is_empty());
    }

    #[test]
    fn search_leaves_board_untouched() {
        let board = standard(&[
            Block::single('E', (0, 4)),
            Block::vertical('S', 'T', (1, 2)),
        ]);
        let before = board.clone();
        let _ = find_word_bites_words(&board, &Dictionary::from_words(["SET", "TEE"]), 3);
        assert_eq!(board, before);
    }

    #[test]
    fn one_move_per_word_in_dictionary_order() {
        let board = standard(&[
            Block::single('T', (7, 0)),
            Block::single('E', (7, 2)),
            Block::single('N', (7, 4)),
        ]);
        let dictionary = Dictionary::from_words(["TEN", "NET", "TEN"]);
        let words: Vec<String> = find_word_bites_words(&board, &dictionary, 3)
            .into_iter()
            .map(|m| m.word)
            .collect();
        assert_eq!(words, vec!["TEN".to_string(), "NET".to_string()]);
    }

    #[test]
    fn every_plan_round_trips() {
        let board = standard(&[
            Block::single('E', (0, 4)),
            Block::vertical('S', 'T', (1, 2)),
            Block::vertical('I', 'N', (3, 4)),
            Block::single('G', (3, 6)),
            Block::horizontal('R', 'A', (4, 1)),
            Block::vertical('L', 'Y', (5, 3)),
            Block::single('U', (6, 5)),
            Block::horizontal('E', 'D', (7, 2)),
        ]);
        let found = find_word_bites_words(&board, &Dictionary::builtin(), 3);

        assert!(!found.is_empty());
        for word in &found {
            assert_round_trip(&board, word);
            let after = apply_moves(&board, &word.moves).unwrap();
            let length = word.word.chars().count();
            if let Some(before) = word.placement.before() {
                assert!(after.letter_at(before).is_none(), "{}", word.word);
            }
            assert!(after.letter_at(word.placement.cell(length)).is_none());
        }
    }

    #[test]
    fn placements_enumerate_across_then_down() {
        let all: Vec<Placement> = Placement::all(2, 3, 3).collect();
        assert_eq!(
            all,
            vec![
                Placement::new(Direction::Across, 0, 0),
                Placement::new(Direction::Across, 1, 0),
            ]
        );
        let square: Vec<Placement> = Placement::all(3, 3, 3).collect();
        assert_eq!(square.len(), 6);
        assert_eq!(square[3], Placement::new(Direction::Down, 0, 0));
    }
}

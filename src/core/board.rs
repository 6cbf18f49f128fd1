//! Word Bites board
//!
//! Blocks live in an arena of slots; every grid cell stores the slot index of
//! the block covering it. A double block therefore shows up in two cells
//! that both point at the same slot.

use super::{Block, BlockKind, Cell};
use std::fmt;

/// A fixed-size board of movable blocks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockBoard {
    rows: usize,
    cols: usize,
    slots: Vec<Option<Block>>,
    grid: Vec<Option<usize>>,
}

impl BlockBoard {
    /// Create an empty board with custom dimensions
    #[must_use]
    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            slots: Vec::new(),
            grid: vec![None; rows * cols],
        }
    }

    /// Build a board from a list of blocks, skipping any that do not fit
    ///
    /// Returns the board and the blocks that could not be placed.
    #[must_use]
    pub fn from_blocks(rows: usize, cols: usize, blocks: &[Block]) -> (Self, Vec<Block>) {
        let mut board = Self::with_size(rows, cols);
        let rejected = blocks
            .iter()
            .filter(|&&block| !board.add_block(block))
            .copied()
            .collect();
        (board, rejected)
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    const fn in_bounds(&self, (row, col): Cell) -> bool {
        row < self.rows && col < self.cols
    }

    fn slot_at(&self, cell: Cell) -> Option<usize> {
        if self.in_bounds(cell) {
            self.grid[cell.0 * self.cols + cell.1]
        } else {
            None
        }
    }

    fn set_cell(&mut self, (row, col): Cell, slot: Option<usize>) {
        self.grid[row * self.cols + col] = slot;
    }

    /// Whether `block` could sit with its primary cell at `(row, col)`
    ///
    /// Every covered cell must be on the board and either empty or already
    /// covered by `block` itself.
    #[must_use]
    pub fn is_valid_position(&self, block: &Block, row: usize, col: usize) -> bool {
        block.cells_at((row, col)).into_iter().all(|cell| {
            self.in_bounds(cell)
                && self
                    .slot_at(cell)
                    .is_none_or(|slot| self.slots[slot].as_ref() == Some(block))
        })
    }

    /// Place a block at its own position
    ///
    /// Returns `false` and leaves the board untouched if the position is
    /// invalid or occupied.
    pub fn add_block(&mut self, block: Block) -> bool {
        let (row, col) = block.position();
        if !self.is_valid_position(&block, row, col) || self.contains(&block) {
            return false;
        }
        let slot = self.slots.len();
        for cell in block.all_positions() {
            self.set_cell(cell, Some(slot));
        }
        self.slots.push(Some(block));
        true
    }

    /// Whether this exact block is on the board
    #[must_use]
    pub fn contains(&self, block: &Block) -> bool {
        self.block_at(block.position().0, block.position().1) == Some(block)
    }

    /// The block covering a cell, if any
    #[must_use]
    pub fn block_at(&self, row: usize, col: usize) -> Option<&Block> {
        self.slot_at((row, col))
            .and_then(|slot| self.slots[slot].as_ref())
    }

    /// Letter shown in a cell, if any
    #[must_use]
    pub fn letter_at(&self, cell: Cell) -> Option<char> {
        let block = self.block_at(cell.0, cell.1)?;
        let index = block.all_positions().iter().position(|&c| c == cell)?;
        block.letters().get(index).copied()
    }

    /// Letters shown along a run of cells, `None` if any cell is empty
    #[must_use]
    pub fn read(&self, cells: &[Cell]) -> Option<String> {
        cells.iter().map(|&cell| self.letter_at(cell)).collect()
    }

    /// Move the block whose primary cell is `(from_row, from_col)`
    ///
    /// Fails if no block starts at that cell (including the second cell of a
    /// double block) or the target is invalid. On success the old block
    /// value is retired and a new one takes its place.
    pub fn move_block(
        &mut self,
        from_row: usize,
        from_col: usize,
        to_row: usize,
        to_col: usize,
    ) -> bool {
        let Some(slot) = self.slot_at((from_row, from_col)) else {
            return false;
        };
        let Some(block) = self.slots[slot] else {
            return false;
        };
        if block.position() != (from_row, from_col)
            || !self.is_valid_position(&block, to_row, to_col)
        {
            return false;
        }

        for cell in block.all_positions() {
            self.set_cell(cell, None);
        }
        let moved = block.moved_to((to_row, to_col));
        for cell in moved.all_positions() {
            self.set_cell(cell, Some(slot));
        }
        self.slots[slot] = Some(moved);
        true
    }

    /// Remove whichever block covers `(row, col)`
    pub fn remove_block(&mut self, row: usize, col: usize) -> bool {
        let Some(slot) = self.slot_at((row, col)) else {
            return false;
        };
        let Some(block) = self.slots[slot].take() else {
            return false;
        };
        for cell in block.all_positions() {
            self.set_cell(cell, None);
        }
        true
    }

    /// All blocks, ordered row-major by primary cell
    pub fn blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .filter_map(|cell| {
                self.block_at(cell.0, cell.1)
                    .filter(|block| block.position() == cell)
            })
    }

    /// Number of blocks on the board
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().flatten().count()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Merge touching single blocks into double blocks
    ///
    /// Scans row-major. An unmerged single first tries its right neighbour,
    /// then the one below; the merged block keeps the scanning block's
    /// letter first. Existing doubles are left alone.
    pub fn combine_touching_blocks(&mut self) {
        let singles: Vec<Block> = self.blocks().filter(|b| b.is_single()).copied().collect();
        let mut merged: Vec<Block> = Vec::new();

        for block in singles {
            if merged.iter().any(|m| m.all_positions().contains(&block.position())) {
                continue;
            }
            let (row, col) = block.position();
            let partner = [
                (BlockKind::Horizontal, (row, col + 1)),
                (BlockKind::Vertical, (row + 1, col)),
            ]
            .into_iter()
            .find_map(|(kind, cell)| {
                let other = *self.block_at(cell.0, cell.1)?;
                let fresh = other.is_single()
                    && !merged.iter().any(|m| m.all_positions().contains(&cell));
                fresh.then_some((kind, other))
            });

            if let Some((kind, other)) = partner {
                let first = block.letters()[0];
                let second = other.letters()[0];
                let combined = match kind {
                    BlockKind::Horizontal => Block::horizontal(first, second, (row, col)),
                    _ => Block::vertical(first, second, (row, col)),
                };
                self.remove_block(row, col);
                self.remove_block(other.position().0, other.position().1);
                if self.add_block(combined) {
                    merged.push(combined);
                } else {
                    // Cannot happen: both cells were just vacated
                    self.add_block(block);
                    self.add_block(other);
                }
            }
        }

        log::debug!("combined {} pairs of single blocks", merged.len());
    }
}

impl fmt::Display for BlockBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| match self.letter_at((row, col)) {
                    Some(letter) => format!("[{letter}]"),
                    None => "[ ]".to_string(),
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

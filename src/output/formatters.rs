//! Formatting utilities for terminal output

use crate::core::{BlockKind, Cell};
use crate::solver::{BlockMove, Scored};
use std::collections::BTreeMap;

/// Format a cell as `(row,col)`
#[must_use]
pub fn format_cell((row, col): Cell) -> String {
    format!("({row},{col})")
}

/// Format a traced path as `(0,0) → (0,1) → ...`
#[must_use]
pub fn format_path(path: &[Cell]) -> String {
    path.iter()
        .map(|&cell| format_cell(cell))
        .collect::<Vec<_>>()
        .join(" → ")
}

/// Format tile indices as `2 1 0 ...`
#[must_use]
pub fn format_tiles(tiles: &[usize]) -> String {
    tiles
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a drag as `R-A (4,1) → (0,3)`
#[must_use]
pub fn format_move(block_move: &BlockMove) -> String {
    let block = &block_move.block;
    let letters = match (block.kind(), block.letters()) {
        (BlockKind::Horizontal, [first, second]) => format!("{first}-{second}"),
        (BlockKind::Vertical, [first, second]) => format!("{first}|{second}"),
        (_, letters) => letters.iter().collect(),
    };
    format!(
        "{letters} {} → {}",
        format_cell(block.position()),
        format_cell(block_move.target)
    )
}

/// Group results by word length, longest first
#[must_use]
pub fn group_by_length<T: Scored>(items: &[T]) -> Vec<(usize, Vec<&T>)> {
    let mut groups: BTreeMap<usize, Vec<&T>> = BTreeMap::new();
    for item in items {
        groups
            .entry(item.word().chars().count())
            .or_default()
            .push(item);
    }
    groups.into_iter().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Block;
    use crate::solver::GridWord;

    #[test]
    fn path_is_arrow_joined() {
        assert_eq!(format_path(&[(0, 0), (1, 1), (1, 2)]), "(0,0) → (1,1) → (1,2)");
        assert_eq!(format_path(&[]), "");
    }

    #[test]
    fn tiles_are_space_joined() {
        assert_eq!(format_tiles(&[2, 1, 0]), "2 1 0");
    }

    #[test]
    fn moves_show_block_and_target() {
        let single = BlockMove {
            block: Block::single('E', (0, 4)),
            target: (7, 0),
        };
        assert_eq!(format_move(&single), "E (0,4) → (7,0)");

        let across = BlockMove {
            block: Block::horizontal('R', 'A', (4, 1)),
            target: (0, 3),
        };
        assert_eq!(format_move(&across), "R-A (4,1) → (0,3)");

        let down = BlockMove {
            block: Block::vertical('S', 'T', (1, 2)),
            target: (2, 2),
        };
        assert_eq!(format_move(&down), "S|T (1,2) → (2,2)");
    }

    #[test]
    fn groups_longest_first() {
        let word = |w: &str| GridWord {
            word: w.to_string(),
            path: Vec::new(),
            score: 0,
        };
        let words = vec![word("TEN"), word("LISTEN"), word("NET"), word("LIST")];
        let groups = group_by_length(&words);

        let lengths: Vec<usize> = groups.iter().map(|(len, _)| *len).collect();
        assert_eq!(lengths, [6, 4, 3]);
        let threes: Vec<&str> = groups[2].1.iter().map(|w| w.word.as_str()).collect();
        assert_eq!(threes, ["TEN", "NET"]);
    }
}

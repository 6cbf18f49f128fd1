//! Letter grid for Word Hunt boards

use super::{BoardShape, Cell, SolverError};
use std::fmt;

/// Marker for a cell that holds no letter
pub const HOLE_MARKER: char = '.';

/// The eight neighbour offsets, in search order
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// A rectangular grid of uppercase letters, some cells possibly holes
///
/// Read-only once built. Holes never take part in a word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Build a grid from rows of letters
    ///
    /// `.` and whitespace mark holes. Letters are normalised to uppercase.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the grid is empty, the rows
    /// have different widths, or a cell is neither a letter nor a hole.
    ///
    /// # Examples
    /// ```
    /// use word_game_solver::core::Grid;
    ///
    /// let grid = Grid::new(&["cat", "x.x"]).unwrap();
    /// assert_eq!(grid.letter((0, 1)), Some('A'));
    /// assert!(grid.is_hole((1, 1)));
    /// ```
    pub fn new<S: AsRef<str>>(rows: &[S]) -> Result<Self, SolverError> {
        let Some(first) = rows.first() else {
            return Err(SolverError::invalid("grid has no rows"));
        };
        let cols = first.as_ref().chars().count();
        if cols == 0 {
            return Err(SolverError::invalid("grid has no columns"));
        }

        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (r, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            let width = row.chars().count();
            if width != cols {
                return Err(SolverError::invalid(format!(
                    "row {r} has {width} cells, expected {cols}"
                )));
            }
            for ch in row.chars() {
                cells.push(parse_cell(ch)?);
            }
        }

        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Build a grid for a specific board shape
    ///
    /// The shape's hole cells are blanked regardless of what was recognised
    /// there.
    ///
    /// # Errors
    /// Returns `SolverError::InvalidInput` if the rows are malformed or do
    /// not match the shape's dimensions.
    pub fn with_shape<S: AsRef<str>>(rows: &[S], shape: BoardShape) -> Result<Self, SolverError> {
        let mut grid = Self::new(rows)?;
        if grid.rows != shape.rows() || grid.cols != shape.cols() {
            return Err(SolverError::invalid(format!(
                "{shape} board must be {}x{}, got {}x{}",
                shape.rows(),
                shape.cols(),
                grid.rows,
                grid.cols
            )));
        }
        for &(row, col) in shape.holes() {
            grid.cells[row * grid.cols + col] = None;
        }
        Ok(grid)
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

    /// Linear index of a cell, used for visited sets
    #[inline]
    #[must_use]
    pub const fn index(&self, (row, col): Cell) -> usize {
        row * self.cols + col
    }

    /// Letter at a cell, `None` for holes and out-of-bounds cells
    #[inline]
    #[must_use]
    pub fn letter(&self, (row, col): Cell) -> Option<char> {
        if row < self.rows && col < self.cols {
            self.cells[row * self.cols + col]
        } else {
            None
        }
    }

    /// Whether a cell is inside the grid but carries no letter
    #[must_use]
    pub fn is_hole(&self, cell: Cell) -> bool {
        cell.0 < self.rows && cell.1 < self.cols && self.letter(cell).is_none()
    }

    /// All playable cells, row-major
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| (row, col)))
            .filter(|&cell| self.letter(cell).is_some())
    }

    /// Neighbour of `cell` in direction `dir` (0-7), if it is playable
    #[must_use]
    pub fn neighbor(&self, (row, col): Cell, dir: usize) -> Option<Cell> {
        let (dr, dc) = *DIRECTIONS.get(dir)?;
        let next = (row.checked_add_signed(dr)?, col.checked_add_signed(dc)?);
        self.letter(next).map(|_| next)
    }

    /// All playable neighbours of a cell
    pub fn neighbors(&self, cell: Cell) -> impl Iterator<Item = Cell> + '_ {
        (0..DIRECTIONS.len()).filter_map(move |dir| self.neighbor(cell, dir))
    }

    /// Number of search directions from each cell
    #[must_use]
    pub const fn direction_count() -> usize {
        DIRECTIONS.len()
    }
}

fn parse_cell(ch: char) -> Result<Option<char>, SolverError> {
    if ch == HOLE_MARKER || ch.is_whitespace() {
        Ok(None)
    } else if ch.is_alphabetic() {
        Ok(ch.to_uppercase().next())
    } else {
        Err(SolverError::invalid(format!("'{ch}' is not a letter")))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: Vec<String> = (0..self.cols)
                .map(|col| self.letter((row, col)).unwrap_or(HOLE_MARKER).to_string())
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

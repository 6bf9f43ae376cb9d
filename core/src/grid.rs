use crate::error::MalformedGrid;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const OPEN: u8 = 0;
pub const WALL: u8 = 1;

/// A grid position, compared by value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
}

impl Cell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True when `other` is exactly one orthogonal step away.
    pub fn is_adjacent(&self, other: &Cell) -> bool {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col) == 1
    }
}

impl From<(usize, usize)> for Cell {
    fn from((row, col): (usize, usize)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Rectangular occupancy grid: `0` is open floor, `1` is wall.
///
/// Only constructible through [`Grid::new`], so every `Grid` in the program
/// is non-empty, rectangular and binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<Vec<u8>>,
    cols: usize,
}

impl Grid {
    pub fn new(cells: Vec<Vec<u8>>) -> Result<Self, MalformedGrid> {
        let first_row = cells.first().ok_or(MalformedGrid::NoRows)?;
        let cols = first_row.len();
        if cols == 0 {
            return Err(MalformedGrid::NoColumns);
        }

        for (row, values) in cells.iter().enumerate() {
            if values.len() != cols {
                return Err(MalformedGrid::RaggedRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            if let Some(col) = values.iter().position(|&v| v != OPEN && v != WALL) {
                return Err(MalformedGrid::InvalidCell {
                    cell: Cell::new(row, col),
                    value: values[col],
                });
            }
        }

        Ok(Self { cells, cols })
    }

    pub fn rows(&self) -> usize {
        self.cells.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.row < self.rows() && cell.col < self.cols
    }

    pub fn get(&self, cell: Cell) -> Option<u8> {
        self.cells.get(cell.row)?.get(cell.col).copied()
    }

    /// In bounds and not a wall.
    pub fn is_open(&self, cell: Cell) -> bool {
        self.get(cell) == Some(OPEN)
    }

    pub fn top_left(&self) -> Cell {
        Cell::new(0, 0)
    }

    pub fn bottom_right(&self) -> Cell {
        Cell::new(self.rows() - 1, self.cols - 1)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows()).flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
    }

    pub fn as_rows(&self) -> &[Vec<u8>] {
        &self.cells
    }

    pub(crate) fn check_endpoint(&self, cell: Cell) -> Result<(), MalformedGrid> {
        if self.contains(cell) {
            Ok(())
        } else {
            Err(MalformedGrid::EndpointOutOfBounds {
                cell,
                rows: self.rows(),
                cols: self.cols,
            })
        }
    }
}

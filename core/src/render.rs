//! ASCII rendering of a solved maze.
//!
//! Output is one line per maze row with every symbol followed by a single
//! space: `S` start, `E` end, `.` path, `#` wall, blank for open floor.

use crate::grid::{Cell, Grid};
use rustc_hash::FxHashSet;
use std::fmt::{self, Write};

pub const NO_SOLUTION: &str = "No solution found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Start,
    End,
    Path,
    Wall,
    Open,
}

impl Tile {
    pub fn symbol(self) -> char {
        match self {
            Tile::Start => 'S',
            Tile::End => 'E',
            Tile::Path => '.',
            Tile::Wall => '#',
            Tile::Open => ' ',
        }
    }
}

/// Classifies every cell. Start and end win over path membership, which
/// wins over the grid value.
pub fn tile_grid(grid: &Grid, start: Cell, end: Cell, path: &[Cell]) -> Vec<Vec<Tile>> {
    let on_path: FxHashSet<Cell> = path.iter().copied().collect();

    (0..grid.rows())
        .map(|row| {
            (0..grid.cols())
                .map(|col| {
                    let cell = Cell::new(row, col);
                    if cell == start {
                        Tile::Start
                    } else if cell == end {
                        Tile::End
                    } else if on_path.contains(&cell) {
                        Tile::Path
                    } else if grid.is_open(cell) {
                        Tile::Open
                    } else {
                        Tile::Wall
                    }
                })
                .collect()
        })
        .collect()
}

/// Writes tile rows as text: each tile through `render_tile`, followed by a
/// space, one row per line.
pub fn format_tile_rows<D, F>(tiles: &[Vec<Tile>], render_tile: F) -> String
where
    D: fmt::Display,
    F: Fn(Tile) -> D,
{
    let cols = tiles.first().map_or(0, Vec::len);
    let mut output = String::with_capacity(tiles.len() * (cols * 2 + 1));
    for row in tiles {
        for &tile in row {
            // Writing into a String cannot fail.
            let _ = write!(output, "{} ", render_tile(tile));
        }
        output.push('\n');
    }
    output
}

/// Renders the maze with `path` drawn on it, or [`NO_SOLUTION`] when the
/// path is empty. Rows end with a newline.
pub fn render_solution(grid: &Grid, start: Cell, end: Cell, path: &[Cell]) -> String {
    if path.is_empty() {
        return format!("{}\n", NO_SOLUTION);
    }

    let tiles = tile_grid(grid, start, end, path);
    format_tile_rows(&tiles, Tile::symbol)
}

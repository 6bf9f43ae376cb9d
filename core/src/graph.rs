use crate::grid::{Cell, Grid};
use rustc_hash::FxHashMap;
use tracing::trace;

pub type AdjacencyMap = FxHashMap<Cell, Vec<Cell>>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Neighbor order used everywhere. DFS keeps the first path it finds, so
/// reordering this changes which route DFS reports.
pub const NEIGHBOR_ORDER: [Direction; 4] = [
    Direction::Up,
    Direction::Down,
    Direction::Left,
    Direction::Right,
];

impl Direction {
    /// The cell one step away, or `None` when the coordinate would leave
    /// the `usize` range.
    pub fn step(self, cell: Cell) -> Option<Cell> {
        match self {
            Direction::Up => cell.row.checked_sub(1).map(|row| Cell::new(row, cell.col)),
            Direction::Down => cell.row.checked_add(1).map(|row| Cell::new(row, cell.col)),
            Direction::Left => cell.col.checked_sub(1).map(|col| Cell::new(cell.row, col)),
            Direction::Right => cell.col.checked_add(1).map(|col| Cell::new(cell.row, col)),
        }
    }
}

/// Open orthogonal neighbors of `cell` in [`NEIGHBOR_ORDER`].
pub fn neighbors(grid: &Grid, cell: Cell) -> Vec<Cell> {
    NEIGHBOR_ORDER
        .iter()
        .filter_map(|direction| direction.step(cell))
        .filter(|&neighbor| grid.is_open(neighbor))
        .collect()
}

/// Builds the adjacency map over every open cell. Open cells boxed in by
/// walls are still keys, with an empty neighbor list.
pub fn build_graph(grid: &Grid) -> AdjacencyMap {
    let mut graph = FxHashMap::default();

    for cell in grid.cells().filter(|&cell| grid.is_open(cell)) {
        graph.insert(cell, neighbors(grid, cell));
    }

    trace!(
        rows = grid.rows(),
        cols = grid.cols(),
        open_cells = graph.len(),
        "built maze graph"
    );
    graph
}

use crate::graph::AdjacencyMap;
use crate::grid::{Cell, Grid};
use rustc_hash::FxHashMap;

/// Cells from start to end inclusive. Empty means no route was found.
pub type Path = Vec<Cell>;

/// `(path, cells_visited, elapsed_seconds)`
pub type PathResult = (Path, usize, f64);

pub fn get_cell_connections(cell: Cell, graph: &AdjacencyMap) -> &[Cell] {
    graph.get(&cell).map(Vec::as_slice).unwrap_or(&[])
}

pub fn reconstruct_path(parent_map: &FxHashMap<Cell, Cell>, start: Cell, target: Cell) -> Path {
    let mut path = Vec::new();
    let mut current_cell = target;

    while current_cell != start {
        path.push(current_cell);
        current_cell = parent_map[&current_cell];
    }

    path.push(start);
    path.reverse();
    path
}

/// Checks that `path` runs from `start` to `end` over open cells in single
/// orthogonal steps. An empty path is never valid.
pub fn is_valid_path(grid: &Grid, path: &[Cell], start: Cell, end: Cell) -> bool {
    let endpoints_match = path.first() == Some(&start) && path.last() == Some(&end);
    let all_open = path.iter().all(|&cell| grid.is_open(cell));
    let all_adjacent = path.windows(2).all(|pair| pair[0].is_adjacent(&pair[1]));

    endpoints_match && all_open && all_adjacent
}

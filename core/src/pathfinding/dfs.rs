use super::utils::{Path, PathResult, get_cell_connections};
use crate::graph::AdjacencyMap;
use crate::grid::Cell;
use rustc_hash::FxHashSet;
use std::time::Instant;
use tracing::debug;

struct DfsState<'a> {
    graph: &'a AdjacencyMap,
    end: Cell,
    visited: FxHashSet<Cell>,
}

impl<'a> DfsState<'a> {
    fn new(graph: &'a AdjacencyMap, end: Cell) -> Self {
        Self {
            graph,
            end,
            visited: FxHashSet::default(),
        }
    }

    /// Pushes `cell` onto `path` and explores from it. On failure the cell is
    /// popped again so the caller can try its next sibling.
    fn explore(&mut self, cell: Cell, path: &mut Path) -> bool {
        self.visited.insert(cell);
        path.push(cell);

        if cell == self.end {
            return true;
        }

        let graph = self.graph;
        for &neighbor in get_cell_connections(cell, graph) {
            if !self.visited.contains(&neighbor) && self.explore(neighbor, path) {
                return true;
            }
        }

        path.pop();
        false
    }
}

/// Depth-first search that keeps the first route it finds. Neighbors are
/// tried in up, down, left, right order, so the result is deterministic but
/// not necessarily shortest.
///
/// Recursion depth grows with path length; use
/// [`dfs_find_path_iterative`] for very large mazes.
pub fn dfs_find_path(graph: &AdjacencyMap, start: Cell, end: Cell) -> PathResult {
    let search_timer = Instant::now();

    if !graph.contains_key(&start) {
        debug!(%start, "dfs start cell is a wall or outside the grid");
        return (Vec::new(), 0, search_timer.elapsed().as_secs_f64());
    }

    let mut dfs_state = DfsState::new(graph, end);
    let mut path = Vec::new();
    dfs_state.explore(start, &mut path);

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(
        path_len = path.len(),
        visited = dfs_state.visited.len(),
        "dfs finished"
    );
    (path, dfs_state.visited.len(), elapsed_time)
}

/// Same traversal as [`dfs_find_path`] driven by an explicit stack of
/// `(cell, next neighbor index)` frames. Visits cells in the same order and
/// returns the same path.
pub fn dfs_find_path_iterative(graph: &AdjacencyMap, start: Cell, end: Cell) -> PathResult {
    let search_timer = Instant::now();

    if !graph.contains_key(&start) {
        debug!(%start, "dfs start cell is a wall or outside the grid");
        return (Vec::new(), 0, search_timer.elapsed().as_secs_f64());
    }

    let mut visited = FxHashSet::default();
    visited.insert(start);

    if start == end {
        return (vec![start], visited.len(), search_timer.elapsed().as_secs_f64());
    }

    let mut stack: Vec<(Cell, usize)> = vec![(start, 0)];

    while let Some(&(cell, next_index)) = stack.last() {
        let Some(&neighbor) = get_cell_connections(cell, graph).get(next_index) else {
            stack.pop();
            continue;
        };

        let top = stack.len() - 1;
        stack[top].1 += 1;

        if !visited.insert(neighbor) {
            continue;
        }

        if neighbor == end {
            let path: Path = stack
                .iter()
                .map(|&(frame_cell, _)| frame_cell)
                .chain(std::iter::once(neighbor))
                .collect();
            let elapsed_time = search_timer.elapsed().as_secs_f64();
            debug!(path_len = path.len(), visited = visited.len(), "dfs finished");
            return (path, visited.len(), elapsed_time);
        }

        stack.push((neighbor, 0));
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(path_len = 0, visited = visited.len(), "dfs finished");
    (Vec::new(), visited.len(), elapsed_time)
}

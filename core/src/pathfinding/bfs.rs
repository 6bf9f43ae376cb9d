use super::utils::{PathResult, get_cell_connections, reconstruct_path};
use crate::graph::AdjacencyMap;
use crate::grid::Cell;
use rustc_hash::{FxHashMap, FxHashSet};
use std::{collections::VecDeque, time::Instant};
use tracing::debug;

struct BfsState {
    queue: VecDeque<Cell>,
    visited: FxHashSet<Cell>,
    parent_map: FxHashMap<Cell, Cell>,
}

impl BfsState {
    fn new(start: Cell) -> Self {
        let mut queue = VecDeque::new();
        let mut visited = FxHashSet::default();

        queue.push_back(start);
        visited.insert(start);

        Self {
            queue,
            visited,
            parent_map: FxHashMap::default(),
        }
    }

    // Marked on enqueue so a cell reached from two parents is queued once.
    fn visit_neighbor(&mut self, neighbor: Cell, current: Cell) {
        if self.visited.insert(neighbor) {
            self.parent_map.insert(neighbor, current);
            self.queue.push_back(neighbor);
        }
    }
}

/// Breadth-first search over `graph`. The first time `end` leaves the queue
/// it was reached by a shortest route, so the returned path has the fewest
/// cells of any route.
pub fn bfs_find_path(graph: &AdjacencyMap, start: Cell, end: Cell) -> PathResult {
    let search_timer = Instant::now();

    if !graph.contains_key(&start) {
        debug!(%start, "bfs start cell is a wall or outside the grid");
        return (Vec::new(), 0, search_timer.elapsed().as_secs_f64());
    }

    let mut bfs_state = BfsState::new(start);

    while let Some(current_cell) = bfs_state.queue.pop_front() {
        if current_cell == end {
            let path = reconstruct_path(&bfs_state.parent_map, start, end);
            let elapsed_time = search_timer.elapsed().as_secs_f64();
            debug!(
                path_len = path.len(),
                visited = bfs_state.visited.len(),
                "bfs reached end"
            );
            return (path, bfs_state.visited.len(), elapsed_time);
        }

        for &neighbor in get_cell_connections(current_cell, graph) {
            bfs_state.visit_neighbor(neighbor, current_cell);
        }
    }

    let elapsed_time = search_timer.elapsed().as_secs_f64();
    debug!(visited = bfs_state.visited.len(), "bfs exhausted queue without reaching end");
    (Vec::new(), bfs_state.visited.len(), elapsed_time)
}

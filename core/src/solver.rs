use crate::algorithm::Algorithm;
use crate::error::MazeError;
use crate::graph::{AdjacencyMap, build_graph};
use crate::grid::{Cell, Grid};
use crate::pathfinding::{Path, bfs_find_path, dfs_find_path, dfs_find_path_iterative};
use crate::pathfinding_config::{DfsMode, PathfindingConfig};

/// Result of one solve call.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    pub algorithm: Algorithm,
    pub path: Path,
    pub cells_visited: usize,
    pub search_duration: f64,
}

impl SearchOutcome {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Moves along the path, one fewer than its cell count.
    pub fn step_count(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// A maze with its endpoints and prebuilt adjacency map.
///
/// Solve methods take `&self` and keep their visited sets local, so any
/// number of solves may run against one solver, in any order or from
/// several threads, and each sees a clean slate.
#[derive(Debug, Clone)]
pub struct MazeSolver {
    grid: Grid,
    start: Cell,
    end: Cell,
    graph: AdjacencyMap,
    config: PathfindingConfig,
}

impl MazeSolver {
    /// Solver running from the top-left to the bottom-right corner.
    pub fn new(grid: Grid) -> Result<Self, MazeError> {
        let start = grid.top_left();
        let end = grid.bottom_right();
        Self::with_endpoints(grid, start, end)
    }

    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, MazeError> {
        Self::new(Grid::new(rows)?)
    }

    /// Endpoints must be inside the grid. They may be walls, in which case
    /// every search comes back empty.
    pub fn with_endpoints(grid: Grid, start: Cell, end: Cell) -> Result<Self, MazeError> {
        grid.check_endpoint(start)?;
        grid.check_endpoint(end)?;

        let graph = build_graph(&grid);

        Ok(Self {
            grid,
            start,
            end,
            graph,
            config: PathfindingConfig::default(),
        })
    }

    pub fn with_config(mut self, config: PathfindingConfig) -> Self {
        self.config = config;
        self
    }

    pub fn solve(&self, algorithm: Algorithm) -> SearchOutcome {
        let (path, cells_visited, search_duration) = match algorithm {
            Algorithm::Dfs => match self.config.dfs_mode {
                DfsMode::Recursive => dfs_find_path(&self.graph, self.start, self.end),
                DfsMode::Iterative => dfs_find_path_iterative(&self.graph, self.start, self.end),
            },
            Algorithm::Bfs => bfs_find_path(&self.graph, self.start, self.end),
        };

        SearchOutcome {
            algorithm,
            path,
            cells_visited,
            search_duration,
        }
    }

    pub fn solve_dfs(&self) -> SearchOutcome {
        self.solve(Algorithm::Dfs)
    }

    pub fn solve_bfs(&self) -> SearchOutcome {
        self.solve(Algorithm::Bfs)
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn start(&self) -> Cell {
        self.start
    }

    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn graph(&self) -> &AdjacencyMap {
        &self.graph
    }

    pub fn config(&self) -> &PathfindingConfig {
        &self.config
    }
}

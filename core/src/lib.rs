pub mod algorithm;
pub mod error;
pub mod graph;
pub mod grid;
pub mod parsing;
pub mod pathfinding;
pub mod pathfinding_config;
pub mod render;
pub mod sample;
pub mod solver;

// Re-export commonly used items
pub use algorithm::Algorithm;
pub use error::{MalformedGrid, MazeError};
pub use graph::{AdjacencyMap, build_graph, neighbors};
pub use grid::{Cell, Grid};
pub use parsing::{load_maze, parse_maze_json, parse_maze_text};
pub use pathfinding::{Path, bfs_find_path, dfs_find_path, dfs_find_path_iterative, is_valid_path};
pub use pathfinding_config::{DfsMode, PathfindingConfig};
pub use render::{NO_SOLUTION, Tile, format_tile_rows, render_solution, tile_grid};
pub use sample::{sample_maze, serpentine_maze};
pub use solver::{MazeSolver, SearchOutcome};

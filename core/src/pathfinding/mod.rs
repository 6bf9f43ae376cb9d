pub mod bfs;
pub mod dfs;
pub mod utils;

// Re-export the public functions
pub use bfs::bfs_find_path;
pub use dfs::{dfs_find_path, dfs_find_path_iterative};
pub use utils::{Path, PathResult, is_valid_path};

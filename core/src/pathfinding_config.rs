/// How depth-first search walks the maze
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DfsMode {
    /// Explicit heap-allocated stack, no depth limit
    #[default]
    Iterative,
    /// Call-stack recursion, one frame per path cell. Long corridors can
    /// overflow the thread stack
    Recursive,
}

/// Configuration for pathfinding algorithms
#[derive(Debug, Clone, Default)]
pub struct PathfindingConfig {
    /// DFS traversal strategy (same path either way)
    pub dfs_mode: DfsMode,
}

impl PathfindingConfig {
    pub fn new(dfs_mode: DfsMode) -> Self {
        Self { dfs_mode }
    }

    pub fn iterative() -> Self {
        Self::new(DfsMode::Iterative)
    }

    pub fn recursive() -> Self {
        Self::new(DfsMode::Recursive)
    }
}

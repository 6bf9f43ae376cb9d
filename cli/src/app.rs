use std::{error::Error, path::PathBuf};

use mazepath_core::{Grid, MazeSolver, PathfindingConfig, load_maze, sample_maze};
use tracing::info;

use crate::args::Args;

pub enum MazeSource {
    Sample,
    File(PathBuf),
}

pub struct MazePathApp {
    pub maze_source: MazeSource,
}

impl MazePathApp {
    pub fn new(maze_path: Option<PathBuf>) -> Result<Self, Box<dyn Error>> {
        let maze_source = match maze_path {
            Some(path) => {
                if !path.exists() {
                    return Err(format!("Maze file does not exist: {:?}", path).into());
                }
                MazeSource::File(path)
            }
            None => MazeSource::Sample,
        };

        Ok(Self { maze_source })
    }

    pub fn load_grid(&self) -> Result<Grid, Box<dyn Error>> {
        let grid = match &self.maze_source {
            MazeSource::Sample => sample_maze(),
            MazeSource::File(path) => load_maze(path)?,
        };
        Ok(grid)
    }

    pub fn build_solver(&self, args: &Args) -> Result<MazeSolver, Box<dyn Error>> {
        let grid = self.load_grid()?;
        let start = args.start.unwrap_or_else(|| grid.top_left());
        let end = args.end.unwrap_or_else(|| grid.bottom_right());

        let config = if args.recursive {
            PathfindingConfig::recursive()
        } else {
            PathfindingConfig::default()
        };

        let solver = MazeSolver::with_endpoints(grid, start, end)?.with_config(config);
        info!(
            rows = solver.grid().rows(),
            cols = solver.grid().cols(),
            %start,
            %end,
            "maze ready"
        );
        Ok(solver)
    }

    pub fn describe_source(&self) -> String {
        match &self.maze_source {
            MazeSource::Sample => "built-in sample maze".to_string(),
            MazeSource::File(path) => path.display().to_string(),
        }
    }
}

use crate::utils::parse_cell;
use clap::{Parser, ValueEnum};
use mazepath_core::{Algorithm, Cell};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "mazepath")]
#[command(about = "Solve a grid maze with depth-first and breadth-first search")]
pub struct Args {
    /// Maze file: rows of 0/1 (or #/.) as text, or a .json array of rows.
    /// The built-in 5x5 sample maze is used when omitted
    pub maze: Option<PathBuf>,

    /// Search strategy to run
    #[arg(short, long, value_enum, default_value_t = AlgorithmChoice::Both)]
    pub algorithm: AlgorithmChoice,

    /// Run DFS with call-stack recursion instead of an explicit stack.
    /// Very long corridors can overflow the stack in this mode
    #[arg(long)]
    pub recursive: bool,

    /// Start cell (defaults to the top-left corner)
    #[arg(long, value_name = "ROW,COL", value_parser = parse_cell)]
    pub start: Option<Cell>,

    /// End cell (defaults to the bottom-right corner)
    #[arg(long, value_name = "ROW,COL", value_parser = parse_cell)]
    pub end: Option<Cell>,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show maze info, statistics and debug logs
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only print the solved maze
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum AlgorithmChoice {
    Dfs,
    Bfs,
    #[default]
    Both,
}

impl AlgorithmChoice {
    /// Algorithms to run, DFS first when both are requested.
    pub fn algorithms(self) -> Vec<Algorithm> {
        match self {
            AlgorithmChoice::Dfs => vec![Algorithm::Dfs],
            AlgorithmChoice::Bfs => vec![Algorithm::Bfs],
            AlgorithmChoice::Both => Algorithm::ALL.to_vec(),
        }
    }
}

use mazepath_core::{Algorithm, Cell, DfsMode, MazeSolver, SearchOutcome, render_solution};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct JsonOutput {
    pub query: JsonQuery,
    pub result: JsonResult,
    pub stats: JsonStats,
}

#[derive(Serialize, Deserialize)]
pub struct JsonQuery {
    pub algorithm: Algorithm,
    pub rows: usize,
    pub cols: usize,
    pub start: Cell,
    pub end: Cell,
    pub recursive_dfs: bool,
}

#[derive(Serialize, Deserialize)]
pub struct JsonResult {
    pub found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<Vec<Cell>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub steps: Option<usize>,
    pub rendered: Vec<String>,
}

#[derive(Serialize, Deserialize)]
pub struct JsonStats {
    pub search_time_ms: f64,
    pub cells_explored: usize,
}

pub fn create_json_output(outcome: &SearchOutcome, solver: &MazeSolver) -> JsonOutput {
    let grid = solver.grid();
    let found = outcome.found();

    let rendered = render_solution(grid, solver.start(), solver.end(), &outcome.path)
        .lines()
        .map(str::to_string)
        .collect();

    JsonOutput {
        query: JsonQuery {
            algorithm: outcome.algorithm,
            rows: grid.rows(),
            cols: grid.cols(),
            start: solver.start(),
            end: solver.end(),
            recursive_dfs: solver.config().dfs_mode == DfsMode::Recursive,
        },
        result: JsonResult {
            found,
            path: found.then(|| outcome.path.clone()),
            steps: found.then(|| outcome.step_count()),
            rendered,
        },
        stats: JsonStats {
            search_time_ms: outcome.search_duration * 1000.0,
            cells_explored: outcome.cells_visited,
        },
    }
}

pub fn print_json_output(json_outputs: &[JsonOutput]) {
    match serde_json::to_string_pretty(json_outputs) {
        Ok(json_string) => println!("{}", json_string),
        Err(e) => eprintln!("Error serializing to JSON: {}", e),
    }
}

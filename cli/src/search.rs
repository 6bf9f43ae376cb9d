use mazepath_core::{MazeSolver, SearchOutcome};
use tracing::info;

use crate::args::AlgorithmChoice;

/// Runs every requested algorithm against the solver, in order.
pub fn run_searches(solver: &MazeSolver, choice: AlgorithmChoice) -> Vec<SearchOutcome> {
    choice
        .algorithms()
        .into_iter()
        .map(|algorithm| {
            let outcome = solver.solve(algorithm);
            info!(
                algorithm = %algorithm,
                found = outcome.found(),
                path_len = outcome.path.len(),
                cells_visited = outcome.cells_visited,
                "search finished"
            );
            outcome
        })
        .collect()
}

use mazepath_core::{MazeSolver, serpentine_maze};
use std::time::Instant;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let grid = serpentine_maze(401, 400);
    println!(
        "🚀 Benchmarking on a {}x{} serpentine maze...\n",
        grid.rows(),
        grid.cols()
    );

    let build_timer = Instant::now();
    let solver = MazeSolver::new(grid)?;
    println!(
        "Graph built in {:.3} ms ({} open cells)",
        build_timer.elapsed().as_secs_f64() * 1000.0,
        solver.graph().len()
    );

    for outcome in [solver.solve_dfs(), solver.solve_bfs()] {
        println!(
            "{:>4}: path of {} cells, {} cells visited, {:.3} ms",
            outcome.algorithm.label(),
            outcome.path.len(),
            outcome.cells_visited,
            outcome.search_duration * 1000.0
        );
    }

    Ok(())
}

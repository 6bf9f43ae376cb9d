use mazepath_core::{
    DfsMode, MazeSolver, NO_SOLUTION, SearchOutcome, format_tile_rows, tile_grid,
};

use crate::app::MazePathApp;
use crate::args::Args;
use crate::colors::ColorScheme;
use crate::utils::format_number;

pub fn display_search_info(app: &MazePathApp, solver: &MazeSolver, colors: &ColorScheme) {
    let grid = solver.grid();
    println!(
        "🧩 Solving {}x{} maze from {}",
        colors.number(&grid.rows().to_string()),
        colors.number(&grid.cols().to_string()),
        app.describe_source()
    );
    println!(
        "📍 Start {} → end {}",
        colors.endpoint(&solver.start().to_string()),
        colors.endpoint(&solver.end().to_string())
    );

    if solver.config().dfs_mode == DfsMode::Recursive {
        println!("⚙️  Using recursive DFS");
    }

    println!("🔍 Searching...\n");
}

pub fn display_search_results(
    outcomes: &[SearchOutcome],
    solver: &MazeSolver,
    args: &Args,
    colors: &ColorScheme,
) {
    print!("{}", format_search_results(outcomes, solver, args, colors));
}

/// Everything printed after the search: a heading per algorithm unless
/// quiet, the solved maze, and statistics when verbose. Outcomes are
/// separated by a blank line.
pub fn format_search_results(
    outcomes: &[SearchOutcome],
    solver: &MazeSolver,
    args: &Args,
    colors: &ColorScheme,
) -> String {
    let mut output = String::new();
    for (index, outcome) in outcomes.iter().enumerate() {
        if index > 0 {
            output.push('\n');
        }
        if !args.quiet {
            let heading = format!("{} Solution:", outcome.algorithm.label());
            output.push_str(&format!("{}\n", colors.heading(&heading)));
        }

        output.push_str(&format_solution(outcome, solver, colors));

        if args.verbose {
            output.push_str(&format_search_statistics(outcome, colors));
        }
    }
    output
}

/// The solved maze, one space-separated row per line, or the no-solution
/// message when the search came back empty.
pub fn format_solution(
    outcome: &SearchOutcome,
    solver: &MazeSolver,
    colors: &ColorScheme,
) -> String {
    if !outcome.found() {
        return format!("{}\n", colors.error(NO_SOLUTION));
    }

    let tiles = tile_grid(solver.grid(), solver.start(), solver.end(), &outcome.path);
    format_tile_rows(&tiles, |tile| colors.tile(tile))
}

fn format_search_statistics(outcome: &SearchOutcome, colors: &ColorScheme) -> String {
    let mut output = String::new();
    if outcome.found() {
        output.push_str(&format!(
            "{} Path with {} steps\n",
            colors.success("✅"),
            colors.number(&outcome.step_count().to_string())
        ));
    }
    output.push_str(&format!(
        "{} Explored {} cells in {} sec\n",
        colors.stats("📊"),
        colors.number(&format_number(outcome.cells_visited)),
        colors.number(&format!("{:.6}", outcome.search_duration))
    ));
    output
}

use clap::Parser;
use mazepath::colors::ColorScheme;
use mazepath::display::{display_search_info, display_search_results};
use mazepath::json_output::{JsonOutput, create_json_output, print_json_output};
use mazepath::logging::init_logging;
use mazepath::{Args, MazePathApp, run_searches};
use std::error::Error;

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);
    let colors = ColorScheme::new(!args.no_color);

    if let Err(error) = run(args, &colors) {
        eprintln!("{}", colors.error(&format!("❌ Error: {}", error)));
        std::process::exit(1);
    }
}

fn run(args: Args, colors: &ColorScheme) -> Result<(), Box<dyn Error>> {
    let app = MazePathApp::new(args.maze.clone())?;
    let solver = app.build_solver(&args)?;

    if args.json {
        let outcomes = run_searches(&solver, args.algorithm);
        let json_outputs: Vec<JsonOutput> = outcomes
            .iter()
            .map(|outcome| create_json_output(outcome, &solver))
            .collect();
        print_json_output(&json_outputs);
        return Ok(());
    }

    if args.verbose {
        display_search_info(&app, &solver, colors);
    }

    let outcomes = run_searches(&solver, args.algorithm);
    display_search_results(&outcomes, &solver, &args, colors);
    Ok(())
}

mod format;

use clap::Parser;
use mazepath::{AlgorithmChoice, Args, MazePathApp, parse_cell, run_searches};
use mazepath_core::{Algorithm, Cell, DfsMode, MazeSolver, sample_maze};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_args_defaults() {
    let args = Args::try_parse_from(["mazepath"]).unwrap();

    assert!(args.maze.is_none());
    assert_eq!(args.algorithm, AlgorithmChoice::Both);
    assert!(!args.recursive);
    assert!(args.start.is_none());
}

#[test]
fn test_args_full() {
    let args = Args::try_parse_from([
        "mazepath",
        "maze.txt",
        "--algorithm",
        "dfs",
        "--recursive",
        "--start",
        "1,2",
        "--end",
        "3, 4",
        "--json",
        "-v",
    ])
    .unwrap();

    assert_eq!(args.maze.as_deref(), Some(std::path::Path::new("maze.txt")));
    assert_eq!(args.algorithm, AlgorithmChoice::Dfs);
    assert!(args.recursive);
    assert_eq!(args.start, Some(Cell::new(1, 2)));
    assert_eq!(args.end, Some(Cell::new(3, 4)));
    assert!(args.json);
    assert!(args.verbose);
}

#[test]
fn test_args_quiet_conflicts_with_verbose() {
    assert!(Args::try_parse_from(["mazepath", "-v", "-q"]).is_err());
    assert!(Args::try_parse_from(["mazepath", "--quiet", "--verbose"]).is_err());
    assert!(Args::try_parse_from(["mazepath", "-q"]).unwrap().quiet);
}

#[test]
fn test_args_reject_bad_cell() {
    assert!(Args::try_parse_from(["mazepath", "--start", "1"]).is_err());
    assert!(Args::try_parse_from(["mazepath", "--end", "a,b"]).is_err());
}

#[test]
fn test_parse_cell() {
    assert_eq!(parse_cell("0,0"), Ok(Cell::new(0, 0)));
    assert_eq!(parse_cell(" 4 , 7 "), Ok(Cell::new(4, 7)));
    assert!(parse_cell("4").unwrap_err().contains("ROW,COL"));
    assert!(parse_cell("-1,2").unwrap_err().contains("invalid row"));
}

#[test]
fn test_algorithm_choice_order() {
    assert_eq!(AlgorithmChoice::Both.algorithms(), vec![Algorithm::Dfs, Algorithm::Bfs]);
    assert_eq!(AlgorithmChoice::Bfs.algorithms(), vec![Algorithm::Bfs]);
}

#[test]
fn test_run_searches_both() {
    let solver = MazeSolver::new(sample_maze()).unwrap();

    let outcomes = run_searches(&solver, AlgorithmChoice::Both);

    assert_eq!(outcomes.len(), 2);
    assert_eq!(outcomes[0].algorithm, Algorithm::Dfs);
    assert_eq!(outcomes[1].algorithm, Algorithm::Bfs);
    assert!(outcomes[1].path.len() <= outcomes[0].path.len());
}

#[test]
fn test_app_uses_sample_maze_by_default() {
    let args = Args::try_parse_from(["mazepath"]).unwrap();
    let app = MazePathApp::new(None).unwrap();

    let solver = app.build_solver(&args).unwrap();

    assert_eq!(solver.grid(), &sample_maze());
    assert_eq!(app.describe_source(), "built-in sample maze");
}

#[test]
fn test_app_loads_maze_file_with_endpoints() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "0 0 0").unwrap();
    writeln!(file, "1 1 0").unwrap();
    file.flush().unwrap();

    let path = file.path().to_string_lossy().to_string();
    let args = Args::try_parse_from([
        "mazepath",
        path.as_str(),
        "--start",
        "1,2",
        "--end",
        "0,0",
        "--recursive",
    ])
    .unwrap();
    let app = MazePathApp::new(args.maze.clone()).unwrap();

    let solver = app.build_solver(&args).unwrap();

    assert_eq!(solver.start(), Cell::new(1, 2));
    assert_eq!(solver.end(), Cell::new(0, 0));
    assert_eq!(solver.config().dfs_mode, DfsMode::Recursive);
    assert_eq!(
        solver.solve_dfs().path,
        vec![Cell::new(1, 2), Cell::new(0, 2), Cell::new(0, 1), Cell::new(0, 0)]
    );
}

#[test]
fn test_app_missing_file() {
    let result = MazePathApp::new(Some("/nonexistent/maze.txt".into()));

    assert!(result.is_err());
}

#[test]
fn test_app_rejects_out_of_bounds_endpoint() {
    let args = Args::try_parse_from(["mazepath", "--end", "9,9"]).unwrap();
    let app = MazePathApp::new(None).unwrap();

    let error = app.build_solver(&args).unwrap_err();

    assert!(error.to_string().contains("outside the 5x5 grid"));
}

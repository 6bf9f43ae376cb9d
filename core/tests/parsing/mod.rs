
use mazepath_core::{Cell, load_maze, parse_maze_json, parse_maze_text, sample_maze};
use std::io::Write;
use tempfile::{Builder, NamedTempFile};

#[test]
fn test_parse_space_separated_digits() {
    let grid = parse_maze_text("0 1 0\n0 1 0\n0 0 0\n").unwrap();

    assert_eq!(grid.rows(), 3);
    assert_eq!(grid.cols(), 3);
    assert!(!grid.is_open(Cell::new(1, 1)));
    assert!(grid.is_open(Cell::new(2, 1)));
}

#[test]
fn test_parse_equivalent_notations() {
    let digits = parse_maze_text("010\n000").unwrap();
    let commas = parse_maze_text("0,1,0\n0,0,0").unwrap();
    let symbols = parse_maze_text(".#.\n...").unwrap();

    assert_eq!(digits, commas);
    assert_eq!(digits, symbols);
}

#[test]
fn test_parse_skips_blank_and_comment_lines() {
    let input = "// sample maze\n\n0 1\n; second row\n0 0\n\n";

    let grid = parse_maze_text(input).unwrap();

    let expected: Vec<Vec<u8>> = vec![vec![0, 1], vec![0, 0]];
    assert_eq!(grid.as_rows(), expected.as_slice());
}

#[test]
fn test_parse_json_maze() {
    let json = concat!(
        "[[0, 1, 0, 0, 0], [0, 1, 0, 1, 0], [0, 0, 0, 1, 0], ",
        "[1, 1, 1, 1, 0], [0, 0, 0, 0, 0]]"
    );
    let grid = parse_maze_json(json).unwrap();

    assert_eq!(grid, sample_maze());
}

#[test]
fn test_load_text_maze_file() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "0 1 0").unwrap();
    writeln!(file, "0 0 0").unwrap();
    file.flush().unwrap();

    let grid = load_maze(file.path()).unwrap();

    let expected: Vec<Vec<u8>> = vec![vec![0, 1, 0], vec![0, 0, 0]];
    assert_eq!(grid.as_rows(), expected.as_slice());
}

#[test]
fn test_load_json_maze_file() {
    let mut file = Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, "[[0, 0], [1, 0]]").unwrap();
    file.flush().unwrap();

    let grid = load_maze(file.path()).unwrap();

    let expected: Vec<Vec<u8>> = vec![vec![0, 0], vec![1, 0]];
    assert_eq!(grid.as_rows(), expected.as_slice());
}

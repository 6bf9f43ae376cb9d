use crate::error::MazeError;
use crate::grid::{Grid, OPEN, WALL};
use std::path::Path;
use tracing::debug;

/// Parses a maze drawn as text, one row per line.
///
/// Cells are `0`/`.` for open floor and `1`/`#` for walls; spaces and commas
/// between cells are ignored, so `0 1 0`, `0,1,0`, `010` and `.#.` are the
/// same row. Blank lines and lines starting with `//` or `;` are skipped.
pub fn parse_maze_text(input: &str) -> Result<Grid, MazeError> {
    let mut rows = Vec::new();

    for (line_index, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") || line.starts_with(';') {
            continue;
        }
        rows.push(parse_row(line, line_index + 1)?);
    }

    Ok(Grid::new(rows)?)
}

fn parse_row(line: &str, line_number: usize) -> Result<Vec<u8>, MazeError> {
    line.chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| match c {
            '0' | '.' => Ok(OPEN),
            '1' | '#' => Ok(WALL),
            other => Err(MazeError::parse(
                Some(line_number),
                format!("unexpected character '{}'", other),
            )),
        })
        .collect()
}

/// Parses a JSON array of rows, e.g. `[[0, 1], [0, 0]]`.
pub fn parse_maze_json(input: &str) -> Result<Grid, MazeError> {
    let rows: Vec<Vec<u8>> = serde_json::from_str(input)
        .map_err(|err| MazeError::parse(Some(err.line()), err.to_string()))?;

    Ok(Grid::new(rows)?)
}

/// Reads a maze file, as JSON when the extension is `.json` and as text
/// otherwise.
pub fn load_maze(maze_path: &Path) -> Result<Grid, MazeError> {
    let contents = std::fs::read_to_string(maze_path)?;

    let is_json = maze_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    let grid = if is_json {
        parse_maze_json(&contents)?
    } else {
        parse_maze_text(&contents)?
    };

    debug!(
        path = %maze_path.display(),
        rows = grid.rows(),
        cols = grid.cols(),
        "loaded maze"
    );
    Ok(grid)
}

use mazepath_core::{
    Cell, Grid, MazeSolver, NO_SOLUTION, Tile, format_tile_rows, render_solution, sample_maze,
    tile_grid,
};

#[test]
fn test_render_sample_maze_solution() {
    let solver = MazeSolver::new(sample_maze()).unwrap();
    let outcome = solver.solve_dfs();

    let rendered = render_solution(solver.grid(), solver.start(), solver.end(), &outcome.path);

    let expected = concat!(
        "S # . . . \n",
        ". # . # . \n",
        ". . . # . \n",
        "# # # # . \n",
        "        E \n",
    );
    assert_eq!(rendered, expected);
}

#[test]
fn test_render_open_cells_off_path_are_blank() {
    let solver = MazeSolver::from_rows(vec![vec![0, 1, 0], vec![0, 1, 0], vec![0, 0, 0]]).unwrap();
    let outcome = solver.solve_bfs();

    let rendered = render_solution(solver.grid(), solver.start(), solver.end(), &outcome.path);

    assert_eq!(rendered, "S #   \n. #   \n. . E \n");
}

#[test]
fn test_render_empty_path_reports_no_solution() {
    let grid = Grid::new(vec![vec![0, 1], vec![1, 0]]).unwrap();

    let rendered = render_solution(&grid, Cell::new(0, 0), Cell::new(1, 1), &[]);

    assert_eq!(rendered, format!("{}\n", NO_SOLUTION));
    assert_eq!(NO_SOLUTION, "No solution found.");
}

#[test]
fn test_tile_precedence() {
    let grid = Grid::new(vec![vec![1, 0], vec![0, 0]]).unwrap();
    let path = vec![Cell::new(0, 0), Cell::new(0, 1), Cell::new(1, 1)];

    // Start marker wins even over a wall value.
    let tiles = tile_grid(&grid, Cell::new(0, 0), Cell::new(1, 1), &path);

    assert_eq!(
        tiles,
        vec![vec![Tile::Start, Tile::Path], vec![Tile::Open, Tile::End]]
    );
}

#[test]
fn test_tile_symbols() {
    let symbols: String = [Tile::Start, Tile::End, Tile::Path, Tile::Wall, Tile::Open]
        .iter()
        .map(|tile| tile.symbol())
        .collect();

    assert_eq!(symbols, "SE.# ");
}

#[test]
fn test_format_tile_rows_uses_tile_renderer() {
    let tiles = vec![
        vec![Tile::Start, Tile::Wall],
        vec![Tile::Path, Tile::End],
    ];

    let plain = format_tile_rows(&tiles, Tile::symbol);
    let bracketed = format_tile_rows(&tiles, |tile| format!("[{}]", tile.symbol()));

    assert_eq!(plain, "S # \n. E \n");
    assert_eq!(bracketed, "[S] [#] \n[.] [E] \n");
}

#[test]
fn test_format_tile_rows_empty() {
    assert_eq!(format_tile_rows(&[], Tile::symbol), "");
}

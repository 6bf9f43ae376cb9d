use crate::grid::Grid;

pub const SAMPLE_MAZE: [[u8; 5]; 5] = [
    [0, 1, 0, 0, 0],
    [0, 1, 0, 1, 0],
    [0, 0, 0, 1, 0],
    [1, 1, 1, 1, 0],
    [0, 0, 0, 0, 0],
];

/// The bundled 5x5 demo maze. It has a route from corner to corner.
pub fn sample_maze() -> Grid {
    let rows = SAMPLE_MAZE.iter().map(|row| row.to_vec()).collect();
    Grid::new(rows).expect("sample maze is rectangular and binary")
}

/// Serpentine maze: full open rows joined by a single gap that alternates
/// between the right and left edge, so the only route walks every open cell.
///
/// `rows` and `cols` must both be at least 1.
pub fn serpentine_maze(rows: usize, cols: usize) -> Grid {
    let cells = (0..rows)
        .map(|row| {
            if row % 2 == 0 {
                return vec![0; cols];
            }
            let mut wall = vec![1; cols];
            let gap = if row % 4 == 1 { cols - 1 } else { 0 };
            wall[gap] = 0;
            wall
        })
        .collect();

    Grid::new(cells).expect("serpentine maze is rectangular and binary")
}

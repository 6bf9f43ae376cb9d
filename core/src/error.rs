//! Error types for maze construction and loading.
//!
//! An unreachable end cell is not an error: searches report it as an empty
//! path. These variants cover input that cannot be searched at all.

use std::fmt;

use crate::grid::Cell;

/// Why a grid was rejected before any traversal started.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MalformedGrid {
    /// The grid has no rows.
    NoRows,

    /// The grid has rows but they hold no cells.
    NoColumns,

    /// A row length differs from the first row.
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// A cell holds something other than 0 (open) or 1 (wall).
    InvalidCell {
        /// Position of the offending cell.
        cell: Cell,
        /// The value found there.
        value: u8,
    },

    /// A start or end cell lies outside the grid.
    EndpointOutOfBounds {
        /// The requested endpoint.
        cell: Cell,
        /// Grid height.
        rows: usize,
        /// Grid width.
        cols: usize,
    },
}

impl fmt::Display for MalformedGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoRows => write!(f, "grid has no rows"),
            Self::NoColumns => write!(f, "grid has no columns"),
            Self::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {} has {} cells, expected {}",
                row, found, expected
            ),
            Self::InvalidCell { cell, value } => {
                write!(f, "cell {} holds {}, expected 0 or 1", cell, value)
            }
            Self::EndpointOutOfBounds { cell, rows, cols } => write!(
                f,
                "endpoint {} is outside the {}x{} grid",
                cell, rows, cols
            ),
        }
    }
}

/// Errors raised while building or loading a maze.
#[derive(Debug)]
pub enum MazeError {
    /// Structurally invalid grid or endpoints.
    MalformedGrid(MalformedGrid),

    /// Maze text or JSON could not be parsed.
    Parse {
        /// 1-based line number, when known.
        line: Option<usize>,
        /// What went wrong.
        message: String,
    },

    /// Maze file could not be read.
    Io(std::io::Error),
}

impl MazeError {
    pub fn parse(line: Option<usize>, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            message: message.into(),
        }
    }

    pub fn is_malformed_grid(&self) -> bool {
        matches!(self, Self::MalformedGrid(_))
    }
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedGrid(reason) => write!(f, "malformed grid: {}", reason),
            Self::Parse {
                line: Some(line),
                message,
            } => write!(f, "parse error on line {}: {}", line, message),
            Self::Parse {
                line: None,
                message,
            } => write!(f, "parse error: {}", message),
            Self::Io(err) => write!(f, "failed to read maze: {}", err),
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<MalformedGrid> for MazeError {
    fn from(reason: MalformedGrid) -> Self {
        Self::MalformedGrid(reason)
    }
}

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

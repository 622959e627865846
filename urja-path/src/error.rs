//! Error types for UrjaPath

use thiserror::Error;

/// UrjaPath error type
///
/// An unreachable destination is not an error; the search reports it
/// through its result. These variants cover malformed input and the
/// driver's file and configuration handling.
#[derive(Error, Debug)]
pub enum UrjaError {
    #[error("Grid is empty")]
    EmptyGrid,

    #[error("Row {row} has {found} cells, expected {expected}")]
    JaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("Grid of {rows}x{cols} needs {expected} cells, found {found}")]
    CellCountMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        found: usize,
    },

    #[error("Grid of {rows}x{cols} cells is too large")]
    GridTooLarge { rows: usize, cols: usize },

    #[error("Invalid cell cost {value} at ({row}, {col})")]
    InvalidCost { row: usize, col: usize, value: i32 },

    #[error("Parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_yaml::Error> for UrjaError {
    fn from(e: serde_yaml::Error) -> Self {
        UrjaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, UrjaError>;

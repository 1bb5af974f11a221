//! Error types for Gridmean core.

use thiserror::Error;

/// Validation failure for a caller-supplied grid.
///
/// Only raised for user input; generated grids are always valid, and
/// degenerate generation parameters clamp instead of failing.
#[derive(Error, Debug, PartialEq)]
pub enum InvalidGridError {
    #[error("grid has no columns; supply at least one column, or leave the grid override unset")]
    Empty,

    #[error(
        "columns have unequal heights: column {column} has {found} cells, expected {expected}; every column must be the same height"
    )]
    Jagged {
        column: usize,
        expected: usize,
        found: usize,
    },

    #[error(
        "cell at column {column}, row {row} is not numeric ({value}); cells must be integers or floats"
    )]
    NonNumeric {
        column: usize,
        row: usize,
        value: String,
    },
}

pub type Result<T> = std::result::Result<T, InvalidGridError>;

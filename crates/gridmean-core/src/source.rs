//! Grid sources: validation of caller-supplied grids.

use crate::error::{InvalidGridError, Result};
use gridmean_engine::engine::{Grid, Value};

/// A loosely typed cell as supplied by the caller, before validation.
///
/// `Other` holds anything that is not a number, carrying a rendering of
/// the original token for error messages.
#[derive(Clone, Debug)]
pub enum CellInput {
    Int(i64),
    Float(f64),
    Other(String),
}

/// Validate a caller-supplied column-major grid.
///
/// Checks the grid invariants in order: at least one column, every
/// column the same height, every cell numeric. The first violation is
/// reported; a grid whose columns are all empty is valid.
pub fn validate(columns: &[Vec<CellInput>]) -> Result<Grid<Value>> {
    if columns.is_empty() {
        return Err(InvalidGridError::Empty);
    }

    let expected = columns[0].len();
    let mut out: Vec<Vec<Value>> = Vec::with_capacity(columns.len());

    for (col, column) in columns.iter().enumerate() {
        if column.len() != expected {
            return Err(InvalidGridError::Jagged {
                column: col,
                expected,
                found: column.len(),
            });
        }

        let mut cells = Vec::with_capacity(column.len());
        for (row, cell) in column.iter().enumerate() {
            match cell {
                CellInput::Int(n) => cells.push(Value::Int(*n)),
                CellInput::Float(x) => cells.push(Value::Float(*x)),
                CellInput::Other(token) => {
                    return Err(InvalidGridError::NonNumeric {
                        column: col,
                        row,
                        value: token.clone(),
                    });
                }
            }
        }
        out.push(cells);
    }

    Ok(Grid::from_columns(out))
}

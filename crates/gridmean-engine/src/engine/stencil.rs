//! Neighbour lookup and stencil averaging.

use super::grid::Grid;
use super::value::Value;

/// Collect the in-bounds orthogonal neighbours of a cell.
///
/// Order is fixed: previous column, next column, previous row, next row.
/// Out-of-bounds neighbours are skipped, never padded or wrapped, so
/// corners yield 2 values, edges 3, and interior cells 4.
pub fn neighbours(grid: &Grid<Value>, col: usize, row: usize) -> Vec<Value> {
    let mut found = Vec::with_capacity(4);

    if col > 0 {
        found.push(grid[(col - 1, row)]);
    }
    if col + 1 < grid.width() {
        found.push(grid[(col + 1, row)]);
    }
    if row > 0 {
        found.push(grid[(col, row - 1)]);
    }
    if row + 1 < grid.height() {
        found.push(grid[(col, row + 1)]);
    }

    found
}

/// Mean of a cell together with its in-bounds neighbours.
/// Always floating point, even for all-integer grids.
pub fn cell_average(grid: &Grid<Value>, col: usize, row: usize) -> f64 {
    let mut values = neighbours(grid, col, row);
    values.push(grid[(col, row)]);

    let sum: f64 = values.iter().map(|value| value.as_f64()).sum();
    sum / values.len() as f64
}

/// Replace every cell with the mean of itself and its neighbours.
/// Produces a new grid of the same shape; the input is left untouched.
pub fn transform(grid: &Grid<Value>) -> Grid<Value> {
    grid.map_cells(|col, row, _| Value::Float(cell_average(grid, col, row)))
}

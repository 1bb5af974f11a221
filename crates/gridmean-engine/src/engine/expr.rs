//! Expression grids: the arithmetic behind each averaged cell, as text.

use super::grid::Grid;
use super::stencil::neighbours;
use super::value::Value;

/// Display width every expression is padded to, for tabular alignment.
pub const EXPR_WIDTH: usize = 30;

/// Spell out the sum-then-divide computation for every cell.
///
/// Terms appear in neighbour order with the cell's own value last, so
/// each expression mirrors exactly what [`transform`](super::transform)
/// computes for that cell.
pub fn expression_grid(grid: &Grid<Value>) -> Grid<String> {
    grid.map_cells(|col, row, value| {
        let mut terms = neighbours(grid, col, row);
        terms.push(*value);

        let sum = terms
            .iter()
            .map(|term| term.to_string())
            .collect::<Vec<_>>()
            .join(" + ");

        let expression = format!("({}) / {}", sum, terms.len());
        format!("{:<width$}", expression, width = EXPR_WIDTH)
    })
}

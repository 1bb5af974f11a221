//! Plain-text console rendering.

use super::GridRenderer;
use gridmean_engine::engine::Grid;
use std::io::{self, Write};

/// Column width for plain-text cells.
const CELL_WIDTH: usize = 10;

/// Fixed-width text renderer, one display row per line.
///
/// Rows print bottom-to-top relative to internal storage, each cell
/// right-aligned to [`CELL_WIDTH`] characters. Cells wider than that
/// (expression strings) pass through unpadded.
pub struct TextRenderer;

impl GridRenderer for TextRenderer {
    fn render(&self, grid: &Grid<String>, out: &mut dyn Write) -> io::Result<()> {
        for row in (0..grid.height()).rev() {
            let mut line = String::new();
            for col in 0..grid.width() {
                line.push_str(&format!("{:>width$}", grid[(col, row)], width = CELL_WIDTH));
            }
            writeln!(out)?;
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::display_grid;
    use gridmean_engine::engine::Value;

    #[test]
    fn prints_rows_bottom_to_top() {
        let grid = Grid::from_columns(vec![
            vec![Value::Int(1), Value::Int(2)],
            vec![Value::Int(3), Value::Int(4)],
        ]);
        let mut out = Vec::new();
        TextRenderer.render(&display_grid(&grid), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        assert_eq!(lines, vec!["         2         4", "         1         3"]);
    }

    #[test]
    fn renders_nothing_for_zero_rows() {
        let grid: Grid<String> = Grid::from_columns(vec![vec![], vec![]]);
        let mut out = Vec::new();
        TextRenderer.render(&grid, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "");
    }
}

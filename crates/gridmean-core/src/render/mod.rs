//! Grid rendering to a display surface.
//!
//! Renderers consume grids of display strings; numeric grids are
//! converted first via [`display_grid`], which is the only place values
//! are rounded. Both implementations share the same orientation: the
//! column-major storage is transposed for display and rows are printed
//! bottom-to-top, so internal row 0 ends up on the last line.

mod md;
mod text;

pub use md::MarkdownRenderer;
pub use text::TextRenderer;

use gridmean_engine::engine::{Grid, Value, format_value};
use std::io::{self, Write};

/// Renders a grid of display strings to an output surface.
///
/// Implementations decide the layout; callers pick one per invocation.
pub trait GridRenderer {
    fn render(&self, grid: &Grid<String>, out: &mut dyn Write) -> io::Result<()>;
}

/// Convert a numeric grid into display strings (render-time rounding).
pub fn display_grid(grid: &Grid<Value>) -> Grid<String> {
    grid.map_cells(|_, _, value| format_value(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding_happens_only_at_display_time() {
        let grid = Grid::from_columns(vec![vec![Value::Int(1), Value::Float(7.0 / 3.0)]]);
        let display = display_grid(&grid);
        assert_eq!(display[(0, 0)], "1");
        assert_eq!(display[(0, 1)], "2.33");
    }
}

//! Markdown table rendering.

use super::GridRenderer;
use gridmean_engine::engine::Grid;
use std::io::{self, Write};

/// Markdown table renderer.
///
/// Header row carries the column indices; a leading index column numbers
/// the display rows top-down. Orientation matches [`super::TextRenderer`]:
/// transposed, rows bottom-to-top relative to internal storage.
pub struct MarkdownRenderer;

impl GridRenderer for MarkdownRenderer {
    fn render(&self, grid: &Grid<String>, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out)?;

        if grid.height() == 0 {
            writeln!(out, "*empty grid*")?;
            return Ok(());
        }

        // Header row with column indices
        write!(out, "|   |")?;
        for col in 0..grid.width() {
            write!(out, " {} |", col)?;
        }
        writeln!(out)?;

        // Separator row
        write!(out, "|---|")?;
        for _ in 0..grid.width() {
            write!(out, "---|")?;
        }
        writeln!(out)?;

        // Data rows, bottom-to-top
        for (line, row) in (0..grid.height()).rev().enumerate() {
            write!(out, "| {} |", line)?;
            for col in 0..grid.width() {
                write!(out, " {} |", escape_markdown(&grid[(col, row)]))?;
            }
            writeln!(out)?;
        }

        Ok(())
    }
}

/// Escape special markdown characters in cell content
fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|")
}

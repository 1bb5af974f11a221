//! The prompt loop and single-run execution.
//!
//! A run sources a grid (configured override or random), then renders
//! three grids in sequence through the chosen renderer: the original,
//! the expressions behind each average, and the averaged result.

use anyhow::Context;
use std::fs::File;
use std::io::{self, BufRead, Write};
use std::path::Path;

use gridmean_core::{Grid, GridRenderer, MarkdownRenderer, TextRenderer, Value, display_grid, source};
use gridmean_engine::engine::{expression_grid, transform};

use crate::config::Config;

/// What a prompt response asks for.
#[derive(Clone, Copy, Debug, PartialEq)]
enum Action {
    /// Generate and display with the plain text renderer.
    RenderText,
    /// Generate and display with the markdown table renderer.
    RenderTable,
    /// End the loop.
    Stop,
}

/// Anything other than the two render responses stops the loop.
fn parse_response(input: &str) -> Action {
    match input.trim().to_ascii_uppercase().as_str() {
        "Y" => Action::RenderText,
        "M" => Action::RenderTable,
        _ => Action::Stop,
    }
}

/// Produce the source grid: the configured override (validated) or a
/// fresh random grid.
fn source_grid(config: &Config) -> anyhow::Result<Grid<Value>> {
    match &config.grid {
        Some(columns) => Ok(source::validate(columns)?),
        None => Ok(Grid::random(
            config.columns,
            config.rows,
            config.min_value,
            config.max_value,
        )),
    }
}

/// One full run through the chosen renderer.
pub fn run_once(
    config: &Config,
    renderer: &dyn GridRenderer,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    let grid = source_grid(config)?;
    log::debug!("processing a {}x{} grid", grid.width(), grid.height());

    renderer.render(&display_grid(&grid), out)?;
    renderer.render(&expression_grid(&grid), out)?;
    renderer.render(&display_grid(&transform(&grid)), out)?;
    Ok(())
}

/// Run once and write the three grids to a markdown file.
pub fn export_markdown(config: &Config, path: &Path) -> anyhow::Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    run_once(config, &MarkdownRenderer, &mut file)
}

/// The interactive loop: prompt, execute, repeat until a stop response.
pub fn run_interactive(config: &Config) -> anyhow::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    if let Some(path) = crate::config::user_config_path() {
        writeln!(
            stdout,
            "Grid size and value range come from {} (or --config).",
            path.display()
        )?;
    }

    prompt_loop(config, &mut stdin.lock(), &mut stdout)
}

/// Loop body, parameterised over input and output for testing.
fn prompt_loop(
    config: &Config,
    input: &mut dyn BufRead,
    out: &mut dyn Write,
) -> anyhow::Result<()> {
    loop {
        writeln!(out)?;
        writeln!(out, "Generate and process a random grid? [Y/M/N]")?;
        writeln!(out, "  Y: yes, plain text")?;
        writeln!(out, "  M: yes, as a markdown table")?;
        writeln!(out, "  N: no, stop")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            // End of input behaves like a stop response.
            return Ok(());
        }

        match parse_response(&line) {
            Action::RenderText => run_once(config, &TextRenderer, out)?,
            Action::RenderTable => run_once(config, &MarkdownRenderer, out)?,
            Action::Stop => return Ok(()),
        }
    }
}

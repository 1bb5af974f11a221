//! gridmean-core - grid sources and rendering sinks around the stencil engine.

pub mod error;
pub mod render;
pub mod source;

pub use error::{InvalidGridError, Result};
pub use render::{GridRenderer, MarkdownRenderer, TextRenderer, display_grid};
pub use source::CellInput;

pub use gridmean_engine::engine::{Grid, Value};

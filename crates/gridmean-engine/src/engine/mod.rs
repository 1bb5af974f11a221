//! Stencil engine API.
//!
//! This module provides the core computation for grid averaging:
//!
//! - [`Value`], [`Grid`] - Numeric cell values and column-major grid storage
//! - [`neighbours`] - In-bounds orthogonal neighbour lookup
//! - [`cell_average`], [`transform`] - Stencil averaging
//! - [`expression_grid`] - Textual rendering of each cell's computation
//! - [`format_value`] - Format values for display

mod expr;
mod format;
mod grid;
mod stencil;
mod value;

pub use expr::{EXPR_WIDTH, expression_grid};
pub use format::{format_number, format_value};
pub use grid::Grid;
pub use stencil::{cell_average, neighbours, transform};
pub use value::Value;

//! Display formatting for cell values.

use super::value::Value;

/// Format a cell value for display.
///
/// Integers print as-is; floats are rounded to two decimal places.
/// Rounding happens only here, never in the stencil itself.
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Int(n) => n.to_string(),
        Value::Float(x) => format_number(*x),
    }
}

/// Format a float for display.
pub fn format_number(x: f64) -> String {
    if x.is_nan() {
        "#NAN!".to_string()
    } else if x.is_infinite() {
        "#INF!".to_string()
    } else {
        format!("{:.2}", x)
    }
}

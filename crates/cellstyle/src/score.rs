//! Helpers around match scores.
//!
//! Scores reach the grid as whole-number percentages derived from a
//! similarity fraction, and grid cells hand them back as loosely typed
//! JSON values. These helpers cover both directions.

use serde_json::Value;

use crate::style::CellStyle;
use crate::tier::style_for;

/// Converts a similarity fraction (`0.0..=1.0`) to a whole-number percent.
///
/// Halves round to the nearest even number, so `0.125` becomes `12` and
/// `0.375` becomes `38`.
///
/// ```rust
/// use cellstyle::similarity_percent;
///
/// assert_eq!(similarity_percent(0.873), 87.0);
/// assert_eq!(similarity_percent(1.0), 100.0);
/// ```
pub fn similarity_percent(fraction: f64) -> f64 {
    (fraction * 100.0).round_ties_even()
}

/// Formats a score the way the match column displays it: `"87%"`.
pub fn format_percent(score: f64) -> String {
    // -0.0 would otherwise print as "-0"
    let score = if score == 0.0 { 0.0 } else { score };
    format!("{}%", score)
}

/// Extracts a numeric score from a cell value.
///
/// Numbers are taken as is. Strings holding a finite number (after trimming)
/// are parsed. Everything else yields `None`.
pub fn score_from_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}

/// Styles a loosely typed cell value. Values without a score get no styling.
pub fn style_for_value(value: &Value) -> CellStyle {
    score_from_value(value).map(style_for).unwrap_or_default()
}

//! Numeric label text and anchor placement

use log::trace;
use serde::{Deserialize, Serialize};

/// A rendered value label: formatted text plus its anchor in the member's
/// local diagram plane
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagramLabel {
    /// Scientific-notation text of the displayed value
    pub text: String,
    /// Station position along the member's local axis
    pub x: f64,
    /// Vertical anchor, offset away from the filled region
    pub y: f64,
}

/// Compute one label per sample station
///
/// The displayed number is the raw (unscaled) value with its sign flipped,
/// matching the sign convention of the rendered diagram axis, while the
/// anchor height tracks the scaled value actually drawn. The offset pushes
/// the anchor away from the filled region: above positive lobes, below
/// negative ones.
///
/// `font_height` is carried for signature compatibility with callers that
/// size text externally; it does not affect placement. Callers wanting
/// font-aware spacing pass a non-zero `offset`.
///
/// # Arguments
/// * `values_scaled` - Drawn ordinates (already multiplied by the diagram scale)
/// * `raw_values` - Original solver values, indexed in step with `values_scaled`
/// * `dist` - Uniform spacing between consecutive sample stations
/// * `font_height` - Text height used by the renderer (placement-neutral)
/// * `precision` - Mantissa digits of the scientific-notation text
/// * `offset` - Vertical distance between the curve and the anchor
///
/// # Panics
/// Panics with an index-out-of-range error when `raw_values` is shorter than
/// `values_scaled`. This is a caller contract violation and intentionally
/// not papered over: silently truncating would hide a real bookkeeping bug
/// in the caller's array handling.
pub fn label_positions(
    values_scaled: &[f64],
    raw_values: &[f64],
    dist: f64,
    font_height: f64,
    precision: usize,
    offset: f64,
) -> Vec<DiagramLabel> {
    trace!(
        "placing {} label(s): font_height={font_height}, precision={precision}, offset={offset}",
        values_scaled.len()
    );

    values_scaled
        .iter()
        .enumerate()
        .map(|(i, &value)| {
            let displayed = raw_values[i] * -1.0;
            let y = if value > 0.0 {
                value + offset
            } else {
                value - offset
            };
            DiagramLabel {
                text: format_scientific(displayed, precision),
                x: dist * i as f64,
                y,
            }
        })
        .collect()
}

/// Format a value in scientific notation with a signed two-digit exponent
///
/// Rust's `{:e}` writes `1.00e1`; renderers downstream expect the
/// conventional `1.00e+01` form, so the exponent is re-padded here.
fn format_scientific(value: f64, precision: usize) -> String {
    let formatted = format!("{value:.precision$e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) => {
            let exponent: i32 = exponent.parse().unwrap_or(0);
            format!("{mantissa}e{exponent:+03}")
        }
        // Non-finite values carry no exponent; pass them through
        None => formatted,
    }
}

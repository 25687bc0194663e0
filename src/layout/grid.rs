//! The shared layout algebra consumed by every grid-like composite builder.
//!
//! Pure functions over canvas-unit values; no shared state. Factoring the
//! prefix-sum and stripe-parity arithmetic here keeps a single tested
//! implementation instead of one ad hoc copy per composite.

use crate::model::color::Color;

/// Prefix sums of `widths`.
///
/// The result has length `widths.len() + 1`; entry `j` is the x offset of
/// column `j` relative to the grid origin, and the last entry equals the
/// total width.
pub fn column_offsets(widths: &[f64]) -> Vec<f64> {
    let mut offsets = Vec::with_capacity(widths.len() + 1);
    let mut x = 0.0;
    offsets.push(x);
    for w in widths {
        x += w;
        offsets.push(x);
    }
    offsets
}

/// Vertical offset of the `index`-th row in a repeating list.
///
/// Rows never overlap as long as `step` is at least the row height.
pub fn stack_y(base_y: f64, index: usize, step: f64) -> f64 {
    base_y + index as f64 * step
}

/// Alternating-row shading: `even` for even indices, `odd` otherwise.
pub fn stripe(index: usize, even: Color, odd: Color) -> Color {
    if index % 2 == 0 { even } else { odd }
}

#[cfg(test)]
#[path = "../../tests/unit/layout/grid.rs"]
mod tests;

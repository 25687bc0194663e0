use crate::foundation::error::{DeckError, DeckResult};

pub use kurbo::{Point, Rect, Size, Vec2};

/// Fixed per-deck canvas size, in canvas length units.
///
/// Every slide in a deck shares one canvas; there is no per-slide resize.
/// Coordinates originate at the top-left corner. Rectangles may exceed the
/// canvas bounds (they are not clamped), but a correct slide keeps all
/// visible content within `[0, width] x [0, height]`.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    /// Canvas width in length units.
    pub width: f64,
    /// Canvas height in length units.
    pub height: f64,
}

impl Canvas {
    /// The 16:9 widescreen canvas used by the built-in demo deck.
    pub const WIDESCREEN: Self = Self {
        width: 13.33,
        height: 7.5,
    };

    /// Creates a canvas, rejecting non-positive or non-finite dimensions.
    pub fn new(width: f64, height: f64) -> DeckResult<Self> {
        if !(width.is_finite() && height.is_finite()) || width <= 0.0 || height <= 0.0 {
            return Err(DeckError::shape(format!(
                "canvas dimensions must be positive and finite, got {width} x {height}"
            )));
        }
        Ok(Self { width, height })
    }

    /// The full-canvas rectangle `(0, 0, width, height)`.
    pub fn bounds(self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;

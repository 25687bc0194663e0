//! Recurring slide furniture: title bar, separator rule, and edge-barred
//! callout panels.

use crate::builders::primitive::{filled_rect, text_box};
use crate::foundation::core::{Canvas, Rect};
use crate::model::color::Color;
use crate::model::shape::{Align, Shape, TextStyle};
use crate::model::theme::Theme;

/// Height of the title bar band, in canvas units.
pub const TITLE_BAR_HEIGHT: f64 = 1.05;

/// Horizontal inset of the separator rule from each canvas edge.
const SEPARATOR_INSET: f64 = 0.6;

/// Thickness of the separator rule.
const SEPARATOR_THICKNESS: f64 = 0.04;

/// Width of a callout's colored edge bar.
const EDGE_BAR_WIDTH: f64 = 0.1;

/// A full-width accent band across the top of the canvas with a centered,
/// bold, primary-colored label. Returns band and label in paint order.
pub fn title_bar(canvas: Canvas, theme: &Theme, text: &str, size: f64) -> Vec<Shape> {
    let band = Rect::new(0.0, 0.0, canvas.width, TITLE_BAR_HEIGHT);
    vec![
        filled_rect(band, theme.accent),
        text_box(
            band,
            text,
            TextStyle::new(size, theme.primary).bold(),
            Align::Center,
        ),
    ]
}

/// A thin horizontal primary-colored rule at vertical position `y`, inset
/// from both canvas edges.
pub fn separator(canvas: Canvas, theme: &Theme, y: f64) -> Shape {
    filled_rect(
        Rect::new(
            SEPARATOR_INSET,
            y,
            canvas.width - SEPARATOR_INSET,
            y + SEPARATOR_THICKNESS,
        ),
        theme.primary,
    )
}

/// An accent panel with a thin colored bar along its left edge and a text
/// overlay inset past the bar. Returns panel, bar, and text in paint order.
pub fn callout(rect: Rect, theme: &Theme, edge: Color, text: &str, style: TextStyle) -> Vec<Shape> {
    let bar = Rect::new(rect.x0, rect.y0, rect.x0 + EDGE_BAR_WIDTH, rect.y1);
    let inset = Rect::new(rect.x0 + 2.0 * EDGE_BAR_WIDTH, rect.y0, rect.x1, rect.y1);
    vec![
        filled_rect(rect, theme.accent),
        filled_rect(bar, edge),
        text_box(inset, text, style, Align::Left),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/builders/chrome.rs"]
mod tests;

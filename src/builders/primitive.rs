//! Atomic shape constructors: filled rectangles, text boxes, bulleted
//! lists, and code blocks.
//!
//! Builders at this layer only return shapes; composition onto a slide
//! happens in [`crate::Slide`] / [`crate::DeckBuilder`].

use crate::foundation::core::Rect;
use crate::model::color::Color;
use crate::model::shape::{Align, Paragraph, Shape, TextStyle};
use crate::model::theme::Theme;

/// Default bulleted-list marker glyph.
pub const BULLET_MARKER: &str = "->";

/// Point size used by code blocks unless a caller restyles the text.
const CODE_SIZE: f64 = 11.0;

/// Inter-paragraph gap applied to every bulleted item, in points.
const BULLET_SPACE_BEFORE: f64 = 5.0;

/// A solid rectangle. Zero width or height is legal and renders nothing
/// visible.
pub fn filled_rect(rect: Rect, color: Color) -> Shape {
    Shape::FilledRect { rect, color }
}

/// A text box holding one paragraph with one run of `text`.
pub fn text_box(rect: Rect, text: impl Into<String>, style: TextStyle, align: Align) -> Shape {
    Shape::TextBox {
        rect,
        paragraphs: vec![Paragraph::single(text, style)],
        align,
    }
}

/// A text box with one paragraph per item, each prefixed by `marker` and a
/// fixed two-space gap.
///
/// The declared rectangle must be tall enough for `items.len()` lines at the
/// given size; nothing is truncated or wrap-checked at build time (wrapping
/// is the renderer's concern).
pub fn bulleted_list<S: AsRef<str>>(
    rect: Rect,
    items: &[S],
    style: TextStyle,
    marker: &str,
) -> Shape {
    let paragraphs = items
        .iter()
        .map(|item| {
            let mut p = Paragraph::single(format!("{marker}  {}", item.as_ref()), style);
            p.space_before = BULLET_SPACE_BEFORE;
            p
        })
        .collect();
    Shape::TextBox {
        rect,
        paragraphs,
        align: Align::Left,
    }
}

/// A dark panel with a monospaced primary-colored text overlay, for literal
/// source-like text. Returns the panel and the overlay, in paint order.
pub fn code_block(rect: Rect, text: impl Into<String>, theme: &Theme) -> Vec<Shape> {
    vec![
        filled_rect(rect, theme.surface),
        text_box(
            rect,
            text,
            TextStyle::new(CODE_SIZE, theme.primary).mono(),
            Align::Left,
        ),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/builders/primitive.rs"]
mod tests;

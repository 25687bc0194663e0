use crate::foundation::core::Canvas;
use crate::model::shape::Shape;
use crate::model::theme::Theme;

/// An ordered, append-only shape list; one canvas worth of content.
///
/// The constructor seeds the full-canvas background rectangle as element 0,
/// so the background-behind-content z-order invariant holds by construction:
/// there is no removal or reordering API, and every later append paints over
/// earlier shapes.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Slide {
    shapes: Vec<Shape>,
}

impl Slide {
    /// A slide whose first (bottom-most) shape is the full-canvas background
    /// fill taken from `theme`.
    pub fn new(canvas: Canvas, theme: &Theme) -> Self {
        Self {
            shapes: vec![Shape::FilledRect {
                rect: canvas.bounds(),
                color: theme.background,
            }],
        }
    }

    /// Appends one shape on top of everything appended so far.
    pub fn push(&mut self, shape: Shape) {
        self.shapes.push(shape);
    }

    /// Appends shapes in iteration order.
    pub fn extend(&mut self, shapes: impl IntoIterator<Item = Shape>) {
        self.shapes.extend(shapes);
    }

    /// All shapes in paint order, background first.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

/// The complete ordered collection of slides produced by one generation run.
///
/// Immutable once built; consumed by a [`crate::DeckRenderer`] collaborator
/// exactly once, after the whole deck is assembled.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Deck {
    canvas: Canvas,
    slides: Vec<Slide>,
}

impl Deck {
    pub(crate) fn new(canvas: Canvas, slides: Vec<Slide>) -> Self {
        Self { canvas, slides }
    }

    /// The canvas shared by every slide.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Slides in presentation order.
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/slide.rs"]
mod tests;

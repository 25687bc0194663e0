use crate::foundation::core::Rect;
use crate::model::color::Color;

/// Horizontal paragraph alignment within a text box.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize,
)]
pub enum Align {
    /// Flush left (default).
    #[default]
    Left,
    /// Centered.
    Center,
    /// Flush right.
    Right,
}

/// Per-run text styling.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextStyle {
    /// Font size in points.
    pub size: f64,
    /// Bold weight.
    pub bold: bool,
    /// Italic slant.
    pub italic: bool,
    /// Monospaced face (code text).
    pub mono: bool,
    /// Run color.
    pub color: Color,
}

impl TextStyle {
    /// A plain run style at `size` points in `color`.
    pub fn new(size: f64, color: Color) -> Self {
        Self {
            size,
            bold: false,
            italic: false,
            mono: false,
            color,
        }
    }

    /// Sets bold weight.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Sets italic slant.
    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    /// Sets a monospaced face.
    pub fn mono(mut self) -> Self {
        self.mono = true;
        self
    }
}

/// A contiguous piece of styled text within a paragraph.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TextRun {
    /// Run text.
    pub text: String,
    /// Run style.
    pub style: TextStyle,
}

/// An ordered sequence of text runs; run order is render order.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Paragraph {
    /// Ordered runs.
    pub runs: Vec<TextRun>,
    /// Extra vertical gap before this paragraph, in points.
    #[serde(default)]
    pub space_before: f64,
}

impl Paragraph {
    /// A paragraph holding a single run with no leading gap.
    pub fn single(text: impl Into<String>, style: TextStyle) -> Self {
        Self {
            runs: vec![TextRun {
                text: text.into(),
                style,
            }],
            space_before: 0.0,
        }
    }
}

/// A leaf value in a slide's shape tree, never mutated after creation.
///
/// Within a slide, shape order is paint order: later shapes paint over
/// earlier ones.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Shape {
    /// A solid rectangle.
    FilledRect {
        /// Bounding rectangle.
        rect: Rect,
        /// Fill color.
        color: Color,
    },
    /// A box of styled paragraphs.
    TextBox {
        /// Bounding rectangle.
        rect: Rect,
        /// Ordered paragraphs.
        paragraphs: Vec<Paragraph>,
        /// Horizontal alignment applied to every paragraph.
        align: Align,
    },
    /// A flow-diagram node: a filled body with a thin side bar and an inset
    /// label, rendered as one unit.
    FlowNode {
        /// Bounding rectangle of the node body.
        rect: Rect,
        /// Node label.
        label: String,
        /// Body fill color.
        fill: Color,
        /// Label color.
        text_color: Color,
    },
    /// A small directional glyph between two consecutive flow nodes.
    Arrow {
        /// Bounding rectangle of the glyph box.
        rect: Rect,
        /// Glyph text.
        label: String,
    },
}

impl Shape {
    /// The shape's bounding rectangle.
    pub fn bounds(&self) -> Rect {
        match self {
            Self::FilledRect { rect, .. }
            | Self::TextBox { rect, .. }
            | Self::FlowNode { rect, .. }
            | Self::Arrow { rect, .. } => *rect,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/model/shape.rs"]
mod tests;

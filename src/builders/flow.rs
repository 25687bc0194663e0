//! Flow-diagram builder: sequential pipeline chains of nodes joined by
//! directional arrow glyphs.
//!
//! Chains model a finite sequential pipeline, not a general graph: there is
//! no branching, merging, or back-edge support, and chains never wrap.

use crate::foundation::core::{Point, Rect, Size};
use crate::foundation::error::{DeckError, DeckResult};
use crate::model::color::Color;
use crate::model::shape::Shape;

/// Directional glyph drawn between consecutive flow nodes.
pub const ARROW_GLYPH: &str = "->";

/// Arrow glyph box width, in canvas units.
const ARROW_WIDTH: f64 = 0.45;

/// Arrow glyph box height, in canvas units.
const ARROW_HEIGHT: f64 = 0.4;

/// One pipeline node: a filled body with a thin side bar and an inset label,
/// rendered as a single unit.
pub fn flow_node(rect: Rect, label: impl Into<String>, fill: Color, text_color: Color) -> Shape {
    Shape::FlowNode {
        rect,
        label: label.into(),
        fill,
        text_color,
    }
}

/// A directional glyph box with its top-left corner at `origin`.
pub fn arrow(origin: Point) -> Shape {
    Shape::Arrow {
        rect: Rect::new(
            origin.x,
            origin.y,
            origin.x + ARROW_WIDTH,
            origin.y + ARROW_HEIGHT,
        ),
        label: ARROW_GLYPH.to_string(),
    }
}

/// Declarative input for a horizontal chain of flow nodes.
///
/// Nodes are spaced at a fixed pitch of `node width + gap`; an arrow glyph
/// is centered in every inter-node gap. Highlighting a particular node
/// (the original decks highlight the terminal pipeline stage) is an
/// explicit caller choice via [`FlowChainSpec::fill_override`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct FlowChainSpec {
    /// Node labels, left to right; must be non-empty.
    pub labels: Vec<String>,
    /// Top-left corner of the first node.
    pub origin: Point,
    /// Size of every node.
    pub node_size: Size,
    /// Horizontal gap between consecutive nodes; must be positive when the
    /// chain has more than one node.
    pub gap: f64,
    /// Default node body fill.
    pub fill: Color,
    /// Node label color.
    pub text_color: Color,
    /// Per-node fill overrides, `(node index, color)`.
    pub fill_overrides: Vec<(usize, Color)>,
}

impl FlowChainSpec {
    /// A chain spec with no per-node overrides.
    pub fn new<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        origin: Point,
        node_size: Size,
        gap: f64,
        fill: Color,
        text_color: Color,
    ) -> Self {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            origin,
            node_size,
            gap,
            fill,
            text_color,
            fill_overrides: Vec::new(),
        }
    }

    /// Overrides the body fill of node `index`.
    pub fn fill_override(mut self, index: usize, color: Color) -> Self {
        self.fill_overrides.push((index, color));
        self
    }
}

/// Lays out `spec` as interleaved shapes: `node0, arrow0, node1, arrow1,
/// ..., node(n-1)`.
///
/// A chain of `n` nodes emits exactly `n - 1` arrows, each centered in the
/// gap between node `i` and node `i + 1`; there is never an arrow after the
/// last node.
pub fn flow_chain(spec: &FlowChainSpec) -> DeckResult<Vec<Shape>> {
    let n = spec.labels.len();
    if n == 0 {
        return Err(DeckError::shape("flow chain requires at least one node"));
    }
    if spec.node_size.width <= 0.0 || spec.node_size.height <= 0.0 {
        return Err(DeckError::shape(format!(
            "node dimensions must be positive, got {} x {}",
            spec.node_size.width, spec.node_size.height
        )));
    }
    if spec.gap < 0.0 {
        return Err(DeckError::shape("negative node gap"));
    }
    // A zero gap leaves no room between nodes to center an arrow in.
    if n > 1 && spec.gap == 0.0 {
        return Err(DeckError::shape(
            "a chain of two or more nodes requires a positive gap",
        ));
    }

    let pitch = spec.node_size.width + spec.gap;
    let mut shapes = Vec::with_capacity(2 * n - 1);
    for (i, label) in spec.labels.iter().enumerate() {
        let x = spec.origin.x + i as f64 * pitch;
        let rect = Rect::from_origin_size((x, spec.origin.y), spec.node_size);
        let fill = spec
            .fill_overrides
            .iter()
            .rev()
            .find(|(idx, _)| *idx == i)
            .map(|(_, c)| *c)
            .unwrap_or(spec.fill);
        shapes.push(flow_node(rect, label.clone(), fill, spec.text_color));

        if i + 1 < n {
            let gap_mid_x = rect.x1 + spec.gap / 2.0;
            let mid_y = spec.origin.y + spec.node_size.height / 2.0;
            shapes.push(arrow(Point::new(
                gap_mid_x - ARROW_WIDTH / 2.0,
                mid_y - ARROW_HEIGHT / 2.0,
            )));
        }
    }
    Ok(shapes)
}

#[cfg(test)]
#[path = "../../tests/unit/builders/flow.rs"]
mod tests;

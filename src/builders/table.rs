//! Table builder: a declarative spec lowered to header and data cell pairs.

use crate::builders::primitive::{filled_rect, text_box};
use crate::foundation::core::{Point, Rect};
use crate::foundation::error::{DeckError, DeckResult};
use crate::layout::grid::{column_offsets, stack_y, stripe};
use crate::model::color::Color;
use crate::model::shape::{Align, Shape, TextStyle};
use crate::model::theme::Theme;

/// Point size of header and data cell text.
const CELL_SIZE: f64 = 12.0;

/// Declarative table input: an `m`-column header, `n` rows of `m` cells,
/// per-column widths, and a uniform row height.
///
/// Cell rectangles are derived by the builder; callers never compute pixel
/// coordinates. Text-color emphasis per data row is an explicit caller
/// choice via [`TableSpec::row_color`] — no row is implicitly special.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct TableSpec {
    /// Header labels, one per column.
    pub header: Vec<String>,
    /// Data rows; every row must have exactly one cell per column.
    pub rows: Vec<Vec<String>>,
    /// Column widths in canvas units; a zero width is legal and produces an
    /// invisible but structurally present column.
    pub column_widths: Vec<f64>,
    /// Uniform height of the header and every data row.
    pub row_height: f64,
    /// Per-row text color overrides, `(row index, color)`.
    pub row_colors: Vec<(usize, Color)>,
}

impl TableSpec {
    /// A spec with no per-row overrides.
    pub fn new(
        header: Vec<String>,
        rows: Vec<Vec<String>>,
        column_widths: Vec<f64>,
        row_height: f64,
    ) -> Self {
        Self {
            header,
            rows,
            column_widths,
            row_height,
            row_colors: Vec::new(),
        }
    }

    /// Overrides the text color of data row `row`.
    pub fn row_color(mut self, row: usize, color: Color) -> Self {
        self.row_colors.push((row, color));
        self
    }
}

/// Lowers `spec` into cell shapes in paint order: header cells left to
/// right, then row 0 cells, row 1 cells, and so on.
///
/// Each cell is a fill plus a text overlay, so a table with `m` columns and
/// `n` data rows emits exactly `2 * m * (n + 1)` shapes. Header cells use
/// the accent fill with centered bold primary labels; data rows alternate
/// between the stripe and background fills with left-aligned muted text.
/// Zero data rows is legal: only the header is emitted.
pub fn table(theme: &Theme, origin: Point, spec: &TableSpec) -> DeckResult<Vec<Shape>> {
    let m = spec.header.len();
    if spec.column_widths.len() != m {
        return Err(DeckError::shape(format!(
            "column/row length mismatch: {} header labels but {} column widths",
            m,
            spec.column_widths.len()
        )));
    }
    if let Some((i, row)) = spec
        .rows
        .iter()
        .enumerate()
        .find(|(_, row)| row.len() != m)
    {
        return Err(DeckError::shape(format!(
            "column/row length mismatch: row {i} has {} cells, expected {m}",
            row.len()
        )));
    }
    if spec.column_widths.iter().any(|w| *w < 0.0) {
        return Err(DeckError::shape("negative column width"));
    }
    if spec.row_height <= 0.0 {
        return Err(DeckError::shape(format!(
            "row height must be positive, got {}",
            spec.row_height
        )));
    }

    let offsets = column_offsets(&spec.column_widths);
    let cell = |j: usize, y: f64| {
        Rect::new(
            origin.x + offsets[j],
            y,
            origin.x + offsets[j + 1],
            y + spec.row_height,
        )
    };

    let mut shapes = Vec::with_capacity(2 * m * (spec.rows.len() + 1));

    let header_style = TextStyle::new(CELL_SIZE, theme.primary).bold();
    for (j, label) in spec.header.iter().enumerate() {
        let rect = cell(j, origin.y);
        shapes.push(filled_rect(rect, theme.accent));
        shapes.push(text_box(rect, label.clone(), header_style, Align::Center));
    }

    for (i, row) in spec.rows.iter().enumerate() {
        let y = stack_y(origin.y, i + 1, spec.row_height);
        let fill = stripe(i, theme.stripe, theme.background);
        let text_color = spec
            .row_colors
            .iter()
            .rev()
            .find(|(idx, _)| *idx == i)
            .map(|(_, c)| *c)
            .unwrap_or(theme.text_muted);
        let style = TextStyle::new(CELL_SIZE, text_color);
        for (j, value) in row.iter().enumerate() {
            let rect = cell(j, y);
            shapes.push(filled_rect(rect, fill));
            shapes.push(text_box(rect, value.clone(), style, Align::Left));
        }
    }

    Ok(shapes)
}

#[cfg(test)]
#[path = "../../tests/unit/builders/table.rs"]
mod tests;

//! Deckform is a deck-composition layout engine.
//!
//! Slide procedures compose a small set of visual primitives (filled
//! rectangles, text boxes, bulleted lists, code blocks, tables, flow-diagram
//! nodes with connecting arrows) onto a fixed-size canvas, and a deck builder
//! accumulates the resulting slides into an ordered, immutable [`Deck`].
//!
//! # Pipeline overview
//!
//! 1. **Describe**: declarative specs ([`TableSpec`], [`FlowChainSpec`], plain
//!    builder calls) say *what* goes on a slide.
//! 2. **Lay out**: composite builders derive cell/node rectangles from the
//!    shared layout algebra ([`column_offsets`], [`stack_y`], [`stripe`]).
//! 3. **Assemble**: [`DeckBuilder`] runs slide procedures strictly in order
//!    and fails fast on the first error — no partial deck is ever produced.
//! 4. **Hand off**: the finished shape tree goes to a [`DeckRenderer`]
//!    collaborator exactly once; this crate never owns a concrete document
//!    byte format.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: building the same deck twice from the same
//!   procedures and [`Theme`] yields structurally identical shape trees.
//! - **Z-order by construction**: every [`Slide`] starts life with its
//!   full-canvas background rectangle and is append-only afterwards.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod builders;
mod deck;
mod foundation;
mod layout;
mod model;
mod render;

pub use builders::chrome::{TITLE_BAR_HEIGHT, callout, separator, title_bar};
pub use builders::flow::{ARROW_GLYPH, FlowChainSpec, arrow, flow_chain, flow_node};
pub use builders::primitive::{BULLET_MARKER, bulleted_list, code_block, filled_rect, text_box};
pub use builders::table::{TableSpec, table};
pub use deck::builder::{DeckBuilder, SlideCtx};
pub use foundation::core::{Canvas, Point, Rect, Size, Vec2};
pub use foundation::error::{DeckError, DeckResult};
pub use layout::grid::{column_offsets, stack_y, stripe};
pub use model::color::Color;
pub use model::shape::{Align, Paragraph, Shape, TextRun, TextStyle};
pub use model::slide::{Deck, Slide};
pub use model::theme::Theme;
pub use render::json::{DeckRenderer, JsonRenderer};

//! The document-renderer boundary.
//!
//! The core only emits an abstract shape tree; persisting it in a concrete
//! presentation format is a collaborator's job behind [`DeckRenderer`]. The
//! built-in [`JsonRenderer`] writes the tree as JSON, which is enough for
//! tooling, fixtures, and downstream format converters.

use std::fs;
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::error::{DeckError, DeckResult};
use crate::model::slide::Deck;

/// Persists a finished deck at a caller-supplied path.
///
/// Invoked exactly once per generation run, after the whole in-memory deck
/// is assembled — never incrementally per slide.
pub trait DeckRenderer {
    /// Writes `deck` to `path`.
    fn render(&self, deck: &Deck, path: &Path) -> DeckResult<()>;
}

/// Renders the shape tree as pretty-printed JSON.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonRenderer;

impl DeckRenderer for JsonRenderer {
    fn render(&self, deck: &Deck, path: &Path) -> DeckResult<()> {
        ensure_parent_dir(path)?;
        let json = serde_json::to_string_pretty(deck)
            .map_err(|e| DeckError::serde(e.to_string()))?;
        fs::write(path, json)
            .with_context(|| format!("writing deck to {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            slides = deck.slides().len(),
            "deck written"
        );
        Ok(())
    }
}

fn ensure_parent_dir(path: &Path) -> DeckResult<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output directory {}", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/json.rs"]
mod tests;

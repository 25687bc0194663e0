/// Crate-wide result alias.
pub type DeckResult<T> = Result<T, DeckError>;

/// Errors produced while composing shapes or assembling a deck.
#[derive(thiserror::Error, Debug)]
pub enum DeckError {
    /// A composite builder received structurally invalid input
    /// (column/row count mismatch, negative dimension). The declarative
    /// input must be fixed; nothing is retried.
    #[error("shape error: {0}")]
    Shape(String),

    /// A slide procedure failed during deck assembly. Carries the 0-based
    /// index of the offending slide; earlier, already-completed slides are
    /// discarded.
    #[error("deck build aborted at slide {slide}: {source}")]
    BuildAbort {
        /// 0-based index of the slide procedure that failed.
        slide: usize,
        /// The underlying failure.
        #[source]
        source: Box<DeckError>,
    },

    /// Serialization failure at the renderer boundary.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other error (IO at the renderer boundary, caller-supplied).
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl DeckError {
    /// Shorthand for [`DeckError::Shape`].
    pub fn shape(msg: impl Into<String>) -> Self {
        Self::Shape(msg.into())
    }

    /// Shorthand for [`DeckError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Wraps `source` as a [`DeckError::BuildAbort`] for slide `slide`.
    pub fn abort(slide: usize, source: DeckError) -> Self {
        Self::BuildAbort {
            slide,
            source: Box::new(source),
        }
    }

    /// The failing slide index, when this error is a build abort.
    pub fn slide_index(&self) -> Option<usize> {
        match self {
            Self::BuildAbort { slide, .. } => Some(*slide),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

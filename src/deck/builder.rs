//! Deck assembly: an owning builder that runs slide procedures strictly in
//! order and fails fast.

use crate::foundation::core::Canvas;
use crate::foundation::error::{DeckError, DeckResult};
use crate::model::slide::{Deck, Slide};
use crate::model::theme::Theme;

/// Read-only inputs handed to every slide procedure.
pub struct SlideCtx<'t> {
    /// The deck-wide canvas.
    pub canvas: Canvas,
    /// The deck-wide theme.
    pub theme: &'t Theme,
}

impl SlideCtx<'_> {
    /// Mints a fresh slide with its background already seeded.
    pub fn slide(&self) -> Slide {
        Slide::new(self.canvas, self.theme)
    }
}

type SlideProc<'t> = Box<dyn Fn(&SlideCtx<'t>) -> DeckResult<Slide> + 't>;

/// Accumulates slide procedures and runs them in registration order.
///
/// Deck construction is all-or-nothing: the first failing procedure aborts
/// the build with [`DeckError::BuildAbort`] carrying its slide index, and
/// slides completed before the failure are discarded. Procedures share no
/// mutable state — only the read-only theme and canvas — so a deck is a
/// pure function of its procedure sequence.
pub struct DeckBuilder<'t> {
    canvas: Canvas,
    theme: &'t Theme,
    procs: Vec<SlideProc<'t>>,
}

impl<'t> DeckBuilder<'t> {
    /// A builder for decks on `canvas` styled by `theme`.
    pub fn new(canvas: Canvas, theme: &'t Theme) -> Self {
        Self {
            canvas,
            theme,
            procs: Vec::new(),
        }
    }

    /// Registers the next slide procedure; registration order is
    /// presentation order.
    pub fn slide<F>(mut self, proc: F) -> Self
    where
        F: Fn(&SlideCtx<'t>) -> DeckResult<Slide> + 't,
    {
        self.procs.push(Box::new(proc));
        self
    }

    /// Runs every registered procedure in order and yields the finished
    /// deck, or the first failure wrapped as a build abort.
    pub fn build(self) -> DeckResult<Deck> {
        let ctx = SlideCtx {
            canvas: self.canvas,
            theme: self.theme,
        };
        let mut slides = Vec::with_capacity(self.procs.len());
        for (idx, proc) in self.procs.iter().enumerate() {
            tracing::debug!(slide = idx, "building slide");
            match proc(&ctx) {
                Ok(slide) => slides.push(slide),
                Err(err) => return Err(DeckError::abort(idx, err)),
            }
        }
        tracing::debug!(slides = slides.len(), "deck assembled");
        Ok(Deck::new(self.canvas, slides))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/deck/builder.rs"]
mod tests;

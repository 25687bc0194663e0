use super::*;
use crate::builders::primitive::text_box;
use crate::foundation::core::Rect;
use crate::model::shape::{Align, Shape, TextStyle};

fn titled(ctx: &SlideCtx, title: &str) -> DeckResult<Slide> {
    let mut slide = ctx.slide();
    slide.push(text_box(
        Rect::new(0.0, 0.0, 5.0, 1.0),
        title,
        TextStyle::new(26.0, ctx.theme.text),
        Align::Left,
    ));
    Ok(slide)
}

#[test]
fn slides_come_out_in_procedure_order() {
    let theme = Theme::midnight();
    let deck = DeckBuilder::new(Canvas::WIDESCREEN, &theme)
        .slide(|ctx| titled(ctx, "one"))
        .slide(|ctx| titled(ctx, "two"))
        .build()
        .unwrap();
    assert_eq!(deck.slides().len(), 2);
    assert_eq!(deck.canvas(), Canvas::WIDESCREEN);
    for slide in deck.slides() {
        assert!(matches!(slide.shapes()[0], Shape::FilledRect { .. }));
    }
}

#[test]
fn failing_procedure_aborts_with_its_index() {
    let theme = Theme::midnight();
    let result = DeckBuilder::new(Canvas::WIDESCREEN, &theme)
        .slide(|ctx| titled(ctx, "ok"))
        .slide(|_| Err(DeckError::shape("column/row length mismatch")))
        .slide(|ctx| titled(ctx, "never built"))
        .build();
    let err = result.unwrap_err();
    assert_eq!(err.slide_index(), Some(1));
    assert!(err.to_string().contains("slide 1"));
}

#[test]
fn building_twice_yields_identical_decks() {
    let theme = Theme::midnight();
    let build = || {
        DeckBuilder::new(Canvas::WIDESCREEN, &theme)
            .slide(|ctx| titled(ctx, "one"))
            .slide(|ctx| titled(ctx, "two"))
            .build()
            .unwrap()
    };
    assert_eq!(build(), build());
}

#[test]
fn ctx_slides_are_background_seeded() {
    let theme = Theme::midnight();
    let ctx = SlideCtx {
        canvas: Canvas::WIDESCREEN,
        theme: &theme,
    };
    let slide = ctx.slide();
    assert_eq!(slide.shapes().len(), 1);
    assert_eq!(slide.shapes()[0].bounds(), Canvas::WIDESCREEN.bounds());
}

use super::*;

#[test]
fn title_bar_spans_the_canvas_width() {
    let theme = Theme::midnight();
    let shapes = title_bar(Canvas::WIDESCREEN, &theme, "Overview", 26.0);
    assert_eq!(shapes.len(), 2);
    match &shapes[0] {
        Shape::FilledRect { rect, color } => {
            assert_eq!(rect.x0, 0.0);
            assert_eq!(rect.x1, Canvas::WIDESCREEN.width);
            assert_eq!(rect.height(), TITLE_BAR_HEIGHT);
            assert_eq!(*color, theme.accent);
        }
        other => panic!("unexpected shape {other:?}"),
    }
    match &shapes[1] {
        Shape::TextBox { align, paragraphs, .. } => {
            assert_eq!(*align, Align::Center);
            let style = paragraphs[0].runs[0].style;
            assert!(style.bold);
            assert_eq!(style.color, theme.primary);
        }
        other => panic!("unexpected shape {other:?}"),
    }
}

#[test]
fn separator_is_a_thin_inset_rule() {
    let theme = Theme::midnight();
    match separator(Canvas::WIDESCREEN, &theme, 1.15) {
        Shape::FilledRect { rect, color } => {
            assert_eq!(rect.y0, 1.15);
            assert!(rect.height() < 0.1);
            assert!(rect.x0 > 0.0);
            assert!(rect.x1 < Canvas::WIDESCREEN.width);
            assert_eq!(color, theme.primary);
        }
        other => panic!("unexpected shape {other:?}"),
    }
}

#[test]
fn callout_paints_panel_then_edge_bar_then_text() {
    let theme = Theme::midnight();
    let rect = Rect::new(0.5, 5.3, 12.8, 6.1);
    let shapes = callout(
        rect,
        &theme,
        theme.danger,
        "watch out",
        TextStyle::new(13.0, theme.text),
    );
    assert_eq!(shapes.len(), 3);
    match (&shapes[0], &shapes[1], &shapes[2]) {
        (
            Shape::FilledRect { rect: panel, color: panel_color },
            Shape::FilledRect { rect: bar, color: bar_color },
            Shape::TextBox { rect: text, .. },
        ) => {
            assert_eq!(*panel, rect);
            assert_eq!(*panel_color, theme.accent);
            assert_eq!(*bar_color, theme.danger);
            assert_eq!(bar.x0, rect.x0);
            assert!(bar.width() < 0.2);
            assert!(text.x0 > bar.x1);
        }
        other => panic!("unexpected shapes {other:?}"),
    }
}

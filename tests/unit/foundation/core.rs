use super::*;

#[test]
fn canvas_rejects_non_positive_dimensions() {
    assert!(Canvas::new(0.0, 7.5).is_err());
    assert!(Canvas::new(13.33, -1.0).is_err());
    assert!(Canvas::new(f64::NAN, 7.5).is_err());
    assert!(Canvas::new(13.33, 7.5).is_ok());
}

#[test]
fn bounds_covers_the_full_canvas() {
    let canvas = Canvas::WIDESCREEN;
    let bounds = canvas.bounds();
    assert_eq!(bounds, Rect::new(0.0, 0.0, 13.33, 7.5));
    assert_eq!(bounds.width(), canvas.width);
    assert_eq!(bounds.height(), canvas.height);
}

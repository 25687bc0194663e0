use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(DeckError::shape("x").to_string().contains("shape error:"));
    assert!(DeckError::serde("x").to_string().contains("serialization error:"));
}

#[test]
fn abort_carries_slide_index_and_source() {
    let err = DeckError::abort(3, DeckError::shape("bad row"));
    assert_eq!(err.slide_index(), Some(3));
    let msg = err.to_string();
    assert!(msg.contains("slide 3"));
    assert!(std::error::Error::source(&err)
        .expect("abort has a source")
        .to_string()
        .contains("bad row"));
}

#[test]
fn non_abort_errors_have_no_slide_index() {
    assert_eq!(DeckError::shape("x").slide_index(), None);
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = DeckError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

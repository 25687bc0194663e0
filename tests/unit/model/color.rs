use super::*;

#[test]
fn rgb_preserves_channels() {
    let c = Color::rgb(0x00, 0xB4, 0xD8);
    assert_eq!((c.r, c.g, c.b), (0x00, 0xB4, 0xD8));
}

#[test]
fn serde_round_trip() {
    let c = Color::rgb(0x1A, 0x1A, 0x2E);
    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), c);
}

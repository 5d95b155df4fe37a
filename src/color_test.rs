use super::*;

#[test]
fn parse_rgba_long_hex() {
    assert_eq!(parse_rgba("#6366f1"), Some([0x63, 0x66, 0xf1, 255]));
}

#[test]
fn parse_rgba_short_hex() {
    assert_eq!(parse_rgba("#fff"), Some([255, 255, 255, 255]));
}

#[test]
fn parse_rgba_named_and_functional() {
    assert_eq!(parse_rgba("red"), Some([255, 0, 0, 255]));
    assert_eq!(parse_rgba("rgb(0, 128, 255)"), Some([0, 128, 255, 255]));
}

#[test]
fn parse_rgba_trims_whitespace() {
    assert_eq!(parse_rgba("  #000000 "), Some([0, 0, 0, 255]));
}

#[test]
fn parse_rgba_rejects_garbage() {
    assert_eq!(parse_rgba("not a color"), None);
    assert_eq!(parse_rgba("#12345"), None);
}

#[test]
fn resolve_unknown_color_is_opaque_black() {
    assert_eq!(resolve("nope"), Color::from_rgba8(0, 0, 0, 255));
}

#[test]
fn resolve_or_uses_fallback_for_unknown_color() {
    let fallback = Color::from_rgba8(0, 255, 0, 255);
    assert_eq!(resolve_or("nope", fallback), fallback);
    assert_eq!(resolve_or("#0000ff", fallback), Color::from_rgba8(0, 0, 255, 255));
}

#[test]
fn resolve_known_color() {
    assert_eq!(resolve("#00ff00"), Color::from_rgba8(0, 255, 0, 255));
}

#[test]
fn outline_is_translucent_black() {
    let c = outline().to_color_u8();
    assert_eq!((c.red(), c.green(), c.blue(), c.alpha()), (0, 0, 0, 51));
}

#[test]
fn hex_from_rgb24_zero_pads() {
    assert_eq!(hex_from_rgb24(0), "#000000");
    assert_eq!(hex_from_rgb24(0xff), "#0000ff");
    assert_eq!(hex_from_rgb24(RGB24_MAX), "#ffffff");
}

#[test]
fn hex_from_rgb24_masks_high_bits() {
    assert_eq!(hex_from_rgb24(0x0112_3456), "#123456");
}

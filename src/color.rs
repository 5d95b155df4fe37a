//! Color resolution helpers.
//!
//! Parameter colors are caller-supplied strings and are never validated.
//! At paint time they are resolved with the CSS color grammar. A string that
//! does not resolve leaves the previous paint in effect: opaque black for the
//! background (the fill a fresh 2D canvas context starts with), the resolved
//! background for the polygon fill.

#[cfg(test)]
#[path = "color_test.rs"]
mod color_test;

use tiny_skia::Color;

/// Largest 24-bit RGB value.
pub const RGB24_MAX: u32 = 0x00ff_ffff;

/// Outline paint for every polygon: black at 20% opacity.
#[must_use]
pub fn outline() -> Color {
    Color::from_rgba8(0, 0, 0, 51)
}

/// Resolve a CSS color string into RGBA channels.
#[must_use]
pub fn parse_rgba(raw: &str) -> Option<[u8; 4]> {
    match raw.trim().parse::<csscolorparser::Color>() {
        Ok(color) => Some(color.to_rgba8()),
        Err(e) => {
            tracing::debug!(color = raw, error = %e, "unresolved color");
            None
        }
    }
}

/// Resolve a color string for painting, opaque black when unresolved.
#[must_use]
pub fn resolve(raw: &str) -> Color {
    resolve_or(raw, Color::BLACK)
}

/// Resolve a color string for painting, `fallback` when unresolved.
#[must_use]
pub fn resolve_or(raw: &str, fallback: Color) -> Color {
    match parse_rgba(raw) {
        Some([r, g, b, a]) => Color::from_rgba8(r, g, b, a),
        None => fallback,
    }
}

/// Render a 24-bit value as lowercase `#rrggbb`, zero padded.
#[must_use]
pub fn hex_from_rgb24(value: u32) -> String {
    format!("#{:06x}", value & RGB24_MAX)
}

//! Render parameters.
//!
//! A `RenderParameters` value is everything the renderer needs besides the
//! surface. It is an immutable value per render call: the renderer reads it,
//! never writes it, and the same value always paints the same pixels.

#[cfg(test)]
#[path = "params_test.rs"]
mod params_test;

use serde::Serialize;

pub const DEFAULT_SIDES: u32 = 5;
pub const DEFAULT_REPETITIONS: u32 = 1;
pub const DEFAULT_ROTATION_DEGREES: f64 = 0.0;
pub const DEFAULT_SIZE: f64 = 100.0;
pub const DEFAULT_COLOR: &str = "#6366f1";
pub const DEFAULT_BACKGROUND_COLOR: &str = "#ffffff";

/// Suggested filename for exported images.
pub const EXPORT_FILENAME: &str = "forme-geometrique.png";

/// Full parameter set for one render call.
///
/// Color fields are kept as the caller supplied them. They are resolved only
/// at paint time (see [`crate::color::resolve`]).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderParameters {
    /// Vertex count of each polygon. Degenerate below 3.
    pub sides: u32,
    /// Number of concentric polygons painted.
    pub repetitions: u32,
    /// Rotation step in degrees, applied cumulatively per repetition. Not clamped.
    pub rotation: f64,
    /// Outer radius of the first (largest) polygon, in pixels.
    pub size: f64,
    /// Interior fill of every polygon.
    pub color: String,
    pub background_color: String,
}

impl Default for RenderParameters {
    fn default() -> Self {
        Self {
            sides: DEFAULT_SIDES,
            repetitions: DEFAULT_REPETITIONS,
            rotation: DEFAULT_ROTATION_DEGREES,
            size: DEFAULT_SIZE,
            color: DEFAULT_COLOR.to_owned(),
            background_color: DEFAULT_BACKGROUND_COLOR.to_owned(),
        }
    }
}

//! Rendering: paints a polygon pattern onto a raster surface.
//!
//! This module is the only place that touches [`tiny_skia`]. It receives a
//! read-only [`RenderParameters`] and produces pixels; it holds no state of
//! its own beyond the surface it is handed.
//!
//! Every render is a full repaint:
//! 1. fill the whole surface with the background (erase, not composite),
//! 2. for each repetition in order, fill its polygon with the pattern color,
//! 3. stroke the same outline with 20% black at width 1.
//!
//! Later repetitions are smaller and share the center, so with one flat fill
//! the earlier, larger polygons end up covered. That paint order is kept.

#[cfg(test)]
#[path = "render_test.rs"]
mod render_test;

use tiny_skia::{FillRule, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

use crate::color;
use crate::params::RenderParameters;
use crate::pattern::{self, Point};

pub const DEFAULT_SURFACE_WIDTH: u32 = 500;
pub const DEFAULT_SURFACE_HEIGHT: u32 = 500;
/// Largest surface edge the service will allocate.
pub const MAX_RENDER_DIMENSION: u32 = 4096;

/// Outline width in surface units.
const OUTLINE_WIDTH: f32 = 1.0;
/// Miter limit of a 2D canvas context.
const OUTLINE_MITER_LIMIT: f32 = 10.0;

// =============================================================================
// ERROR TYPE
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("drawing surface is not available")]
    SurfaceUnavailable,
    #[error("png encoding failed: {0}")]
    Encode(String),
}

// =============================================================================
// SURFACE
// =============================================================================

/// Fixed-size RGBA raster with a centered drawing convention.
pub struct Surface {
    pixmap: Pixmap,
}

impl Surface {
    /// Allocate a blank surface. Returns `None` when the dimensions cannot be
    /// allocated (zero width or height, or too large).
    #[must_use]
    pub fn new(width: u32, height: u32) -> Option<Self> {
        Pixmap::new(width, height).map(|pixmap| Self { pixmap })
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// Raw premultiplied RGBA bytes, row major.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Straight (non-premultiplied) RGBA of one pixel.
    #[must_use]
    pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let c = self.pixmap.pixel(x, y)?.demultiply();
        Some([c.red(), c.green(), c.blue(), c.alpha()])
    }

    /// Repaint the whole surface from `params`.
    pub fn paint(&mut self, params: &RenderParameters) {
        let background = color::resolve(&params.background_color);
        self.pixmap.fill(background);

        // An unresolved fill keeps the background as the active fill style.
        let mut fill = Paint::default();
        fill.set_color(color::resolve_or(&params.color, background));
        fill.anti_alias = true;

        let mut outline = Paint::default();
        outline.set_color(color::outline());
        outline.anti_alias = true;

        let stroke = Stroke { width: OUTLINE_WIDTH, miter_limit: OUTLINE_MITER_LIMIT, ..Stroke::default() };

        let width = f64::from(self.width());
        let height = f64::from(self.height());
        for ring in pattern::layout(params, width, height) {
            let Some(path) = closed_path(&ring.vertices) else {
                continue;
            };
            self.pixmap.fill_path(&path, &fill, FillRule::Winding, Transform::identity(), None);
            self.pixmap.stroke_path(&path, &outline, &stroke, Transform::identity(), None);
        }
    }

    /// Serialize the current contents as PNG.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::Encode`] if the PNG encoder fails.
    pub fn encode_png(&self) -> Result<Vec<u8>, RenderError> {
        self.pixmap.encode_png().map_err(|e| RenderError::Encode(e.to_string()))
    }
}

/// Build a closed path through `vertices`. Degenerate polygons (fewer than
/// two vertices) produce no path.
#[allow(clippy::cast_possible_truncation)]
fn closed_path(vertices: &[Point]) -> Option<Path> {
    let (first, rest) = vertices.split_first()?;
    let mut pb = PathBuilder::new();
    pb.move_to(first.x as f32, first.y as f32);
    for v in rest {
        pb.line_to(v.x as f32, v.y as f32);
    }
    pb.close();
    pb.finish()
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// Render `params` onto `surface`. An unavailable surface is a no-op.
pub fn render(surface: Option<&mut Surface>, params: &RenderParameters) {
    let Some(surface) = surface else {
        tracing::debug!("render skipped: no surface");
        return;
    };
    surface.paint(params);
    tracing::debug!(
        sides = params.sides,
        repetitions = params.repetitions,
        rotation = params.rotation,
        size = params.size,
        "pattern rendered"
    );
}

/// Serialize a surface to PNG.
///
/// # Errors
///
/// Returns [`RenderError::SurfaceUnavailable`] without a surface, or
/// [`RenderError::Encode`] if encoding fails.
pub fn export_png(surface: Option<&Surface>) -> Result<Vec<u8>, RenderError> {
    surface.ok_or(RenderError::SurfaceUnavailable)?.encode_png()
}

/// Render onto a fresh `width` x `height` surface and return the PNG.
///
/// # Errors
///
/// Returns [`RenderError::SurfaceUnavailable`] if the surface cannot be
/// allocated, or [`RenderError::Encode`] if encoding fails.
pub fn render_png(params: &RenderParameters, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
    let mut surface = Surface::new(width, height).ok_or(RenderError::SurfaceUnavailable)?;
    render(Some(&mut surface), params);
    surface.encode_png()
}

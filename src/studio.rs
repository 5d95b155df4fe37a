//! Studio: caller-owned parameter state bound to one surface.
//!
//! DESIGN
//! ======
//! The renderer is a pure function; something has to own the parameters and
//! decide when to call it. The studio is that caller. Every mutation (an
//! update from either input modality, or a randomize) replaces the parameter
//! set and immediately triggers one full repaint, so the surface always
//! reflects the latest parameters and no intermediate frame is ever kept.
//!
//! A studio may exist without a surface (dimensions that cannot be
//! allocated). Rendering is then a silent no-op and export reports
//! [`RenderError::SurfaceUnavailable`].

#[cfg(test)]
#[path = "studio_test.rs"]
mod studio_test;

use rand::Rng;

use crate::input::ParameterUpdate;
use crate::params::RenderParameters;
use crate::randomize;
use crate::render::{self, RenderError, Surface};

pub struct Studio {
    params: RenderParameters,
    surface: Option<Surface>,
}

impl Studio {
    /// Create a studio with a `width` x `height` surface and paint it once.
    #[must_use]
    pub fn new(width: u32, height: u32, params: RenderParameters) -> Self {
        let surface = Surface::new(width, height);
        if surface.is_none() {
            tracing::warn!(width, height, "surface unavailable; rendering disabled");
        }
        let mut studio = Self { params, surface };
        studio.redraw();
        studio
    }

    #[must_use]
    pub fn params(&self) -> &RenderParameters {
        &self.params
    }

    #[must_use]
    pub fn surface(&self) -> Option<&Surface> {
        self.surface.as_ref()
    }

    /// Apply a partial update and repaint.
    pub fn apply(&mut self, update: &ParameterUpdate) -> &RenderParameters {
        self.params = update.apply(&self.params);
        self.redraw();
        &self.params
    }

    /// Replace every field except the background with random values and repaint.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R) -> &RenderParameters {
        self.params = randomize::randomize(&self.params, rng);
        self.redraw();
        &self.params
    }

    /// PNG bytes of the current surface.
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SurfaceUnavailable`] when the studio has no
    /// surface, or [`RenderError::Encode`] if encoding fails.
    pub fn export_png(&self) -> Result<Vec<u8>, RenderError> {
        render::export_png(self.surface.as_ref())
    }

    fn redraw(&mut self) {
        render::render(self.surface.as_mut(), &self.params);
    }
}

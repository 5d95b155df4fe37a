//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the greeting and the single studio. The studio sits behind a
//! `std::sync::Mutex`: every mutation and its repaint happen under one lock
//! acquisition, and no handler holds the lock across an await point, so
//! requests serialize on the one surface and never see a half-painted frame.

#[cfg(test)]
#[path = "state_test.rs"]
mod state_test;

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::{AppConfig, Greeting};
use crate::params::RenderParameters;
use crate::studio::Studio;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; all inner fields are Arc-wrapped or Clone.
#[derive(Clone)]
pub struct AppState {
    pub greeting: Arc<Greeting>,
    studio: Arc<Mutex<Studio>>,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        let studio = Studio::new(config.surface_width, config.surface_height, RenderParameters::default());
        Self { greeting: Arc::new(config.greeting.clone()), studio: Arc::new(Mutex::new(studio)) }
    }

    /// Lock the studio. A poisoned lock still holds a consistent studio:
    /// every mutation swaps the parameter set in one assignment.
    pub fn studio(&self) -> MutexGuard<'_, Studio> {
        self.studio.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

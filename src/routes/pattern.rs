//! Pattern routes: the shared studio and a stateless renderer.

#[cfg(test)]
#[path = "pattern_test.rs"]
mod pattern_test;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::http::header::{CONTENT_DISPOSITION, CONTENT_TYPE};
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;

use crate::input::{NumericField, ParameterUpdate};
use crate::params::{EXPORT_FILENAME, RenderParameters};
use crate::render::{self, DEFAULT_SURFACE_HEIGHT, DEFAULT_SURFACE_WIDTH, MAX_RENDER_DIMENSION, RenderError};
use crate::state::AppState;

/// `GET /api/pattern` — current studio parameters.
pub async fn get_pattern(State(state): State<AppState>) -> Json<RenderParameters> {
    Json(state.studio().params().clone())
}

/// `PATCH /api/pattern` — apply a partial update and repaint.
///
/// Numeric fields given as JSON numbers are slider input; given as strings
/// they are precise text entry.
pub async fn update_pattern(
    State(state): State<AppState>,
    Json(update): Json<ParameterUpdate>,
) -> Json<RenderParameters> {
    let mut studio = state.studio();
    if update.is_empty() {
        return Json(studio.params().clone());
    }
    let params = studio.apply(&update).clone();
    tracing::info!(sides = params.sides, repetitions = params.repetitions, "pattern updated");
    Json(params)
}

/// `POST /api/pattern/randomize` — random parameters, background kept.
pub async fn randomize_pattern(State(state): State<AppState>) -> Json<RenderParameters> {
    let params = state.studio().randomize(&mut rand::rng()).clone();
    tracing::info!(sides = params.sides, repetitions = params.repetitions, color = %params.color, "pattern randomized");
    Json(params)
}

/// `GET /api/pattern/export.png` — download the studio surface.
pub async fn export_pattern(State(state): State<AppState>) -> Result<Response, StatusCode> {
    let bytes = state.studio().export_png().map_err(render_error_to_status)?;
    Ok(png_response(bytes, true))
}

/// Query for the stateless renderer. Missing fields take the defaults.
#[derive(Debug, Default, Deserialize)]
pub struct RenderQuery {
    pub sides: Option<u32>,
    pub repetitions: Option<u32>,
    pub rotation: Option<f64>,
    pub size: Option<f64>,
    pub color: Option<String>,
    pub background_color: Option<String>,
    pub width: Option<u32>,
    pub height: Option<u32>,
}

impl RenderQuery {
    /// Split into parameters and surface dimensions.
    ///
    /// # Errors
    ///
    /// Returns `BAD_REQUEST` for counts beyond the precise-entry limits or
    /// surfaces larger than [`MAX_RENDER_DIMENSION`].
    pub fn into_parts(self) -> Result<(RenderParameters, u32, u32), StatusCode> {
        let defaults = RenderParameters::default();
        let params = RenderParameters {
            sides: self.sides.unwrap_or(defaults.sides),
            repetitions: self.repetitions.unwrap_or(defaults.repetitions),
            rotation: self.rotation.unwrap_or(defaults.rotation),
            size: self.size.unwrap_or(defaults.size),
            color: self.color.unwrap_or(defaults.color),
            background_color: self.background_color.unwrap_or(defaults.background_color),
        };
        let width = self.width.unwrap_or(DEFAULT_SURFACE_WIDTH);
        let height = self.height.unwrap_or(DEFAULT_SURFACE_HEIGHT);

        if !within_precise(NumericField::Sides, params.sides)
            || !within_precise(NumericField::Repetitions, params.repetitions)
            || width > MAX_RENDER_DIMENSION
            || height > MAX_RENDER_DIMENSION
        {
            return Err(StatusCode::BAD_REQUEST);
        }
        Ok((params, width, height))
    }
}

fn within_precise(field: NumericField, value: u32) -> bool {
    field.precise_range().contains(&i64::from(value))
}

/// `GET /api/render.png` — render query parameters onto a fresh surface.
pub async fn render_stateless(Query(query): Query<RenderQuery>) -> Result<Response, StatusCode> {
    let (params, width, height) = query.into_parts()?;
    let bytes = render::render_png(&params, width, height).map_err(render_error_to_status)?;
    Ok(png_response(bytes, false))
}

fn png_response(bytes: Vec<u8>, attachment: bool) -> Response {
    if attachment {
        let disposition = format!("attachment; filename=\"{EXPORT_FILENAME}\"");
        ([(CONTENT_TYPE, "image/png".to_owned()), (CONTENT_DISPOSITION, disposition)], bytes).into_response()
    } else {
        ([(CONTENT_TYPE, "image/png")], bytes).into_response()
    }
}

pub(crate) fn render_error_to_status(err: RenderError) -> StatusCode {
    match err {
        RenderError::SurfaceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        RenderError::Encode(e) => {
            tracing::error!(error = %e, "png encoding failed");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

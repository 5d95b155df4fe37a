//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the HTTP endpoints under a single Axum router: the
//! greeting consumed by the home page, the studio endpoints that drive the
//! shared pattern, and a stateless render endpoint. CORS is open because the
//! pages that call these endpoints are served from another origin.

pub mod home;
pub mod pattern;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Full application router.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/home", get(home::home))
        .route("/api/pattern", get(pattern::get_pattern).patch(pattern::update_pattern))
        .route("/api/pattern/randomize", post(pattern::randomize_pattern))
        .route("/api/pattern/export.png", get(pattern::export_pattern))
        .route("/api/render.png", get(pattern::render_stateless))
        .route("/healthz", get(healthz))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

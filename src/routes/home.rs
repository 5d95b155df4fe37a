//! Greeting route.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use axum::extract::State;
use axum::response::Json;

use crate::config::Greeting;
use crate::state::AppState;

/// `GET /api/home` — greeting message and list of people.
pub async fn home(State(state): State<AppState>) -> Json<Greeting> {
    Json(state.greeting.as_ref().clone())
}

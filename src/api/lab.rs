//! Lab API Routes
//!
//! Routes:
//! - GET /api/info - Python environment information
//! - GET /api/exercises - Practice exercise catalog

use axum::{extract::State, routing::get, Json, Router};

use crate::models::{catalog, EnvironmentInfo, Exercise};
use crate::AppState;

/// Build lab API routes (mounted under /api).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/info", get(environment_info))
        .route("/exercises", get(list_exercises))
}

/// Environment information.
///
/// GET /api/info
#[axum::debug_handler]
async fn environment_info(State(state): State<AppState>) -> Json<EnvironmentInfo> {
    Json(state.environment.snapshot().into())
}

/// Fixed exercise catalog.
///
/// GET /api/exercises
#[axum::debug_handler]
async fn list_exercises() -> Json<&'static [Exercise]> {
    Json(catalog())
}

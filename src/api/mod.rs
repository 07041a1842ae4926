//! API Routes for Workbench
//!
//! This module combines the routes of the configured site into a single
//! router. Every site gets the status routes; the rest depends on the site.

mod lab;
mod pages;
pub mod status;

use axum::http::Uri;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::site::Site;
use crate::{AppState, Error};

/// Build the routes for a site.
///
/// Route structure:
/// - /health, /health/live - Health checks (all sites)
/// - /, /tutorial - Starter pages (mod0, tkt0)
/// - /, /api/info, /api/exercises - Lab dashboard and API (pylab)
pub fn routes(site: Site) -> Router<AppState> {
    let router = Router::new().merge(status::routes());

    let router = match site {
        Site::Mod0 | Site::Tkt0 => router.merge(pages::starter_routes()),
        Site::Pylab => router
            .merge(pages::lab_routes())
            .nest("/api", lab::routes()),
    };

    router.fallback(not_found)
}

/// Build the complete application for the configured site.
pub fn app(state: AppState) -> Router {
    routes(state.config.site)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

async fn not_found(uri: Uri) -> Error {
    Error::NotFound(uri.path().to_string())
}

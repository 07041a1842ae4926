//! HTML Page Routes
//!
//! Routes:
//! - GET / - Home page (starter sites and lab dashboard)
//! - GET /tutorial - Tutorial page (starter sites only)

use askama::Template;
use axum::{extract::State, response::Html, routing::get, Router};
use tracing::warn;

use crate::templates::{
    render_lab_fallback, LabHomeTemplate, StarterHomeTemplate, TutorialTemplate,
};
use crate::{AppState, Error, Result};

/// Home and tutorial pages of a starter site.
pub fn starter_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(starter_home))
        .route("/tutorial", get(tutorial))
}

/// Home page of the lab dashboard.
pub fn lab_routes() -> Router<AppState> {
    Router::new().route("/", get(lab_home))
}

/// Starter site home page.
///
/// GET /
#[axum::debug_handler]
async fn starter_home(State(state): State<AppState>) -> Result<Html<String>> {
    let page = StarterHomeTemplate::new(state.config.site, &state.config.git);
    Ok(Html(page.render()?))
}

/// Static tutorial page.
///
/// GET /tutorial
#[axum::debug_handler]
async fn tutorial(State(state): State<AppState>) -> Result<Html<String>> {
    let title = state
        .config
        .site
        .tutorial_title()
        .ok_or_else(|| Error::NotFound("/tutorial".to_string()))?;
    Ok(Html(TutorialTemplate::new(title).render()?))
}

/// Lab dashboard home page.
///
/// GET /
///
/// Falls back to an inline page if the template fails to render.
#[axum::debug_handler]
async fn lab_home(State(state): State<AppState>) -> Html<String> {
    let page = LabHomeTemplate::new(
        state.environment.snapshot(),
        state.config.lab.environment.as_str(),
        state.config.lab.notebook_url.as_str(),
    );

    match page.render() {
        Ok(html) => Html(html),
        Err(e) => {
            warn!(error = %e, "Lab template failed to render, serving fallback page");
            Html(render_lab_fallback(&page))
        }
    }
}

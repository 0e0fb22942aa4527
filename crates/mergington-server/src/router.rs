//! Axum router construction for the activities API.
//!
//! Assembles all routes into a single [`Router`] with CORS middleware and
//! per-request tracing, and mounts the static landing page directory.

use std::sync::Arc;

use axum::Router;
use axum::response::Redirect;
use axum::routing::{delete, get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the activities server.
///
/// The router includes:
/// - `GET /` -- 307 redirect to `/static/index.html`
/// - `GET /activities` -- full activity mapping
/// - `POST /activities/{name}/signup` -- register an email
/// - `DELETE /activities/{name}/unregister` -- remove an email
/// - `/static/*` -- landing page assets served from the `static/` directory
///
/// CORS is configured to allow any origin for development. In production
/// this should be restricted.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Landing redirect (307 so clients preserve the request method)
        .route(
            "/",
            get(|| async { Redirect::temporary("/static/index.html") }),
        )
        // REST API
        .route("/activities", get(handlers::list_activities))
        .route("/activities/{name}/signup", post(handlers::signup))
        .route("/activities/{name}/unregister", delete(handlers::unregister))
        // Static landing page
        .nest_service("/static", ServeDir::new("static"))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

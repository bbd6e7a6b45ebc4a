//! Axum router construction for the Observer API.
//!
//! Assembles the JSON API, the static asset services, and the fallback into
//! a single [`Router`] with CORS and request tracing.

use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Build the complete Axum router for the Observer server.
///
/// The router includes:
/// - `GET /api/galaxy` -- galaxy with resources advanced to now
/// - `POST /api/galaxy/regenerate` -- replace the galaxy
/// - `GET /api/health` -- liveness
/// - `/images/*` -- files from [`AppState::images_dir`]
/// - everything else -- the built dashboard from [`AppState::public_dir`]
///   with `index.html` for unknown paths, or the HTML status page when no
///   dashboard is present
///
/// CORS allows any origin.
pub fn build_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = Router::new()
        .route("/api/galaxy", get(handlers::get_galaxy))
        .route("/api/galaxy/regenerate", post(handlers::regenerate_galaxy))
        .route("/api/health", get(handlers::health))
        .nest_service("/images", ServeDir::new(&state.images_dir));

    let router = if state.has_dashboard() {
        let spa = ServeDir::new(&state.public_dir)
            .fallback(ServeFile::new(state.public_dir.join("index.html")));
        router.fallback_service(spa)
    } else {
        router.fallback(handlers::index)
    };

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

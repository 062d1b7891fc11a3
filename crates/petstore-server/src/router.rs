//! Router assembly for the pet store HTTP API.
//!
//! [`build_router`] mounts every entry of [`PET_ROUTES`] plus the OpenAPI
//! endpoint, with CORS and tracing middleware layers.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::routes::{RouteSpec, PET_ROUTES};
use crate::state::AppState;

/// Path serving the generated API description.
pub const OPENAPI_PATH: &str = "/openapi.json";

/// Builds the complete axum router with all API routes.
///
/// Entries sharing a path (`POST /pet`, `PUT /pet`) are merged by axum.
/// CORS is permissive and TraceLayer provides request-level logging.
pub fn build_router(state: AppState) -> Router {
    mount(Router::new(), PET_ROUTES)
        .route(OPENAPI_PATH, get(handlers::docs::openapi_json))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn mount(router: Router<AppState>, routes: &[RouteSpec]) -> Router<AppState> {
    routes.iter().fold(router, |router, route| {
        router.route(route.path, route.method_router())
    })
}

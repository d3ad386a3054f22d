//! API Routes
//!
//! Configures the Axum router for the demo server.

use axum::{routing::any, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{api_handler, index_handler, not_found_handler, stats_handler, AppState};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `/`, `/index.html` - Landing page
/// - `/api` - Trigger a background report run
/// - `/stats` - Client statistics and configuration
/// - anything else - 404 `Not Found`
///
/// Paths match exactly for any method; the query string is ignored.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", any(index_handler))
        .route("/index.html", any(index_handler))
        .route("/api", any(api_handler))
        .route("/stats", any(stats_handler))
        .fallback(not_found_handler)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

//! API Handlers
//!
//! HTTP request handlers for the demo server routes.

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, response::Html, Json};
use tracing::debug;

use crate::api::page::render_index;
use crate::client::SwapiClient;
use crate::config::Config;
use crate::models::StatsResponse;
use crate::tasks::spawn_report_task;

/// Acknowledgement returned by `/api` before the run finishes
pub const API_ACK: &str = "Check server console for results";

/// Application state shared across all handlers.
///
/// The client carries its own shared cache, so cloning the state is cheap.
#[derive(Clone)]
pub struct AppState {
    /// Shared fetch client
    pub client: SwapiClient,
    /// Read-only startup configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState from a client and configuration.
    pub fn new(client: SwapiClient, config: Config) -> Self {
        Self {
            client,
            config: Arc::new(config),
        }
    }
}

/// Handler for / and /index.html
///
/// Renders the landing page with current stats.
pub async fn index_handler(State(state): State<AppState>) -> Html<String> {
    let stats = state.client.get_stats().await;
    Html(render_index(stats, &state.config))
}

/// Handler for /api
///
/// Starts a report run in the background and answers immediately.
pub async fn api_handler(State(state): State<AppState>) -> &'static str {
    let handle = spawn_report_task(
        state.client.clone(),
        state.config.character_id,
        state.config.debug,
    );
    // Not awaited: the run reports to the server log
    drop(handle);
    debug!("Report run dispatched");
    API_ACK
}

/// Handler for /stats
///
/// Returns client statistics and the active configuration.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.client.get_stats().await;
    Json(StatsResponse::new(stats, &state.config))
}

/// Fallback for every other path.
pub async fn not_found_handler() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

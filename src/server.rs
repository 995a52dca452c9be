//! HTTP surface: two read-only JSON endpoints, a health check, and the
//! static front end served from `Config::static_dir`.

use crate::config::Config;
use crate::error::{ApiError, Resource};
use crate::fetch::PageSource;
use crate::middleware;
use crate::scrapers;
use crate::types::{ScheduleEntry, Standings};
use axum::{
    extract::State, middleware as axum_middleware, response::IntoResponse, routing::get, Json,
    Router,
};
use serde_json::json;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::error;

/// Shared, read-only state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn PageSource>,
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(source: Arc<dyn PageSource>, config: Config) -> Self {
        Self {
            source,
            config: Arc::new(config),
        }
    }
}

pub fn router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/api/standings", get(standings))
        .route("/api/schedule", get(schedule))
        .route("/health", get(health))
        .fallback_service(static_files)
        .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
        .layer(axum_middleware::from_fn(middleware::trace))
        .with_state(state)
}

async fn standings(State(state): State<AppState>) -> Result<Json<Standings>, ApiError> {
    scrapers::scrape_standings(state.source.as_ref(), &state.config.standings_url)
        .await
        .map(Json)
        .map_err(|e| {
            error!(
                resource = %Resource::Standings,
                url = %state.config.standings_url,
                error = %e,
                "Error fetching standings"
            );
            ApiError::Unavailable(Resource::Standings)
        })
}

async fn schedule(State(state): State<AppState>) -> Result<Json<Vec<ScheduleEntry>>, ApiError> {
    let today = chrono::Local::now().date_naive();
    scrapers::scrape_schedule(state.source.as_ref(), &state.config.schedule_url, today)
        .await
        .map(Json)
        .map_err(|e| {
            error!(
                resource = %Resource::Schedule,
                url = %state.config.schedule_url,
                error = %e,
                "Error fetching schedule"
            );
            ApiError::Unavailable(Resource::Schedule)
        })
}

async fn health() -> impl IntoResponse {
    Json(json!({"ok": true}))
}

//! Web server for Carfinder
//!
//! Serves the HTML search pages, the JSON search API and static assets.
//! All pages use server-side rendering; there is no client-side state.

use std::path::Path;
use std::sync::Arc;

use axum::Router;
use axum::routing::{get, post};
use carfinder_core::CarfinderConfig;
use carfinder_search::VehicleSearchService;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tracing::info;

use crate::WebError;
use crate::handlers::{api_search, index_page, search_submit};
use crate::templates::TemplateEngine;

/// Shared state handed to every handler.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Runs the three provider lookups for a query
    pub search_service: VehicleSearchService,
    /// Page layout, loaded once at startup
    pub templates: Arc<TemplateEngine>,
}

impl AppState {
    /// Creates state from a search service and a loaded template engine.
    pub fn new(search_service: VehicleSearchService, templates: TemplateEngine) -> Self {
        Self {
            search_service,
            templates: Arc::new(templates),
        }
    }
}

/// Builds the application router.
///
/// `static_dir` is served read-only under `/static`.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        // Pages
        .route("/", get(index_page))
        .route("/search", post(search_submit))
        .route("/buscar", post(search_submit))
        // JSON API endpoints (for external clients)
        .route("/api/search", get(api_search))
        // Static assets
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Loads templates, binds the listener and serves until shutdown.
///
/// # Errors
/// - `WebError::TemplateError` - Configured page template could not be loaded
/// - `WebError::Io` - Address could not be bound or the server failed
pub async fn run_server(
    config: CarfinderConfig,
    search_service: VehicleSearchService,
) -> Result<(), WebError> {
    let templates = TemplateEngine::from_config(&config.server)?;
    let state = AppState::new(search_service, templates);
    let app = build_router(state, &config.server.static_dir);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address).await?;
    info!("Carfinder running on http://{address}");
    info!("Serving static assets from {}", config.server.static_dir.display());

    axum::serve(listener, app).await?;
    Ok(())
}

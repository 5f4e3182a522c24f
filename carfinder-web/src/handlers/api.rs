//! JSON API handlers for external clients

use axum::Json;
use axum::extract::{Query, State};
use carfinder_search::ResultBundle;
use serde::Deserialize;

use crate::server::AppState;

/// Query string of `/api/search`.
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    /// Search text; missing behaves like empty.
    #[serde(default)]
    pub q: String,
}

/// Returns the aggregated results for `q` as JSON.
pub async fn api_search(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Json<ResultBundle> {
    Json(state.search_service.orchestrate(&params.q).await)
}

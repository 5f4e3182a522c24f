//! Page handlers for the HTML interface

use axum::extract::{Form, State};
use axum::http::StatusCode;
use serde::Deserialize;
use tracing::debug;

use crate::HtmlResponse;
use crate::pages::{home_content, results_content};
use crate::server::AppState;

/// Body of the search form submission.
///
/// Older forms post the text as `marca`; when both names are present
/// `query` wins.
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    /// Free text typed by the user
    #[serde(default)]
    pub query: Option<String>,
    /// Legacy name for `query`
    #[serde(default)]
    pub marca: Option<String>,
}

impl SearchForm {
    /// The submitted text, or None when neither field was sent.
    pub fn into_text(self) -> Option<String> {
        self.query.or(self.marca)
    }
}

/// Renders the search form.
pub async fn index_page(State(state): State<AppState>) -> HtmlResponse {
    state.templates.render("Search", &home_content())
}

/// Runs a search and renders the results page.
///
/// Provider problems surface as per-section placeholders; only a form
/// without any query field is rejected.
pub async fn search_submit(
    State(state): State<AppState>,
    Form(form): Form<SearchForm>,
) -> Result<HtmlResponse, StatusCode> {
    let query = form.into_text().ok_or(StatusCode::UNPROCESSABLE_ENTITY)?;
    debug!("Search form submitted: {query:?}");

    let bundle = state.search_service.orchestrate(&query).await;
    Ok(state.templates.render("Results", &results_content(&bundle)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(query: Option<&str>, marca: Option<&str>) -> SearchForm {
        SearchForm {
            query: query.map(str::to_string),
            marca: marca.map(str::to_string),
        }
    }

    #[test]
    fn test_query_field_preferred_over_legacy_name() {
        assert_eq!(form(Some("a"), Some("b")).into_text().as_deref(), Some("a"));
        assert_eq!(form(None, Some("b")).into_text().as_deref(), Some("b"));
        assert_eq!(form(Some(""), None).into_text().as_deref(), Some(""));
        assert!(form(None, None).into_text().is_none());
    }
}

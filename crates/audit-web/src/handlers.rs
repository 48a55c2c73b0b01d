//! HTTP request handlers for the viewer.

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::response::{Html, IntoResponse, Redirect, Response};
use serde::Deserialize;
use tracing::debug;

use crate::error::WebResult;
use crate::render::{render_index, render_results};
use crate::state::ViewerState;

/// Query parameters for the search endpoint.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    /// Free-text search query.
    pub query: Option<String>,
}

/// Handle GET / - full listing of all records.
pub async fn index(State(state): State<Arc<ViewerState>>) -> WebResult<Html<String>> {
    let html = render_index(&state.config().title, state.store().records())?;
    Ok(Html(html))
}

/// Handle GET /search - filter records by substring match.
///
/// An absent or empty query redirects to the unfiltered view.
pub async fn search(
    State(state): State<Arc<ViewerState>>,
    Query(params): Query<SearchParams>,
) -> WebResult<Response> {
    let query = params.query.unwrap_or_default();
    if query.is_empty() {
        return Ok(Redirect::to("/").into_response());
    }

    let results = state.store().search(&query);
    debug!(query = %query, matches = results.len(), "search executed");

    let html = render_results(&state.config().title, &query, &results)?;
    Ok(Html(html).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ViewerConfig;
    use audit_store::AuditStore;
    use axum::http::StatusCode;
    use std::io::Cursor;

    fn make_state(input: &str) -> Arc<ViewerState> {
        let store = Arc::new(AuditStore::load(Cursor::new(input)).unwrap());
        Arc::new(ViewerState::new(ViewerConfig::default(), store))
    }

    #[tokio::test]
    async fn test_index_lists_all_records() {
        let state = make_state("{\"verb\":\"get\"}\n{\"verb\":\"delete\"}\n");

        let Html(html) = index(State(state)).await.unwrap();

        assert!(html.contains("{&quot;verb&quot;:&quot;get&quot;}"));
        assert!(html.contains("{&quot;verb&quot;:&quot;delete&quot;}"));
    }

    #[tokio::test]
    async fn test_index_empty_store() {
        let state = make_state("");

        let Html(html) = index(State(state)).await.unwrap();

        assert!(html.contains("<div id=\"logs\">"));
        assert!(!html.contains("<pre>"));
    }

    #[tokio::test]
    async fn test_search_filters_records() {
        let state = make_state("{\"verb\":\"get\"}\n{\"verb\":\"delete\"}\n");
        let params = SearchParams {
            query: Some("delete".to_string()),
        };

        let response = search(State(state), Query(params)).await.unwrap();

        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_search_empty_query_redirects() {
        let state = make_state("{\"verb\":\"get\"}\n");
        let params = SearchParams {
            query: Some(String::new()),
        };

        let response = search(State(state), Query(params)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()["location"], "/");
    }

    #[tokio::test]
    async fn test_search_absent_query_redirects() {
        let state = make_state("{\"verb\":\"get\"}\n");
        let params = SearchParams { query: None };

        let response = search(State(state), Query(params)).await.unwrap();

        assert_eq!(response.status(), StatusCode::SEE_OTHER);
    }
}

//! Route configuration for the viewer.

use std::sync::Arc;

use axum::routing::{get, Router};
use tower_http::trace::TraceLayer;

use crate::handlers::{index, search};
use crate::state::ViewerState;

/// Create the viewer router.
pub fn create_router(state: Arc<ViewerState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/search", get(search))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}

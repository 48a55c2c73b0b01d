//! Error types for the viewer server.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Result type alias for viewer operations.
pub type WebResult<T> = Result<T, WebError>;

/// Errors that can occur in the viewer server.
#[derive(Debug, Error)]
pub enum WebError {
    /// Failed to bind to the specified address.
    #[error("failed to bind to {0}: {1}")]
    BindFailed(std::net::SocketAddr, std::io::Error),

    /// Rendering a page failed.
    ///
    /// A render fault fails the individual request; the loaded store
    /// and the process remain intact.
    #[error("render error: {0}")]
    Render(String),

    /// Internal server error.
    #[error("internal error: {0}")]
    Internal(String),
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BindFailed(_, _) | Self::Render(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Plain text, never echoing request content as markup.
        (status, self.to_string()).into_response()
    }
}

impl From<std::fmt::Error> for WebError {
    fn from(err: std::fmt::Error) -> Self {
        Self::Render(err.to_string())
    }
}

//! Viewer server implementation.

use std::net::SocketAddr;
use std::sync::Arc;

use audit_store::SharedStore;
use tokio::net::TcpListener;
use tracing::info;

use crate::config::ViewerConfig;
use crate::error::{WebError, WebResult};
use crate::routes::create_router;
use crate::state::ViewerState;

/// HTTP server for the audit log viewer.
///
/// Owns the shared state (configuration plus the loaded store) and
/// serves the listing and search pages.
#[derive(Debug, Clone)]
pub struct ViewerServer {
    state: Arc<ViewerState>,
}

impl ViewerServer {
    /// Create a new viewer server around an already-loaded store.
    #[must_use]
    pub fn new(config: ViewerConfig, store: SharedStore) -> Self {
        let state = Arc::new(ViewerState::new(config, store));
        Self { state }
    }

    /// Get the server state for external access.
    #[must_use]
    pub fn state(&self) -> Arc<ViewerState> {
        self.state.clone()
    }

    /// Start the server and listen for connections.
    ///
    /// This method runs until the server encounters a fatal error.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve(&self, addr: SocketAddr) -> WebResult<()> {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| WebError::BindFailed(addr, e))?;

        info!(addr = %addr, records = self.state.record_count(), "Audit log viewer listening");

        let router = create_router(self.state.clone());

        axum::serve(listener, router)
            .await
            .map_err(|e| WebError::Internal(e.to_string()))?;

        Ok(())
    }

    /// Start the server with graceful shutdown support.
    ///
    /// The server shuts down when the provided future completes.
    ///
    /// # Errors
    ///
    /// Returns an error if binding to the address fails.
    pub async fn serve_with_shutdown<F>(&self, addr: SocketAddr, shutdown: F) -> WebResult<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| WebError::BindFailed(addr, e))?;

        info!(addr = %addr, records = self.state.record_count(), "Audit log viewer listening");

        let router = create_router(self.state.clone());

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| WebError::Internal(e.to_string()))?;

        info!("Audit log viewer shut down");
        Ok(())
    }

    /// Create the router without starting the server.
    ///
    /// Useful for testing or embedding in another server.
    pub fn router(&self) -> axum::Router {
        create_router(self.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use audit_store::AuditStore;
    use std::io::Cursor;

    fn make_test_server(input: &str) -> ViewerServer {
        let store = Arc::new(AuditStore::load(Cursor::new(input)).unwrap());
        ViewerServer::new(ViewerConfig::default(), store)
    }

    #[test]
    fn test_server_creation() {
        let server = make_test_server("{\"a\":1}\n");

        assert_eq!(server.state().record_count(), 1);
    }

    #[test]
    fn test_server_clone_shares_state() {
        let server = make_test_server("{\"a\":1}\n{\"b\":2}\n");
        let cloned = server.clone();

        assert_eq!(
            server.state().record_count(),
            cloned.state().record_count()
        );
    }

    #[tokio::test]
    async fn test_router_creation() {
        let server = make_test_server("");
        let _router = server.router();
    }

    #[tokio::test]
    async fn test_serve_with_shutdown() {
        let server = make_test_server("{\"a\":1}\n");

        // Use a random port to avoid conflicts
        let addr = SocketAddr::from(([127, 0, 0, 1], 0));

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        let server_handle = tokio::spawn(async move {
            server
                .serve_with_shutdown(addr, async move {
                    let _ = shutdown_rx.await;
                })
                .await
        });

        // Give server a moment to start
        tokio::time::sleep(std::time::Duration::from_millis(50)).await;

        let _ = shutdown_tx.send(());

        let result =
            tokio::time::timeout(std::time::Duration::from_secs(1), server_handle).await;

        assert!(result.is_ok());
    }
}

//! Viewer server configuration.

use std::net::SocketAddr;

/// Configuration for the viewer server.
#[derive(Debug, Clone)]
pub struct ViewerConfig {
    /// Address to bind the HTTP server to.
    pub bind_addr: SocketAddr,
    /// Page title shown in the rendered documents.
    pub title: String,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            title: "Audit Log Viewer".to_string(),
        }
    }
}

impl ViewerConfig {
    /// Create a new configuration with the specified bind address.
    #[must_use]
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            ..Self::default()
        }
    }

    /// Set the page title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

//! Shared state for the viewer server.

use audit_store::SharedStore;

use crate::config::ViewerConfig;

/// Shared state for the viewer server.
///
/// Holds the configuration and the loaded store. The store is
/// populated exactly once before the server starts and is read-only
/// thereafter, so handlers read it concurrently without locking.
#[derive(Debug)]
pub struct ViewerState {
    /// Viewer configuration.
    config: ViewerConfig,
    /// The loaded audit record store.
    store: SharedStore,
}

impl ViewerState {
    /// Create a new viewer state around an already-loaded store.
    #[must_use]
    pub fn new(config: ViewerConfig, store: SharedStore) -> Self {
        Self { config, store }
    }

    /// Get the configuration.
    #[must_use]
    pub fn config(&self) -> &ViewerConfig {
        &self.config
    }

    /// Get the loaded store.
    #[must_use]
    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    /// Number of loaded records.
    #[must_use]
    pub fn record_count(&self) -> usize {
        self.store.len()
    }
}

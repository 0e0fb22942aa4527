//! Shared application state for the activities API server.
//!
//! [`AppState`] holds the roster store behind a read-write lock. The store
//! is built once at startup (seeded from the default catalog by the binary,
//! or with test data by the integration tests) and passed in explicitly --
//! there is no module-level singleton.

use std::sync::Arc;

use mergington_roster::RosterStore;
use tokio::sync::RwLock;

/// Shared state for the Axum application.
///
/// Wrapped in [`Arc`] and injected via Axum's `State` extractor. The lock
/// serializes roster mutations: concurrent signups can never duplicate an
/// email and concurrent unregisters can never double-remove one.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The roster store shared across all requests.
    pub store: Arc<RwLock<RosterStore>>,
}

impl AppState {
    /// Create application state around an already-seeded store.
    pub fn new(store: RosterStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RosterStore::new())
    }
}

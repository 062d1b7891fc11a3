//! Application state with a shared [`PetService`] for concurrent access.
//!
//! [`AppState`] wraps the service in `Arc<tokio::sync::Mutex<>>` so handlers
//! await the lock without blocking the tokio runtime. Every mutation happens
//! under the lock, so concurrent add/update requests cannot lose writes.

use std::sync::Arc;

use petstore_storage::{sample_pets, InMemoryStore};

use crate::config::ServerConfig;
use crate::service::{LookupMode, PetService};

/// Shared application state for the HTTP server.
#[derive(Clone)]
pub struct AppState {
    /// The shared pet service (async Mutex -- non-blocking await).
    pub service: Arc<tokio::sync::Mutex<PetService>>,
}

impl AppState {
    /// Creates state from server configuration, seeding the store if asked.
    pub fn new(config: &ServerConfig) -> Self {
        let store = if config.seed {
            InMemoryStore::with_pets(sample_pets())
        } else {
            InMemoryStore::new()
        };
        AppState::with_service(PetService::new(store, config.lookup))
    }

    /// Creates state around an already-built service.
    pub fn with_service(service: PetService) -> Self {
        AppState {
            service: Arc::new(tokio::sync::Mutex::new(service)),
        }
    }

    /// Creates state with an empty store in placeholder mode (for testing).
    pub fn in_memory() -> Self {
        AppState::with_service(PetService::in_memory(LookupMode::Placeholder))
    }
}

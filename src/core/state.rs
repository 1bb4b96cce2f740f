//! Shared server state

use std::sync::Arc;

use crate::core::Config;
use crate::db::store::{MemoryStore, Store};

/// Server state: the configuration plus the shared store handle.
///
/// `Arc` makes cloning cheap; one instance is shared by every request.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub store: Arc<dyn Store>,
}

impl ServerState {
    /// State backed by the in-memory reference store.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// State backed by a caller-provided store implementation.
    pub fn with_store(config: Config, store: Arc<dyn Store>) -> Self {
        Self { config, store }
    }
}

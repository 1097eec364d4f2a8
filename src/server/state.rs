//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::services::{AgentService, ListService};
use crate::storage::LeadStore;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every worker; all fields are cheap handles over the same store.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// Backing store
    pub store: Arc<dyn LeadStore>,
    /// Upload pipeline and list views
    pub lists: ListService,
    /// Agent maintenance
    pub agents: AgentService,
}

impl AppState {
    /// Create a new AppState over one store
    pub fn new(config: Config, store: Arc<dyn LeadStore>) -> Self {
        Self {
            config: Arc::new(config),
            lists: ListService::new(Arc::clone(&store)),
            agents: AgentService::new(Arc::clone(&store)),
            store,
        }
    }

    /// Get service configuration
    pub fn config(&self) -> &Config {
        &self.config
    }
}

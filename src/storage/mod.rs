//! Storage layer for agents and distributed list items
//!
//! Two backends implement the same store traits: SeaORM (PostgreSQL or
//! SQLite) and an in-process memory store used when the database is disabled.

/// Database storage module
pub mod database;
/// In-memory storage module
pub mod memory;

use crate::config::StorageConfig;
use crate::core::distribution::Distribution;
use crate::core::models::{Agent, ListItem};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

pub use database::Database;
pub use memory::MemoryStore;

/// Selects list items; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub agent_id: Option<Uuid>,
    pub batch_id: Option<String>,
}

impl ItemFilter {
    /// Items currently assigned to one agent
    pub fn agent(agent_id: Uuid) -> Self {
        Self {
            agent_id: Some(agent_id),
            ..Default::default()
        }
    }

    /// Items of one upload batch
    pub fn batch(batch_id: impl Into<String>) -> Self {
        Self {
            batch_id: Some(batch_id.into()),
            ..Default::default()
        }
    }

    pub fn matches(&self, item: &ListItem) -> bool {
        self.agent_id
            .is_none_or(|agent_id| item.assigned_agent == Some(agent_id))
            && self
                .batch_id
                .as_deref()
                .is_none_or(|batch_id| item.upload_batch == batch_id)
    }
}

/// Agent persistence
#[async_trait]
pub trait AgentStore: Send + Sync {
    /// Every agent ordered by creation time, then id
    async fn list_agents(&self) -> Result<Vec<Agent>>;

    /// Same order as [`list_agents`](Self::list_agents) but without loading
    /// owned item ids; `assigned_items` is left empty
    async fn list_agent_roster(&self) -> Result<Vec<Agent>>;

    async fn find_agent(&self, id: Uuid) -> Result<Option<Agent>>;

    async fn find_agent_by_email(&self, email: &str) -> Result<Option<Agent>>;

    async fn insert_agent(&self, agent: &Agent) -> Result<()>;

    /// Persist name, email, phone and update time; `NotFound` if the agent is gone
    async fn update_agent(&self, agent: &Agent) -> Result<()>;

    /// Remove an agent and clear its item references.
    ///
    /// Returns how many items were released. `NotFound` if the agent is gone.
    async fn delete_agent(&self, id: Uuid) -> Result<u64>;
}

/// List item persistence
#[async_trait]
pub trait ListItemStore: Send + Sync {
    /// Persist a distribution run: every item plus every agent append, or nothing.
    ///
    /// Fails with `Conflict` when an agent of the run no longer exists.
    async fn commit_distribution(&self, distribution: &Distribution) -> Result<()>;

    /// Matching items ordered by creation time, then row position
    async fn find_items(&self, filter: &ItemFilter) -> Result<Vec<ListItem>>;

    async fn count_items(&self, filter: &ItemFilter) -> Result<u64>;

    /// Live item count per owning agent; agents owning nothing are absent
    async fn count_items_by_agent(&self) -> Result<HashMap<Uuid, u64>>;
}

/// Complete backend used by the services
#[async_trait]
pub trait LeadStore: AgentStore + ListItemStore {
    async fn health_check(&self) -> Result<()>;

    fn backend_name(&self) -> &'static str;
}

/// Open the configured backend, running migrations for the database
pub async fn connect(config: &StorageConfig) -> Result<Arc<dyn LeadStore>> {
    if !config.database.enabled {
        info!("Database disabled, using in-memory store");
        return Ok(Arc::new(MemoryStore::new()));
    }

    let database = Database::new(&config.database).await?;
    database.migrate().await?;
    info!("Storage ready ({:?})", database.backend_type());
    Ok(Arc::new(database))
}

//! In-process store guarded by a single read-write lock

use super::{AgentStore, ItemFilter, LeadStore, ListItemStore};
use crate::core::distribution::Distribution;
use crate::core::models::{Agent, ListItem};
use crate::utils::error::{DispatchError, Result};
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Default)]
struct MemoryState {
    agents: Vec<Agent>,
    items: Vec<ListItem>,
}

/// Store that keeps everything in memory; contents are lost on restart
#[derive(Debug, Default)]
pub struct MemoryStore {
    state: RwLock<MemoryState>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AgentStore for MemoryStore {
    async fn list_agents(&self) -> Result<Vec<Agent>> {
        let mut agents = self.state.read().agents.clone();
        agents.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(agents)
    }

    async fn list_agent_roster(&self) -> Result<Vec<Agent>> {
        let mut agents = self.list_agents().await?;
        for agent in &mut agents {
            agent.assigned_items.clear();
        }
        Ok(agents)
    }

    async fn find_agent(&self, id: Uuid) -> Result<Option<Agent>> {
        Ok(self.state.read().agents.iter().find(|a| a.id == id).cloned())
    }

    async fn find_agent_by_email(&self, email: &str) -> Result<Option<Agent>> {
        Ok(self
            .state
            .read()
            .agents
            .iter()
            .find(|a| a.email == email)
            .cloned())
    }

    async fn insert_agent(&self, agent: &Agent) -> Result<()> {
        let mut state = self.state.write();
        if state.agents.iter().any(|a| a.id == agent.id || a.email == agent.email) {
            return Err(DispatchError::conflict("Agent already exists"));
        }
        state.agents.push(agent.clone());
        debug!("Inserted agent {}", agent.id);
        Ok(())
    }

    async fn update_agent(&self, agent: &Agent) -> Result<()> {
        let mut state = self.state.write();
        let stored = state
            .agents
            .iter_mut()
            .find(|a| a.id == agent.id)
            .ok_or_else(|| DispatchError::not_found("Agent not found"))?;

        stored.name = agent.name.clone();
        stored.email = agent.email.clone();
        stored.phone = agent.phone.clone();
        stored.updated_at = agent.updated_at;
        Ok(())
    }

    async fn delete_agent(&self, id: Uuid) -> Result<u64> {
        let mut state = self.state.write();
        let index = state
            .agents
            .iter()
            .position(|a| a.id == id)
            .ok_or_else(|| DispatchError::not_found("Agent not found"))?;
        state.agents.remove(index);

        let mut released = 0;
        for item in state.items.iter_mut().filter(|i| i.assigned_agent == Some(id)) {
            item.assigned_agent = None;
            released += 1;
        }
        debug!("Deleted agent {}, released {} items", id, released);
        Ok(released)
    }
}

#[async_trait]
impl ListItemStore for MemoryStore {
    async fn commit_distribution(&self, distribution: &Distribution) -> Result<()> {
        let mut state = self.state.write();

        let missing = distribution
            .assignments
            .iter()
            .any(|a| !state.agents.iter().any(|agent| agent.id == a.agent_id));
        if missing {
            return Err(DispatchError::conflict(
                "Agent set changed during distribution; re-submit the upload",
            ));
        }

        state.items.extend(distribution.items.iter().cloned());
        for assignment in &distribution.assignments {
            if let Some(agent) = state.agents.iter_mut().find(|a| a.id == assignment.agent_id) {
                agent.assigned_items.extend(assignment.item_ids.iter().copied());
            }
        }
        Ok(())
    }

    async fn find_items(&self, filter: &ItemFilter) -> Result<Vec<ListItem>> {
        let mut items: Vec<ListItem> = self
            .state
            .read()
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect();
        items.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.position.cmp(&b.position))
        });
        Ok(items)
    }

    async fn count_items(&self, filter: &ItemFilter) -> Result<u64> {
        Ok(self
            .state
            .read()
            .items
            .iter()
            .filter(|item| filter.matches(item))
            .count() as u64)
    }

    async fn count_items_by_agent(&self) -> Result<HashMap<Uuid, u64>> {
        let mut counts = HashMap::new();
        for agent_id in self.state.read().items.iter().filter_map(|i| i.assigned_agent) {
            *counts.entry(agent_id).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

#[async_trait]
impl LeadStore for MemoryStore {
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

//! Agent registration and maintenance

use crate::core::aggregate::BatchRegistry;
use crate::core::models::{Agent, AgentItems, AgentUpdate, NewAgent};
use crate::storage::LeadStore;
use crate::utils::error::{DispatchError, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\S+@\S+\.\S+$").expect("Invalid email regex"));

/// Agent CRUD on top of the lead store
#[derive(Clone)]
pub struct AgentService {
    store: Arc<dyn LeadStore>,
    registry: BatchRegistry,
}

impl AgentService {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self {
            registry: BatchRegistry::new(Arc::clone(&store)),
            store,
        }
    }

    /// Register an agent; the email must be unused
    pub async fn create(&self, new_agent: NewAgent) -> Result<Agent> {
        let NewAgent { name, email, phone } = new_agent;
        let (name, email, phone) = (name.trim(), email.trim(), phone.trim());

        require("name", name)?;
        require("email", email)?;
        require("phone", phone)?;
        check_email(email)?;

        if self.store.find_agent_by_email(email).await?.is_some() {
            return Err(DispatchError::bad_request("Agent already exists"));
        }

        let agent = Agent::new(name, email, phone);
        self.store.insert_agent(&agent).await?;
        info!("Agent {} registered ({})", agent.id, agent.email);
        Ok(agent)
    }

    /// Every agent in distribution order
    pub async fn list(&self) -> Result<Vec<Agent>> {
        self.store.list_agents().await
    }

    pub async fn get(&self, id: Uuid) -> Result<Agent> {
        self.store
            .find_agent(id)
            .await?
            .ok_or_else(|| DispatchError::not_found("Agent not found"))
    }

    /// Apply a partial update; blank fields keep their current value
    pub async fn update(&self, id: Uuid, update: AgentUpdate) -> Result<Agent> {
        let mut agent = self.get(id).await?;

        let update = AgentUpdate {
            name: update.name.map(|v| v.trim().to_string()),
            email: update.email.map(|v| v.trim().to_string()),
            phone: update.phone.map(|v| v.trim().to_string()),
        };

        if let Some(email) = update.email.as_deref().filter(|e| !e.is_empty()) {
            check_email(email)?;
            if let Some(other) = self.store.find_agent_by_email(email).await? {
                if other.id != id {
                    return Err(DispatchError::bad_request("Agent already exists"));
                }
            }
        }

        agent.apply(update);
        self.store.update_agent(&agent).await?;
        Ok(agent)
    }

    /// Remove an agent; its items stay but lose their owner
    pub async fn delete(&self, id: Uuid) -> Result<u64> {
        let released = self.store.delete_agent(id).await?;
        info!("Agent {} removed, {} items unassigned", id, released);
        Ok(released)
    }

    pub async fn assigned_items(&self, id: Uuid) -> Result<AgentItems> {
        self.registry.agent_items(id).await
    }
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(DispatchError::bad_request(format!("Agent {} is required", field)));
    }
    Ok(())
}

fn check_email(email: &str) -> Result<()> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(DispatchError::bad_request("Please enter a valid email"));
    }
    Ok(())
}

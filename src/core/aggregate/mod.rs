//! Read-side views over distributed items: batches, per-agent totals and
//! per-agent detail

use crate::core::models::{
    AgentAssignmentSummary, AgentDetail, AgentItems, BatchDetail, BatchSummary,
    DistributionOverview, ListItem,
};
use crate::storage::{ItemFilter, LeadStore};
use crate::utils::error::{DispatchError, Result};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Aggregation queries over the lead store
#[derive(Clone)]
pub struct BatchRegistry {
    store: Arc<dyn LeadStore>,
}

impl BatchRegistry {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }

    /// Every batch, newest first
    pub async fn list_batches(&self) -> Result<Vec<BatchSummary>> {
        let items = self.store.find_items(&ItemFilter::default()).await?;
        Ok(summarize_batches(&items))
    }

    /// Live item count for every agent, ordered by name then email
    pub async fn assignment_summary(&self) -> Result<Vec<AgentAssignmentSummary>> {
        let agents = self.store.list_agent_roster().await?;
        let counts = self.store.count_items_by_agent().await?;

        let mut summary: Vec<AgentAssignmentSummary> = agents
            .into_iter()
            .map(|agent| AgentAssignmentSummary {
                total_assigned_count: counts.get(&agent.id).copied().unwrap_or(0),
                agent_id: agent.id,
                name: agent.name,
                email: agent.email,
                phone: agent.phone,
            })
            .collect();

        summary.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.email.cmp(&b.email)));
        Ok(summary)
    }

    /// Batches plus per-agent totals
    pub async fn overview(&self) -> Result<DistributionOverview> {
        let batches = self.list_batches().await?;
        let distribution_summary = self.assignment_summary().await?;
        debug!(
            "Overview: {} batches, {} agents",
            batches.len(),
            distribution_summary.len()
        );
        Ok(DistributionOverview {
            batches,
            distribution_summary,
        })
    }

    /// One agent's items, newest first, with the batch breakdown of those items
    pub async fn agent_detail(&self, agent_id: Uuid) -> Result<AgentDetail> {
        let AgentItems {
            agent,
            assigned_items,
        } = self.agent_items(agent_id).await?;
        let batches = summarize_batches(&assigned_items);

        Ok(AgentDetail {
            agent,
            assigned_items,
            batches,
        })
    }

    /// One agent with its items, newest first
    pub async fn agent_items(&self, agent_id: Uuid) -> Result<AgentItems> {
        let agent = self
            .store
            .find_agent(agent_id)
            .await?
            .ok_or_else(|| DispatchError::not_found("Agent not found"))?;

        let mut assigned_items = self.store.find_items(&ItemFilter::agent(agent_id)).await?;
        sort_newest_first(&mut assigned_items);

        Ok(AgentItems {
            agent,
            assigned_items,
        })
    }

    /// Every item of one batch in row order
    pub async fn batch_detail(&self, batch_id: &str) -> Result<BatchDetail> {
        let mut items = self.store.find_items(&ItemFilter::batch(batch_id)).await?;
        if items.is_empty() {
            return Err(DispatchError::not_found("Batch not found"));
        }
        items.sort_by_key(|item| item.position);

        Ok(BatchDetail {
            batch_id: batch_id.to_string(),
            items,
        })
    }
}

/// Group items by batch id; newest batch first, ties broken by batch id descending
pub fn summarize_batches(items: &[ListItem]) -> Vec<BatchSummary> {
    let mut batches: HashMap<&str, BatchSummary> = HashMap::new();
    for item in items {
        batches
            .entry(item.upload_batch.as_str())
            .and_modify(|batch| {
                batch.item_count += 1;
                batch.earliest_created_at = batch.earliest_created_at.min(item.created_at);
            })
            .or_insert_with(|| BatchSummary {
                batch_id: item.upload_batch.clone(),
                item_count: 1,
                earliest_created_at: item.created_at,
            });
    }

    let mut batches: Vec<BatchSummary> = batches.into_values().collect();
    batches.sort_by(|a, b| {
        b.earliest_created_at
            .cmp(&a.earliest_created_at)
            .then_with(|| b.batch_id.cmp(&a.batch_id))
    });
    batches
}

fn sort_newest_first(items: &mut [ListItem]) {
    items.sort_by(|a, b| {
        b.created_at
            .cmp(&a.created_at)
            .then_with(|| a.position.cmp(&b.position))
    });
}

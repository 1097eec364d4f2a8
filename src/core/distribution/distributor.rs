//! Distribution runs against the lead store

use super::{AgentAssignment, Distribution, assign_round_robin, mint_batch_id};
use crate::core::models::{Agent, LeadRow, ListItem};
use crate::storage::LeadStore;
use crate::utils::error::Result;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{debug, info};

/// Assigns uploaded rows to agents and persists the outcome
#[derive(Clone)]
pub struct Distributor {
    store: Arc<dyn LeadStore>,
}

impl Distributor {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self { store }
    }

    /// Distribute rows using the current time as the creation timestamp
    pub async fn distribute(&self, rows: Vec<LeadRow>) -> Result<Distribution> {
        self.distribute_at(rows, Utc::now()).await
    }

    /// Distribute rows, stamping every item with `created_at`.
    ///
    /// The agent set is read once; the whole run is planned against that
    /// snapshot and committed as one unit. On any error nothing is persisted.
    pub async fn distribute_at(
        &self,
        rows: Vec<LeadRow>,
        created_at: DateTime<Utc>,
    ) -> Result<Distribution> {
        let agents = self.store.list_agent_roster().await?;
        debug!("Agent snapshot holds {} agents", agents.len());

        let distribution = plan_distribution(rows, &agents, mint_batch_id(), created_at)?;
        self.store.commit_distribution(&distribution).await?;

        info!(
            "Distributed {} items across {} agents in batch {}",
            distribution.item_count(),
            agents.len(),
            distribution.batch_id
        );
        Ok(distribution)
    }
}

/// Build the items and per-agent appends for one run without touching storage
pub fn plan_distribution(
    rows: Vec<LeadRow>,
    agents: &[Agent],
    batch_id: String,
    created_at: DateTime<Utc>,
) -> Result<Distribution> {
    let plan = assign_round_robin(rows.len(), agents.len())?;

    let mut assignments: Vec<AgentAssignment> = agents
        .iter()
        .map(|agent| AgentAssignment {
            agent_id: agent.id,
            item_ids: Vec::new(),
        })
        .collect();

    let mut items = Vec::with_capacity(rows.len());
    for (position, (row, agent_index)) in rows.into_iter().zip(plan).enumerate() {
        let agent_id = agents[agent_index].id;
        let item = ListItem::from_row(row, agent_id, &batch_id, position as u32, created_at);
        assignments[agent_index].item_ids.push(item.id);
        items.push(item);
    }

    Ok(Distribution {
        batch_id,
        items,
        assignments,
    })
}

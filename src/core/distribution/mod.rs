//! Fair distribution of validated rows across the registered agents
//!
//! Planning is pure ([`plan_distribution`]); the [`Distributor`] takes one
//! agent snapshot, plans against it and hands the result to the store, which
//! persists items and agent ownership as a single unit.

mod distributor;
mod planner;

pub use distributor::{Distributor, plan_distribution};
pub use planner::assign_round_robin;

use crate::core::models::ListItem;
use uuid::Uuid;

/// Items appended to one agent by a distribution run, in row order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentAssignment {
    pub agent_id: Uuid,
    pub item_ids: Vec<Uuid>,
}

/// Result of one distribution run
#[derive(Debug, Clone)]
pub struct Distribution {
    /// Batch identifier shared by every item
    pub batch_id: String,
    /// New items in source row order
    pub items: Vec<ListItem>,
    /// Per-agent appends, in snapshot order
    pub assignments: Vec<AgentAssignment>,
}

impl Distribution {
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Agents referenced by this run
    pub fn agent_ids(&self) -> Vec<Uuid> {
        self.assignments.iter().map(|a| a.agent_id).collect()
    }
}

/// Mint a batch identifier.
///
/// UUIDv7 strings are unique across concurrent uploads and sort by creation time.
pub fn mint_batch_id() -> String {
    Uuid::now_v7().to_string()
}

//! Derived read models returned by the aggregation queries

use super::{Agent, ListItem};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// One upload batch, derived by grouping items on their batch id
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchSummary {
    pub batch_id: String,
    pub item_count: u64,
    /// Earliest item creation time in the batch
    pub earliest_created_at: DateTime<Utc>,
}

/// Live assignment total for one agent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentAssignmentSummary {
    pub agent_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub total_assigned_count: u64,
}

/// Dashboard view: every batch plus per-agent totals
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionOverview {
    pub batches: Vec<BatchSummary>,
    pub distribution_summary: Vec<AgentAssignmentSummary>,
}

/// One agent with its items and batch breakdown
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentDetail {
    pub agent: Agent,
    pub assigned_items: Vec<ListItem>,
    pub batches: Vec<BatchSummary>,
}

/// One agent with its items
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AgentItems {
    pub agent: Agent,
    pub assigned_items: Vec<ListItem>,
}

/// Every item of one upload batch, in row order
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchDetail {
    pub batch_id: String,
    pub items: Vec<ListItem>,
}

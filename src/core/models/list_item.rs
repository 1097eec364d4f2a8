//! List item domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One validated lead row, ready for distribution
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LeadRow {
    pub first_name: String,
    pub phone: String,
    pub notes: String,
}

/// One distributed lead
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListItem {
    /// Item ID
    pub id: Uuid,
    pub first_name: String,
    pub phone: String,
    pub notes: String,
    /// Owning agent; cleared when the agent is deleted
    pub assigned_agent: Option<Uuid>,
    /// Upload batch identifier
    pub upload_batch: String,
    /// Zero-based row position within the upload
    pub position: u32,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl ListItem {
    /// Build an item from a validated row
    pub fn from_row(
        row: LeadRow,
        agent_id: Uuid,
        batch_id: &str,
        position: u32,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            first_name: row.first_name,
            phone: row.phone,
            notes: row.notes,
            assigned_agent: Some(agent_id),
            upload_batch: batch_id.to_string(),
            position,
            created_at,
        }
    }
}

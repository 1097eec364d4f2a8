//! Agent domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A sales agent that receives distributed leads
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Agent {
    /// Agent ID
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique)
    pub email: String,
    /// Phone number
    pub phone: String,
    /// Items handed to this agent, in assignment order
    #[serde(default)]
    pub assigned_items: Vec<Uuid>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl Agent {
    /// Create a new agent with a fresh ID
    pub fn new(name: impl Into<String>, email: impl Into<String>, phone: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            email: email.into(),
            phone: phone.into(),
            assigned_items: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Apply a partial update; empty strings leave a field unchanged
    pub fn apply(&mut self, update: AgentUpdate) {
        if let Some(name) = update.name.filter(|v| !v.is_empty()) {
            self.name = name;
        }
        if let Some(email) = update.email.filter(|v| !v.is_empty()) {
            self.email = email;
        }
        if let Some(phone) = update.phone.filter(|v| !v.is_empty()) {
            self.phone = phone;
        }
        self.updated_at = Utc::now();
    }
}

/// Payload for registering an agent
#[derive(Debug, Clone, Deserialize)]
pub struct NewAgent {
    pub name: String,
    pub email: String,
    pub phone: String,
}

/// Partial update payload for an agent
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AgentUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

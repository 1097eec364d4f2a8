//! Test fixtures and data factories
//!
//! All factories create real objects, not mocks.

use bytes::Bytes;
use chrono::{DateTime, Duration, TimeZone, Utc};
use lead_dispatch::core::models::Agent;
use lead_dispatch::services::UploadedFile;
use lead_dispatch::storage::{AgentStore, LeadStore};

/// Factory for creating test agents
pub struct AgentFactory;

impl AgentFactory {
    /// Fixed reference time so creation order is deterministic
    pub fn epoch() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
    }

    /// Agent created `seq` minutes after the epoch
    pub fn create(name: &str, seq: i64) -> Agent {
        let mut agent = Agent::new(
            name,
            format!("{}@example.com", name.to_lowercase()),
            format!("+1 555 01{:02}", seq),
        );
        agent.created_at = Self::epoch() + Duration::minutes(seq);
        agent.updated_at = agent.created_at;
        agent
    }

    /// Insert agents with the given names, in creation order
    pub async fn seed(store: &dyn LeadStore, names: &[&str]) -> Vec<Agent> {
        let mut agents = Vec::with_capacity(names.len());
        for (seq, name) in names.iter().enumerate() {
            let agent = Self::create(name, seq as i64);
            store
                .insert_agent(&agent)
                .await
                .expect("Failed to insert agent");
            agents.push(agent);
        }
        agents
    }
}

/// Factory for upload payloads
pub struct UploadFactory;

impl UploadFactory {
    /// CSV body with the mandatory columns and `rows` numbered leads
    pub fn csv_body(rows: usize) -> String {
        let mut body = String::from("FirstName,Phone,Notes\n");
        for i in 0..rows {
            body.push_str(&format!("Lead{},555-{:04},note {}\n", i, i, i));
        }
        body
    }

    /// CSV upload with `rows` leads
    pub fn csv(rows: usize) -> UploadedFile {
        Self::raw("text/csv", Self::csv_body(rows))
    }

    /// Upload with an arbitrary content type and body
    pub fn raw(content_type: &str, body: impl Into<Bytes>) -> UploadedFile {
        UploadedFile {
            file_name: Some("leads.csv".to_string()),
            content_type: content_type.to_string(),
            bytes: body.into(),
        }
    }

    /// Encode a single-file multipart form body
    pub fn multipart(
        boundary: &str,
        field: &str,
        file_name: &str,
        content_type: &str,
        data: &[u8],
    ) -> Vec<u8> {
        let mut body = Vec::new();
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                field, file_name
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(data);
        body.extend_from_slice(format!("\r\n--{}--\r\n", boundary).as_bytes());
        body
    }
}

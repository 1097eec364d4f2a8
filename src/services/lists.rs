//! Upload pipeline and list views

use crate::core::aggregate::BatchRegistry;
use crate::core::distribution::Distributor;
use crate::core::ingest::{parse_upload, validate_rows};
use crate::core::models::{AgentDetail, BatchDetail, DistributionOverview};
use crate::storage::LeadStore;
use crate::utils::error::Result;
use bytes::Bytes;
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, warn};
use uuid::Uuid;

/// A fully received upload
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Client-supplied file name, used for logging only
    pub file_name: Option<String>,
    /// Declared MIME type
    pub content_type: String,
    pub bytes: Bytes,
}

/// Response body for a successful upload
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadOutcome {
    pub message: String,
    pub item_count: usize,
    pub batch_id: String,
}

/// Parses, validates and distributes uploads; serves the list views
#[derive(Clone)]
pub struct ListService {
    distributor: Distributor,
    registry: BatchRegistry,
}

impl ListService {
    pub fn new(store: Arc<dyn LeadStore>) -> Self {
        Self {
            distributor: Distributor::new(Arc::clone(&store)),
            registry: BatchRegistry::new(store),
        }
    }

    /// Run the whole pipeline for one file; any failure leaves storage untouched
    pub async fn upload(&self, file: UploadedFile) -> Result<UploadOutcome> {
        let name = file.file_name.as_deref().unwrap_or("<unnamed>");

        let outcome = self.ingest(&file).await;
        match &outcome {
            Ok(outcome) => info!(
                "Upload {} accepted: {} items in batch {}",
                name, outcome.item_count, outcome.batch_id
            ),
            Err(e) if e.is_client_error() => warn!("Upload {} rejected: {}", name, e),
            Err(e) => error!("Upload {} failed: {}", name, e),
        }
        outcome
    }

    async fn ingest(&self, file: &UploadedFile) -> Result<UploadOutcome> {
        let rows = parse_upload(&file.content_type, &file.bytes)?;
        let leads = validate_rows(rows)?;
        let distribution = self.distributor.distribute(leads).await?;

        Ok(UploadOutcome {
            message: "List uploaded and distributed successfully".to_string(),
            item_count: distribution.item_count(),
            batch_id: distribution.batch_id,
        })
    }

    pub async fn overview(&self) -> Result<DistributionOverview> {
        self.registry.overview().await
    }

    pub async fn agent_detail(&self, agent_id: Uuid) -> Result<AgentDetail> {
        self.registry.agent_detail(agent_id).await
    }

    pub async fn batch_detail(&self, batch_id: &str) -> Result<BatchDetail> {
        self.registry.batch_detail(batch_id).await
    }
}

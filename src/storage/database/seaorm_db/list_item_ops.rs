use crate::core::distribution::Distribution;
use crate::core::models::ListItem;
use crate::storage::{ItemFilter, ListItemStore};
use crate::utils::error::{DispatchError, Result};
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::super::entities;
use super::types::SeaOrmDatabase;

/// Rows per INSERT statement; keeps SQLite under its bind-parameter limit
const INSERT_CHUNK: usize = 500;

#[derive(Debug, FromQueryResult)]
struct AgentItemCount {
    assigned_agent_id: Uuid,
    item_count: i64,
}

fn filtered(filter: &ItemFilter) -> Select<entities::ListItem> {
    let mut query = entities::ListItem::find();
    if let Some(agent_id) = filter.agent_id {
        query = query.filter(entities::list_item::Column::AssignedAgentId.eq(agent_id));
    }
    if let Some(batch_id) = &filter.batch_id {
        query = query.filter(entities::list_item::Column::UploadBatch.eq(batch_id.as_str()));
    }
    query
}

#[async_trait]
impl ListItemStore for SeaOrmDatabase {
    async fn commit_distribution(&self, distribution: &Distribution) -> Result<()> {
        debug!(
            "Committing batch {} ({} items)",
            distribution.batch_id,
            distribution.item_count()
        );

        // Dropping the transaction without commit rolls everything back
        let txn = self.db.begin().await.map_err(DispatchError::Database)?;

        let agent_ids = distribution.agent_ids();
        if !agent_ids.is_empty() {
            let present = entities::Agent::find()
                .filter(entities::agent::Column::Id.is_in(agent_ids.clone()))
                .count(&txn)
                .await
                .map_err(DispatchError::Database)?;
            if present != agent_ids.len() as u64 {
                return Err(DispatchError::conflict(
                    "Agent set changed during distribution; re-submit the upload",
                ));
            }
        }

        for chunk in distribution.items.chunks(INSERT_CHUNK) {
            entities::ListItem::insert_many(chunk.iter().map(entities::list_item::ActiveModel::from))
                .exec_without_returning(&txn)
                .await
                .map_err(DispatchError::Database)?;
        }

        let assigned_at = distribution
            .items
            .first()
            .map(|item| item.created_at)
            .unwrap_or_else(chrono::Utc::now);
        let links: Vec<entities::agent_item::ActiveModel> = distribution
            .assignments
            .iter()
            .flat_map(|assignment| {
                assignment
                    .item_ids
                    .iter()
                    .enumerate()
                    .map(move |(position, item_id)| entities::agent_item::ActiveModel {
                        agent_id: Set(assignment.agent_id),
                        list_item_id: Set(*item_id),
                        position: Set(position as i32),
                        assigned_at: Set(assigned_at.into()),
                    })
            })
            .collect();
        for chunk in links.chunks(INSERT_CHUNK) {
            entities::AgentItem::insert_many(chunk.iter().cloned())
                .exec_without_returning(&txn)
                .await
                .map_err(DispatchError::Database)?;
        }

        txn.commit().await.map_err(DispatchError::Database)?;
        Ok(())
    }

    async fn find_items(&self, filter: &ItemFilter) -> Result<Vec<ListItem>> {
        let models = filtered(filter)
            .order_by_asc(entities::list_item::Column::CreatedAt)
            .order_by_asc(entities::list_item::Column::Position)
            .all(&self.db)
            .await
            .map_err(DispatchError::Database)?;

        let mut items: Vec<ListItem> = models.into_iter().map(ListItem::from).collect();
        items.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.position.cmp(&b.position))
        });
        Ok(items)
    }

    async fn count_items(&self, filter: &ItemFilter) -> Result<u64> {
        filtered(filter)
            .count(&self.db)
            .await
            .map_err(DispatchError::Database)
    }

    async fn count_items_by_agent(&self) -> Result<HashMap<Uuid, u64>> {
        let rows = entities::ListItem::find()
            .select_only()
            .column(entities::list_item::Column::AssignedAgentId)
            .column_as(
                Expr::col(entities::list_item::Column::Id).count(),
                "item_count",
            )
            .filter(entities::list_item::Column::AssignedAgentId.is_not_null())
            .group_by(entities::list_item::Column::AssignedAgentId)
            .into_model::<AgentItemCount>()
            .all(&self.db)
            .await
            .map_err(DispatchError::Database)?;

        Ok(rows
            .into_iter()
            .map(|row| (row.assigned_agent_id, row.item_count.max(0) as u64))
            .collect())
    }
}

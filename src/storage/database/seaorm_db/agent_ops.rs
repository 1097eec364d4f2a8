use crate::core::models::Agent;
use crate::storage::AgentStore;
use crate::utils::error::{DispatchError, Result};
use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::*;
use std::collections::HashMap;
use tracing::debug;
use uuid::Uuid;

use super::super::entities;
use super::types::SeaOrmDatabase;

impl SeaOrmDatabase {
    /// Owned item ids per agent, in append order
    async fn owned_items<C: ConnectionTrait>(
        conn: &C,
        agent_id: Option<Uuid>,
    ) -> Result<HashMap<Uuid, Vec<Uuid>>> {
        let mut query = entities::AgentItem::find();
        if let Some(agent_id) = agent_id {
            query = query.filter(entities::agent_item::Column::AgentId.eq(agent_id));
        }

        let mut links = query
            .order_by_asc(entities::agent_item::Column::AssignedAt)
            .order_by_asc(entities::agent_item::Column::Position)
            .all(conn)
            .await
            .map_err(DispatchError::Database)?;

        links.sort_by(|a, b| {
            a.assigned_at
                .cmp(&b.assigned_at)
                .then_with(|| a.position.cmp(&b.position))
        });

        let mut owned: HashMap<Uuid, Vec<Uuid>> = HashMap::new();
        for link in links {
            owned.entry(link.agent_id).or_default().push(link.list_item_id);
        }
        Ok(owned)
    }

    async fn load_agent(&self, model: Option<entities::agent::Model>) -> Result<Option<Agent>> {
        let Some(model) = model else {
            return Ok(None);
        };
        let mut owned = Self::owned_items(&self.db, Some(model.id)).await?;
        let items = owned.remove(&model.id).unwrap_or_default();
        Ok(Some(model.into_agent(items)))
    }
}

#[async_trait]
impl AgentStore for SeaOrmDatabase {
    async fn list_agents(&self) -> Result<Vec<Agent>> {
        let models = entities::Agent::find()
            .order_by_asc(entities::agent::Column::CreatedAt)
            .order_by_asc(entities::agent::Column::Id)
            .all(&self.db)
            .await
            .map_err(DispatchError::Database)?;
        let mut owned = Self::owned_items(&self.db, None).await?;

        let mut agents: Vec<Agent> = models
            .into_iter()
            .map(|model| {
                let items = owned.remove(&model.id).unwrap_or_default();
                model.into_agent(items)
            })
            .collect();
        // Timestamps round-trip through text on SQLite
        agents.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(agents)
    }

    async fn list_agent_roster(&self) -> Result<Vec<Agent>> {
        let mut agents: Vec<Agent> = entities::Agent::find()
            .order_by_asc(entities::agent::Column::CreatedAt)
            .order_by_asc(entities::agent::Column::Id)
            .all(&self.db)
            .await
            .map_err(DispatchError::Database)?
            .into_iter()
            .map(|model| model.into_agent(Vec::new()))
            .collect();
        agents.sort_by(|a, b| a.created_at.cmp(&b.created_at).then_with(|| a.id.cmp(&b.id)));
        Ok(agents)
    }

    async fn find_agent(&self, id: Uuid) -> Result<Option<Agent>> {
        let model = entities::Agent::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(DispatchError::Database)?;
        self.load_agent(model).await
    }

    async fn find_agent_by_email(&self, email: &str) -> Result<Option<Agent>> {
        let model = entities::Agent::find()
            .filter(entities::agent::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(DispatchError::Database)?;
        self.load_agent(model).await
    }

    async fn insert_agent(&self, agent: &Agent) -> Result<()> {
        debug!("Inserting agent: {}", agent.id);

        entities::Agent::insert(entities::agent::ActiveModel::from(agent))
            .exec(&self.db)
            .await
            .map_err(|e| match e.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => {
                    DispatchError::conflict("Agent already exists")
                }
                _ => DispatchError::Database(e),
            })?;
        Ok(())
    }

    async fn update_agent(&self, agent: &Agent) -> Result<()> {
        debug!("Updating agent: {}", agent.id);

        let model = entities::Agent::find_by_id(agent.id)
            .one(&self.db)
            .await
            .map_err(DispatchError::Database)?
            .ok_or_else(|| DispatchError::not_found("Agent not found"))?;

        let mut active_model: entities::agent::ActiveModel = model.into();
        active_model.name = Set(agent.name.clone());
        active_model.email = Set(agent.email.clone());
        active_model.phone = Set(agent.phone.clone());
        active_model.updated_at = Set(agent.updated_at.into());

        active_model
            .update(&self.db)
            .await
            .map_err(DispatchError::Database)?;
        Ok(())
    }

    async fn delete_agent(&self, id: Uuid) -> Result<u64> {
        debug!("Deleting agent: {}", id);

        let txn = self.db.begin().await.map_err(DispatchError::Database)?;

        let exists = entities::Agent::find_by_id(id)
            .one(&txn)
            .await
            .map_err(DispatchError::Database)?
            .is_some();
        if !exists {
            return Err(DispatchError::not_found("Agent not found"));
        }

        let released = entities::ListItem::update_many()
            .col_expr(
                entities::list_item::Column::AssignedAgentId,
                Expr::value(Option::<Uuid>::None),
            )
            .filter(entities::list_item::Column::AssignedAgentId.eq(id))
            .exec(&txn)
            .await
            .map_err(DispatchError::Database)?
            .rows_affected;

        entities::AgentItem::delete_many()
            .filter(entities::agent_item::Column::AgentId.eq(id))
            .exec(&txn)
            .await
            .map_err(DispatchError::Database)?;

        entities::Agent::delete_by_id(id)
            .exec(&txn)
            .await
            .map_err(DispatchError::Database)?;

        txn.commit().await.map_err(DispatchError::Database)?;

        debug!("Agent {} deleted, {} items released", id, released);
        Ok(released)
    }
}

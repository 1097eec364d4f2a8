use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Distributed list item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "list_items")]
pub struct Model {
    /// Item ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    pub first_name: String,

    pub phone: String,

    #[sea_orm(column_type = "Text")]
    pub notes: String,

    /// Owning agent, null once the agent is deleted
    pub assigned_agent_id: Option<Uuid>,

    /// Upload batch identifier
    pub upload_batch: String,

    /// Row position within the upload
    pub position: i32,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,
}

/// List item entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::AssignedAgentId",
        to = "super::agent::Column::Id",
        on_delete = "SetNull"
    )]
    Agent,
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for crate::core::models::ListItem {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name,
            phone: model.phone,
            notes: model.notes,
            assigned_agent: model.assigned_agent_id,
            upload_batch: model.upload_batch,
            position: model.position.max(0) as u32,
            created_at: model.created_at.into(),
        }
    }
}

impl From<&crate::core::models::ListItem> for ActiveModel {
    fn from(item: &crate::core::models::ListItem) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(item.id),
            first_name: Set(item.first_name.clone()),
            phone: Set(item.phone.clone()),
            notes: Set(item.notes.clone()),
            assigned_agent_id: Set(item.assigned_agent),
            upload_batch: Set(item.upload_batch.clone()),
            position: Set(item.position as i32),
            created_at: Set(item.created_at.into()),
        }
    }
}

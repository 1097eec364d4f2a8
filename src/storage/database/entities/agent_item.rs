use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Ownership link: one row per item appended to an agent
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "agent_items")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub agent_id: Uuid,

    #[sea_orm(primary_key, auto_increment = false)]
    pub list_item_id: Uuid,

    /// Append order within one distribution run
    pub position: i32,

    /// When the item was appended
    pub assigned_at: DateTimeWithTimeZone,
}

/// Agent item entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::agent::Entity",
        from = "Column::AgentId",
        to = "super::agent::Column::Id",
        on_delete = "Cascade"
    )]
    Agent,
    #[sea_orm(
        belongs_to = "super::list_item::Entity",
        from = "Column::ListItemId",
        to = "super::list_item::Column::Id",
        on_delete = "Cascade"
    )]
    ListItem,
}

impl Related<super::agent::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Agent.def()
    }
}

impl Related<super::list_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListItem.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

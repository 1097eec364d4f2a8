use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Agent database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "agents")]
pub struct Model {
    /// Agent ID
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Display name
    pub name: String,

    /// Email address
    #[sea_orm(unique)]
    pub email: String,

    /// Phone number
    pub phone: String,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

/// Agent entity relations
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::list_item::Entity")]
    ListItems,
    #[sea_orm(has_many = "super::agent_item::Entity")]
    AgentItems,
}

impl Related<super::list_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ListItems.def()
    }
}

impl Related<super::agent_item::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AgentItems.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert to the domain agent with its owned item ids
    pub fn into_agent(self, assigned_items: Vec<Uuid>) -> crate::core::models::Agent {
        crate::core::models::Agent {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            assigned_items,
            created_at: self.created_at.into(),
            updated_at: self.updated_at.into(),
        }
    }
}

impl From<&crate::core::models::Agent> for ActiveModel {
    fn from(agent: &crate::core::models::Agent) -> Self {
        use sea_orm::ActiveValue::Set;

        Self {
            id: Set(agent.id),
            name: Set(agent.name.clone()),
            email: Set(agent.email.clone()),
            phone: Set(agent.phone.clone()),
            created_at: Set(agent.created_at.into()),
            updated_at: Set(agent.updated_at.into()),
        }
    }
}

/// Agent entity module
pub mod agent;
/// Agent-to-item ownership link entity module
pub mod agent_item;
/// List item entity module
pub mod list_item;

pub use agent::Entity as Agent;
pub use agent_item::Entity as AgentItem;
pub use list_item::Entity as ListItem;

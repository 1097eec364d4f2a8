//! Domain models for agents, list items and derived summaries

pub mod agent;
pub mod list_item;
pub mod summary;

pub use agent::{Agent, AgentUpdate, NewAgent};
pub use list_item::{LeadRow, ListItem};
pub use summary::{
    AgentAssignmentSummary, AgentDetail, AgentItems, BatchDetail, BatchSummary,
    DistributionOverview,
};

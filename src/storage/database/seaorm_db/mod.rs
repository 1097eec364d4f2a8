// Module declarations
mod agent_ops;
mod connection;
mod list_item_ops;
mod types;

// Re-export public types
pub use types::{DatabaseBackendType, SeaOrmDatabase};

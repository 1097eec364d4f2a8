//! Database storage implementation using SeaORM
//!
//! Agents, list items and the agent-to-item ownership links live in three
//! tables; schema changes go through `sea-orm-migration`.

/// Database entities module
pub mod entities;
/// Database migration module
pub mod migration;
/// SeaORM database implementation module
pub mod seaorm_db;

pub use seaorm_db::SeaOrmDatabase as Database;
pub use seaorm_db::DatabaseBackendType;

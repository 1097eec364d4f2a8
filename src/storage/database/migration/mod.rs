use sea_orm_migration::prelude::*;

mod m20241001_000001_create_agents_table;
mod m20241001_000002_create_list_items_table;
mod m20241001_000003_create_agent_items_table;

/// Database migrator for SeaORM
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241001_000001_create_agents_table::Migration),
            Box::new(m20241001_000002_create_list_items_table::Migration),
            Box::new(m20241001_000003_create_agent_items_table::Migration),
        ]
    }
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AgentItems::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(AgentItems::AgentId).uuid().not_null())
                    .col(ColumnDef::new(AgentItems::ListItemId).uuid().not_null())
                    .col(ColumnDef::new(AgentItems::Position).integer().not_null())
                    .col(
                        ColumnDef::new(AgentItems::AssignedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .primary_key(
                        Index::create()
                            .col(AgentItems::AgentId)
                            .col(AgentItems::ListItemId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agent_items_agent_id")
                            .from(AgentItems::Table, AgentItems::AgentId)
                            .to(Agents::Table, Agents::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_agent_items_list_item_id")
                            .from(AgentItems::Table, AgentItems::ListItemId)
                            .to(ListItems::Table, ListItems::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AgentItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AgentItems {
    Table,
    AgentId,
    ListItemId,
    Position,
    AssignedAt,
}

#[derive(DeriveIden)]
enum Agents {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum ListItems {
    Table,
    Id,
}

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListItems::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(ListItems::Id)
                            .uuid()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(ListItems::FirstName).string().not_null())
                    .col(ColumnDef::new(ListItems::Phone).string().not_null())
                    .col(
                        ColumnDef::new(ListItems::Notes)
                            .text()
                            .not_null()
                            .default(""),
                    )
                    .col(ColumnDef::new(ListItems::AssignedAgentId).uuid().null())
                    .col(ColumnDef::new(ListItems::UploadBatch).string().not_null())
                    .col(ColumnDef::new(ListItems::Position).integer().not_null())
                    .col(
                        ColumnDef::new(ListItems::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_list_items_assigned_agent_id")
                            .from(ListItems::Table, ListItems::AssignedAgentId)
                            .to(Agents::Table, Agents::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_list_items_assigned_agent_id")
                    .table(ListItems::Table)
                    .col(ListItems::AssignedAgentId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_list_items_upload_batch")
                    .table(ListItems::Table)
                    .col(ListItems::UploadBatch)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListItems::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum ListItems {
    Table,
    Id,
    FirstName,
    Phone,
    Notes,
    AssignedAgentId,
    UploadBatch,
    Position,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Agents {
    Table,
    Id,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // No foreign key to user: log rows may reference actors that were
        // synced before the user table existed, or system actors.
        manager
            .create_table(
                Table::create()
                    .table(ActivityLog::Table)
                    .if_not_exists()
                    .col(pk_auto(ActivityLog::Id))
                    .col(string(ActivityLog::UserUid))
                    .col(string(ActivityLog::ActionType))
                    .col(string(ActivityLog::Module))
                    .col(string(ActivityLog::Details))
                    .col(string_null(ActivityLog::RecordId))
                    .col(timestamp(ActivityLog::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ActivityLog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ActivityLog {
    Table,
    Id,
    UserUid,
    ActionType,
    Module,
    Details,
    RecordId,
    CreatedAt,
}

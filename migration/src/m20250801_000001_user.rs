use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(User::Table)
                    .if_not_exists()
                    .col(pk_auto(User::Id))
                    .col(string_uniq(User::FirebaseUid))
                    .col(string(User::Email))
                    .col(string(User::FullName))
                    .col(string(User::Role))
                    .col(string(User::ChurchName))
                    .col(string(User::PhotoUrl))
                    .col(string(User::Language))
                    .col(string(User::ContactNumber))
                    .col(timestamp(User::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(User::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum User {
    Table,
    Id,
    FirebaseUid,
    Email,
    FullName,
    Role,
    ChurchName,
    PhotoUrl,
    Language,
    ContactNumber,
    CreatedAt,
}

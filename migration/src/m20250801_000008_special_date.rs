use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SpecialDate::Table)
                    .if_not_exists()
                    .col(pk_auto(SpecialDate::Id))
                    .col(string(SpecialDate::PersonName))
                    .col(string(SpecialDate::EventType))
                    .col(date(SpecialDate::EventDate))
                    .col(string_null(SpecialDate::Details))
                    .col(timestamp(SpecialDate::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SpecialDate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SpecialDate {
    Table,
    Id,
    PersonName,
    EventType,
    EventDate,
    Details,
    CreatedAt,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Book::Table)
                    .if_not_exists()
                    .col(pk_auto(Book::Id))
                    .col(string(Book::Title))
                    .col(string(Book::Author))
                    .col(integer(Book::Pages))
                    .col(integer(Book::PublishYear))
                    .col(string_null(Book::Description))
                    .col(string_null(Book::ImageUrl))
                    .col(string(Book::StockStatus))
                    .col(timestamp(Book::CreatedAt))
                    .col(timestamp(Book::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Book::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Book {
    Table,
    Id,
    Title,
    Author,
    Pages,
    PublishYear,
    Description,
    ImageUrl,
    StockStatus,
    CreatedAt,
    UpdatedAt,
}

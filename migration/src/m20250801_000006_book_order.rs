use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000005_book::Book;

static FK_BOOK_ORDER_BOOK_ID: &str = "fk_book_order_book_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BookOrder::Table)
                    .if_not_exists()
                    .col(pk_auto(BookOrder::Id))
                    .col(integer(BookOrder::BookId))
                    .col(string_null(BookOrder::UserUid))
                    .col(string(BookOrder::FullName))
                    .col(string(BookOrder::ContactNumber))
                    .col(string_null(BookOrder::ChurchName))
                    .col(string_null(BookOrder::Address))
                    .col(integer(BookOrder::Quantity))
                    .col(timestamp(BookOrder::CreatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BOOK_ORDER_BOOK_ID)
                            .from(BookOrder::Table, BookOrder::BookId)
                            .to(Book::Table, Book::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BookOrder::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum BookOrder {
    Table,
    Id,
    BookId,
    UserUid,
    FullName,
    ContactNumber,
    ChurchName,
    Address,
    Quantity,
    CreatedAt,
}

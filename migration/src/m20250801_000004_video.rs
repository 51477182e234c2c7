use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Video::Table)
                    .if_not_exists()
                    .col(pk_auto(Video::Id))
                    .col(string(Video::Heading))
                    .col(string_null(Video::SubHeading))
                    .col(string_null(Video::Description))
                    .col(string(Video::YoutubeLink))
                    .col(string_null(Video::EmbedCode))
                    .col(string(Video::VideoType))
                    .col(string(Video::Category))
                    .col(timestamp(Video::CreatedAt))
                    .col(timestamp(Video::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Video::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Video {
    Table,
    Id,
    Heading,
    SubHeading,
    Description,
    YoutubeLink,
    EmbedCode,
    VideoType,
    Category,
    CreatedAt,
    UpdatedAt,
}

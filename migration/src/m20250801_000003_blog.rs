use sea_orm_migration::{prelude::*, schema::*};

use crate::{m20250801_000001_user::User, m20250801_000002_blog_type::BlogType};

static FK_BLOG_TYPE_ID: &str = "fk_blog_blog_type_id";
static FK_BLOG_AUTHOR_UID: &str = "fk_blog_author_uid";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // SQLite cannot add foreign keys after table creation, so they
        // are declared inline here rather than as follow-up statements.
        manager
            .create_table(
                Table::create()
                    .table(Blog::Table)
                    .if_not_exists()
                    .col(pk_auto(Blog::Id))
                    .col(string(Blog::Heading))
                    .col(string(Blog::SubHeading))
                    .col(text(Blog::Content))
                    .col(string_null(Blog::PhotoUrl))
                    .col(string_null(Blog::ExternalLink))
                    .col(integer(Blog::BlogTypeId))
                    .col(string(Blog::Category))
                    .col(string(Blog::Status))
                    .col(string(Blog::AuthorUid))
                    .col(timestamp(Blog::CreatedAt))
                    .col(timestamp(Blog::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BLOG_TYPE_ID)
                            .from(Blog::Table, Blog::BlogTypeId)
                            .to(BlogType::Table, BlogType::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_BLOG_AUTHOR_UID)
                            .from(Blog::Table, Blog::AuthorUid)
                            .to(User::Table, User::FirebaseUid),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Blog::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Blog {
    Table,
    Id,
    Heading,
    SubHeading,
    Content,
    PhotoUrl,
    ExternalLink,
    BlogTypeId,
    Category,
    Status,
    AuthorUid,
    CreatedAt,
    UpdatedAt,
}

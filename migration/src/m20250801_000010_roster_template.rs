use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000009_roster_role::RosterRole;

static FK_ROSTER_TEMPLATE_ROLE_ID: &str = "fk_roster_template_role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(RosterTemplate::Table)
                    .if_not_exists()
                    .col(pk_auto(RosterTemplate::Id))
                    .col(integer(RosterTemplate::WeekNumber))
                    .col(integer(RosterTemplate::RoleId))
                    .col(string(RosterTemplate::PersonName))
                    .col(boolean(RosterTemplate::IsAlternative))
                    .col(string_null(RosterTemplate::UserUid))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_ROSTER_TEMPLATE_ROLE_ID)
                            .from(RosterTemplate::Table, RosterTemplate::RoleId)
                            .to(RosterRole::Table, RosterRole::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(RosterTemplate::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum RosterTemplate {
    Table,
    Id,
    WeekNumber,
    RoleId,
    PersonName,
    IsAlternative,
    UserUid,
}

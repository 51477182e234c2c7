use sea_orm_migration::{prelude::*, schema::*};

use crate::m20250801_000009_roster_role::RosterRole;

static FK_SERVICE_ROSTER_ROLE_ID: &str = "fk_service_roster_role_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServiceRoster::Table)
                    .if_not_exists()
                    .col(pk_auto(ServiceRoster::Id))
                    .col(date(ServiceRoster::ServiceDate))
                    .col(integer(ServiceRoster::RoleId))
                    .col(string(ServiceRoster::AssignedPerson))
                    .col(integer(ServiceRoster::SourceWeekNumber))
                    .col(boolean(ServiceRoster::IsAlternative))
                    .col(string_null(ServiceRoster::UserUid))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SERVICE_ROSTER_ROLE_ID)
                            .from(ServiceRoster::Table, ServiceRoster::RoleId)
                            .to(RosterRole::Table, RosterRole::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServiceRoster::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ServiceRoster {
    Table,
    Id,
    ServiceDate,
    RoleId,
    AssignedPerson,
    SourceWeekNumber,
    IsAlternative,
    UserUid,
}

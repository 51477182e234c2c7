use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "service_roster")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub service_date: Date,
    pub role_id: i32,
    pub assigned_person: String,
    pub source_week_number: i32,
    pub is_alternative: bool,
    pub user_uid: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::roster_role::Entity",
        from = "Column::RoleId",
        to = "super::roster_role::Column::Id"
    )]
    RosterRole,
}

impl Related<super::roster_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RosterRole.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

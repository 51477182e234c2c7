use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "roster_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub role_name: String,
    pub display_order: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::roster_template::Entity")]
    RosterTemplate,
    #[sea_orm(has_many = "super::service_roster::Entity")]
    ServiceRoster,
}

impl Related<super::roster_template::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::RosterTemplate.def()
    }
}

impl Related<super::service_roster::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ServiceRoster.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

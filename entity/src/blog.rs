use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::{BlogStatus, Category};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "blog")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub heading: String,
    pub sub_heading: String,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    pub photo_url: Option<String>,
    pub external_link: Option<String>,
    pub blog_type_id: i32,
    pub category: Category,
    pub status: BlogStatus,
    pub author_uid: String,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::blog_type::Entity",
        from = "Column::BlogTypeId",
        to = "super::blog_type::Column::Id"
    )]
    BlogType,
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AuthorUid",
        to = "super::user::Column::FirebaseUid"
    )]
    User,
}

impl Related<super::blog_type::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BlogType.def()
    }
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::sea_orm_active_enums::StockStatus;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "book")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub publish_year: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub stock_status: StockStatus,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::book_order::Entity")]
    BookOrder,
}

impl Related<super::book_order::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::BookOrder.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use serde::{Deserialize, Serialize};

use entity::sea_orm_active_enums::StockStatus;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookDto {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub publish_year: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub stock_status: StockStatus,
}

impl From<entity::book::Model> for BookDto {
    fn from(book: entity::book::Model) -> Self {
        Self {
            id: book.id,
            title: book.title,
            author: book.author,
            pages: book.pages,
            publish_year: book.publish_year,
            description: book.description,
            image_url: book.image_url,
            stock_status: book.stock_status,
        }
    }
}

/// Order row joined with its book title for the console listing
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct BookOrderDto {
    pub id: i32,
    pub book_id: i32,
    pub book_title: Option<String>,
    pub full_name: String,
    pub contact_number: String,
    pub church_name: Option<String>,
    pub address: Option<String>,
    pub quantity: i32,
    pub created_at: chrono::NaiveDateTime,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct BookRequest {
    pub title: String,
    pub author: String,
    pub pages: i32,
    pub publish_year: i32,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub stock_status: StockStatus,
    /// Actor recorded in the activity log
    pub user_id: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct BookOrderRequest {
    pub book_id: Option<i32>,
    pub user_uid: Option<String>,
    pub full_name: Option<String>,
    pub contact_number: Option<String>,
    pub church_name: Option<String>,
    pub address: Option<String>,
    pub quantity: Option<i32>,
}

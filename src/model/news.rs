use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use entity::sea_orm_active_enums::{EventType, Language};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewsDto {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub news_date: NaiveDate,
    pub language: Language,
}

impl From<entity::news::Model> for NewsDto {
    fn from(news: entity::news::Model) -> Self {
        Self {
            id: news.id,
            title: news.title,
            description: news.description,
            news_date: news.news_date,
            language: news.language,
        }
    }
}

/// Console view of a celebration entry
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SpecialDateAdminDto {
    pub id: i32,
    pub person_name: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub details: Option<String>,
}

impl From<entity::special_date::Model> for SpecialDateAdminDto {
    fn from(date: entity::special_date::Model) -> Self {
        Self {
            id: date.id,
            person_name: date.person_name,
            event_type: date.event_type,
            event_date: date.event_date,
            details: date.details,
        }
    }
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateNewsRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub news_date: Option<NaiveDate>,
    pub language: Option<Language>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateSpecialDateRequest {
    pub person_name: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub details: Option<String>,
}

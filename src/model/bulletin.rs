use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use entity::sea_orm_active_enums::{EventType, Language};

/// News rows sharing a title, merged into one heading with bullet lines
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewsGroupDto {
    pub title: String,
    pub date: NaiveDate,
    pub language: Language,
    pub items: Vec<String>,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct RosterEntryDto {
    pub role_name: String,
    pub assigned_person: String,
    pub is_alternative: bool,
}

#[derive(Clone, Debug, Serialize, Deserialize, utoipa::ToSchema)]
pub struct SpecialDateDto {
    pub person_name: String,
    pub event_type: EventType,
    pub event_date: NaiveDate,
    pub details: Option<String>,
}

/// Response of the public news-feed endpoint
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct NewsFeedDto {
    pub sunday_date: NaiveDate,
    pub server_date: chrono::NaiveDateTime,
    pub user_language: Language,
    pub news: Vec<NewsGroupDto>,
    pub roster: Vec<RosterEntryDto>,
    pub special_dates: Vec<SpecialDateDto>,
}

/// Aggregated data backing the printable bulletin
#[derive(Clone, Debug)]
pub struct BulletinData {
    pub sunday: NaiveDate,
    pub week_range: String,
    pub language: Language,
    pub news: Vec<NewsGroupDto>,
    pub roster: Vec<RosterEntryDto>,
    pub special_dates: Vec<SpecialDateDto>,
}

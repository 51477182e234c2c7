use serde::{Deserialize, Serialize};

use entity::sea_orm_active_enums::Category;

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct VideoDto {
    pub id: i32,
    pub heading: String,
    pub sub_heading: Option<String>,
    pub description: Option<String>,
    pub youtube_link: String,
    pub embed_code: Option<String>,
    pub video_type: String,
    pub category: Category,
    pub created_at: chrono::NaiveDateTime,
}

impl From<entity::video::Model> for VideoDto {
    fn from(video: entity::video::Model) -> Self {
        Self {
            id: video.id,
            heading: video.heading,
            sub_heading: video.sub_heading,
            description: video.description,
            youtube_link: video.youtube_link,
            embed_code: video.embed_code,
            video_type: video.video_type,
            category: video.category,
            created_at: video.created_at,
        }
    }
}

/// Public listing plus distinct type labels for filter chips
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct PublicVideosDto {
    pub data: Vec<VideoDto>,
    pub types: Vec<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct VideoRequest {
    pub heading: String,
    pub sub_heading: Option<String>,
    pub description: Option<String>,
    pub youtube_link: String,
    pub embed_code: Option<String>,
    pub video_type: String,
    pub category: Category,
    /// Actor recorded in the activity log
    pub user_id: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct PublicVideoQuery {
    pub requester: Option<String>,
    pub search: Option<String>,
    pub r#type: Option<String>,
    /// Zero means no limit
    pub limit: Option<u64>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ActorQuery {
    pub user_id: Option<String>,
}

use serde::{Deserialize, Serialize};

use entity::sea_orm_active_enums::Role;

#[derive(Deserialize, utoipa::IntoParams)]
pub struct ActivityLogQuery {
    pub requester: Option<String>,
    /// Free-text filter over actor name/email
    pub search: Option<String>,
    /// Module tag filter, `All` for no filter
    pub module: Option<String>,
    /// Action verb filter, `All` for no filter
    pub action: Option<String>,
}

/// Log row joined with the acting user, newest first
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ActivityLogDto {
    pub id: i32,
    pub action_type: String,
    pub module: String,
    pub details: String,
    pub record_id: Option<String>,
    pub created_at: chrono::NaiveDateTime,
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub role: Option<Role>,
    pub photo_url: Option<String>,
}

use serde::{Deserialize, Serialize};

use entity::sea_orm_active_enums::{Language, Role};

#[derive(Clone, Serialize, Deserialize, utoipa::ToSchema)]
pub struct UserDto {
    pub firebase_uid: String,
    pub email: String,
    pub full_name: String,
    pub role: Role,
    pub church_name: String,
    pub photo_url: String,
    pub language: Language,
    pub contact_number: String,
}

impl From<entity::user::Model> for UserDto {
    fn from(user: entity::user::Model) -> Self {
        Self {
            firebase_uid: user.firebase_uid,
            email: user.email,
            full_name: user.full_name,
            role: user.role,
            church_name: user.church_name,
            photo_url: user.photo_url,
            language: user.language,
            contact_number: user.contact_number,
        }
    }
}

/// Body of the identity sync endpoint; `uid` and `email` come from the
/// client-side sign-in, the rest are optional registration details.
#[derive(Deserialize, utoipa::ToSchema)]
pub struct SyncRequest {
    pub uid: String,
    pub email: String,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
    pub church_name: Option<String>,
    pub language: Option<Language>,
    pub contact_number: Option<String>,
    /// When set, only check for an existing record without creating one
    #[serde(default)]
    pub check_only: bool,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct SyncDto {
    #[serde(flatten)]
    pub user: UserDto,
    /// `exists` for a returning user, `created` for a fresh registration
    pub status: String,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CheckRoleRequest {
    pub uid: String,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateProfileRequest {
    pub uid: String,
    pub full_name: Option<String>,
    pub church_name: Option<String>,
    pub contact_number: Option<String>,
    pub language: Option<Language>,
    pub photo_url: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateRoleRequest {
    pub requester_uid: String,
    pub target_email: String,
    pub new_role: Role,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct UserListQuery {
    pub requester: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct UserSearchQuery {
    pub requester: Option<String>,
    pub q: Option<String>,
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Deserialize, utoipa::ToSchema)]
pub struct CreateRosterRoleRequest {
    pub role_name: String,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct TemplateEntryRequest {
    pub week_number: i32,
    pub role_id: i32,
    pub person_name: String,
    #[serde(default)]
    pub is_alternative: bool,
    pub user_uid: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct UpdateTemplateRequest {
    pub person_name: String,
    pub is_alternative: bool,
    pub user_uid: Option<String>,
}

#[derive(Deserialize, utoipa::ToSchema)]
pub struct GenerateRosterRequest {
    pub date: NaiveDate,
    pub week_template_num: i32,
    /// Replace an existing roster for the date instead of refusing
    #[serde(default)]
    pub overwrite: bool,
    pub requester_uid: Option<String>,
}

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RosterRoleDto {
    pub id: i32,
    pub role_name: String,
    pub display_order: i32,
}

impl From<entity::roster_role::Model> for RosterRoleDto {
    fn from(role: entity::roster_role::Model) -> Self {
        Self {
            id: role.id,
            role_name: role.role_name,
            display_order: role.display_order,
        }
    }
}

/// Template row joined with its role for the admin listing
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct TemplateDto {
    pub id: i32,
    pub week_number: i32,
    pub person_name: String,
    pub is_alternative: bool,
    pub user_uid: Option<String>,
    pub role_id: i32,
    pub role_name: String,
}

/// Most recently generated live roster marker
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct RosterStatusDto {
    pub service_date: NaiveDate,
    pub source_week_number: i32,
}

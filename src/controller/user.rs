use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        user::{
            UpdateProfileRequest, UpdateRoleRequest, UserDto, UserListQuery, UserSearchQuery,
        },
    },
    service,
};

pub static USER_TAG: &str = "user";

/// List user accounts for the admin console
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = USER_TAG,
    params(UserListQuery),
    responses(
        (status = 200, description = "Success when listing users", body = Vec<UserDto>),
        (status = 401, description = "Missing requester", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(
    State(state): State<AppState>,
    Query(query): Query<UserListQuery>,
) -> Result<impl IntoResponse, Error> {
    let users = service::user::list(&state.db, query).await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Autocomplete search for the role assignment form
#[utoipa::path(
    get,
    path = "/api/admin/users/search",
    tag = USER_TAG,
    params(UserSearchQuery),
    responses(
        (status = 200, description = "Matching users", body = Vec<UserDto>),
        (status = 401, description = "Missing requester", body = ErrorDto),
        (status = 403, description = "Insufficient permissions", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_users(
    State(state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> Result<impl IntoResponse, Error> {
    let users = service::user::search(&state.db, query).await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Congregation directory for signed-in members
#[utoipa::path(
    get,
    path = "/api/users/directory",
    tag = USER_TAG,
    params(UserSearchQuery),
    responses(
        (status = 200, description = "Directory entries", body = Vec<UserDto>),
        (status = 401, description = "Missing requester", body = ErrorDto),
        (status = 403, description = "Members only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn directory(
    State(state): State<AppState>,
    Query(query): Query<UserSearchQuery>,
) -> Result<impl IntoResponse, Error> {
    let users = service::user::directory(
        &state.db,
        query.requester.as_deref(),
        query.q.as_deref(),
    )
    .await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Self-service profile update
#[utoipa::path(
    put,
    path = "/api/users/profile",
    tag = USER_TAG,
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 400, description = "No fields to update", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_profile(
    State(state): State<AppState>,
    Json(request): Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, Error> {
    let user = service::user::update_profile(&state.db, request).await?;

    Ok((StatusCode::OK, Json(user)))
}

/// Assign a role to a user by email
#[utoipa::path(
    put,
    path = "/api/admin/users/role",
    tag = USER_TAG,
    request_body = UpdateRoleRequest,
    responses(
        (status = 200, description = "Updated account", body = UserDto),
        (status = 401, description = "Missing requester", body = ErrorDto),
        (status = 403, description = "Policy denied the assignment", body = ErrorDto),
        (status = 404, description = "Target account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    Json(request): Json<UpdateRoleRequest>,
) -> Result<impl IntoResponse, Error> {
    let user = service::user::update_role(&state.db, request).await?;

    Ok((StatusCode::OK, Json(user)))
}

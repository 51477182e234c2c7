use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        user::{CheckRoleRequest, SyncDto, SyncRequest, UserDto},
    },
    service,
};

pub static AUTH_TAG: &str = "auth";

/// Mirror an external identity into the user table
#[utoipa::path(
    post,
    path = "/api/auth/sync",
    tag = AUTH_TAG,
    request_body = SyncRequest,
    responses(
        (status = 200, description = "Existing account returned", body = SyncDto),
        (status = 201, description = "New account registered", body = SyncDto),
        (status = 400, description = "Missing uid or email", body = ErrorDto),
        (status = 404, description = "Account not found with check_only set", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn sync(
    State(state): State<AppState>,
    Json(request): Json<SyncRequest>,
) -> Result<impl IntoResponse, Error> {
    let result = service::auth::sync(&state.db, request).await?;

    let status = if result.status == "created" {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    Ok((status, Json(result)))
}

/// Look up the stored role for a signed-in identity
#[utoipa::path(
    post,
    path = "/api/auth/check-role",
    tag = AUTH_TAG,
    request_body = CheckRoleRequest,
    responses(
        (status = 200, description = "Account found", body = UserDto),
        (status = 400, description = "Missing uid", body = ErrorDto),
        (status = 404, description = "Account not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn check_role(
    State(state): State<AppState>,
    Json(request): Json<CheckRoleRequest>,
) -> Result<impl IntoResponse, Error> {
    let user = service::auth::check_role(&state.db, request).await?;

    Ok((StatusCode::OK, Json(user)))
}

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        activity::{ActivityLogDto, ActivityLogQuery},
        api::ErrorDto,
        app::AppState,
    },
    service,
};

pub static ACTIVITY_TAG: &str = "activity";

/// Read the admin activity log
#[utoipa::path(
    get,
    path = "/api/admin/activity-log",
    tag = ACTIVITY_TAG,
    params(ActivityLogQuery),
    responses(
        (status = 200, description = "Newest entries first", body = Vec<ActivityLogDto>),
        (status = 401, description = "Missing requester", body = ErrorDto),
        (status = 403, description = "Admins only", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_activity(
    State(state): State<AppState>,
    Query(query): Query<ActivityLogQuery>,
) -> Result<impl IntoResponse, Error> {
    let entries = service::activity::list(&state.db, query).await?;

    Ok((StatusCode::OK, Json(entries)))
}

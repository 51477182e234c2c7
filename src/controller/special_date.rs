use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        news::{CreateSpecialDateRequest, SpecialDateAdminDto},
        video::ActorQuery,
    },
    service,
};

pub static SPECIAL_DATE_TAG: &str = "special-date";

/// Add a birthday or anniversary
#[utoipa::path(
    post,
    path = "/api/special-dates",
    tag = SPECIAL_DATE_TAG,
    params(ActorQuery),
    request_body = CreateSpecialDateRequest,
    responses(
        (status = 201, description = "Entry stored", body = SpecialDateAdminDto),
        (status = 400, description = "Missing person name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_special_date(
    State(state): State<AppState>,
    Query(query): Query<ActorQuery>,
    Json(request): Json<CreateSpecialDateRequest>,
) -> Result<impl IntoResponse, Error> {
    let date =
        service::special_date::create(&state.db, request, query.user_id.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(SpecialDateAdminDto::from(date))))
}

/// List all celebration entries in calendar order
#[utoipa::path(
    get,
    path = "/api/special-dates",
    tag = SPECIAL_DATE_TAG,
    responses(
        (status = 200, description = "All entries", body = Vec<SpecialDateAdminDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_special_dates(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let dates: Vec<SpecialDateAdminDto> = service::special_date::list(&state.db)
        .await?
        .into_iter()
        .map(SpecialDateAdminDto::from)
        .collect();

    Ok((StatusCode::OK, Json(dates)))
}

/// Remove a celebration entry
#[utoipa::path(
    delete,
    path = "/api/special-dates/{id}",
    tag = SPECIAL_DATE_TAG,
    params(
        ("id" = i32, Path, description = "Entry id"),
        ActorQuery,
    ),
    responses(
        (status = 200, description = "Entry deleted", body = MessageDto),
        (status = 404, description = "Entry not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_special_date(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ActorQuery>,
) -> Result<impl IntoResponse, Error> {
    service::special_date::delete(&state.db, id, query.user_id.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Special date deleted".to_string(),
        }),
    ))
}

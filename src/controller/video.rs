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
        video::{ActorQuery, PublicVideoQuery, PublicVideosDto, VideoDto, VideoRequest},
    },
    service,
};

pub static VIDEO_TAG: &str = "video";

/// Add a video
#[utoipa::path(
    post,
    path = "/api/videos",
    tag = VIDEO_TAG,
    request_body = VideoRequest,
    responses(
        (status = 201, description = "Video stored", body = VideoDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_video(
    State(state): State<AppState>,
    Json(request): Json<VideoRequest>,
) -> Result<impl IntoResponse, Error> {
    let video = service::video::create(&state.db, request).await?;

    Ok((StatusCode::CREATED, Json(VideoDto::from(video))))
}

/// Console video listing
#[utoipa::path(
    get,
    path = "/api/admin/videos",
    tag = VIDEO_TAG,
    responses(
        (status = 200, description = "All videos", body = Vec<VideoDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_admin_videos(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, Error> {
    let videos: Vec<VideoDto> = service::video::list_admin(&state.db)
        .await?
        .into_iter()
        .map(VideoDto::from)
        .collect();

    Ok((StatusCode::OK, Json(videos)))
}

/// Public video listing
#[utoipa::path(
    get,
    path = "/api/public/videos",
    tag = VIDEO_TAG,
    params(PublicVideoQuery),
    responses(
        (status = 200, description = "Videos visible to the requester", body = PublicVideosDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_public_videos(
    State(state): State<AppState>,
    Query(query): Query<PublicVideoQuery>,
) -> Result<impl IntoResponse, Error> {
    let (videos, types) = service::video::list_public(&state.db, query).await?;

    Ok((
        StatusCode::OK,
        Json(PublicVideosDto {
            data: videos.into_iter().map(VideoDto::from).collect(),
            types,
        }),
    ))
}

/// Update a video
#[utoipa::path(
    put,
    path = "/api/videos/{id}",
    tag = VIDEO_TAG,
    params(("id" = i32, Path, description = "Video id")),
    request_body = VideoRequest,
    responses(
        (status = 200, description = "Updated video", body = VideoDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 404, description = "Video not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_video(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(request): Json<VideoRequest>,
) -> Result<impl IntoResponse, Error> {
    let video = service::video::update(&state.db, id, request).await?;

    Ok((StatusCode::OK, Json(VideoDto::from(video))))
}

/// Delete a video
#[utoipa::path(
    delete,
    path = "/api/videos/{id}",
    tag = VIDEO_TAG,
    params(
        ("id" = i32, Path, description = "Video id"),
        ActorQuery,
    ),
    responses(
        (status = 200, description = "Video deleted", body = MessageDto),
        (status = 404, description = "Video not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_video(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Query(query): Query<ActorQuery>,
) -> Result<impl IntoResponse, Error> {
    service::video::delete(&state.db, id, query.user_id.as_deref()).await?;

    Ok((
        StatusCode::OK,
        Json(MessageDto {
            message: "Video deleted".to_string(),
        }),
    ))
}

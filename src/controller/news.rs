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
        news::{CreateNewsRequest, NewsDto},
        video::ActorQuery,
    },
    service,
};

pub static NEWS_TAG: &str = "news";

/// Add a news item for an upcoming bulletin
#[utoipa::path(
    post,
    path = "/api/news",
    tag = NEWS_TAG,
    params(ActorQuery),
    request_body = CreateNewsRequest,
    responses(
        (status = 201, description = "Item stored", body = NewsDto),
        (status = 400, description = "Missing required fields", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_news(
    State(state): State<AppState>,
    Query(query): Query<ActorQuery>,
    Json(request): Json<CreateNewsRequest>,
) -> Result<impl IntoResponse, Error> {
    let news = service::news::create(&state.db, request, query.user_id.as_deref()).await?;

    Ok((StatusCode::CREATED, Json(NewsDto::from(news))))
}

/// Console news listing
#[utoipa::path(
    get,
    path = "/api/news",
    tag = NEWS_TAG,
    responses(
        (status = 200, description = "All items, most recent bulletin first", body = Vec<NewsDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_news(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let news: Vec<NewsDto> = service::news::list(&state.db)
        .await?
        .into_iter()
        .map(NewsDto::from)
        .collect();

    Ok((StatusCode::OK, Json(news)))
}

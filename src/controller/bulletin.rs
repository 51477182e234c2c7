use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        bulletin::NewsFeedDto,
    },
    service,
};

pub static BULLETIN_TAG: &str = "bulletin";

#[derive(Deserialize, utoipa::IntoParams)]
pub struct NewsFeedQuery {
    pub requester: Option<String>,
}

#[derive(Deserialize, utoipa::IntoParams)]
pub struct BulletinQuery {
    /// Signed-in reader whose stored language picks the bulletin
    /// variant; anonymous readers get the English one
    pub requester: Option<String>,
}

/// Aggregated news feed for the current bulletin week
#[utoipa::path(
    get,
    path = "/api/public/news-feed",
    tag = BULLETIN_TAG,
    params(NewsFeedQuery),
    responses(
        (status = 200, description = "News, roster and celebrations", body = NewsFeedDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn news_feed(
    State(state): State<AppState>,
    Query(query): Query<NewsFeedQuery>,
) -> Result<impl IntoResponse, Error> {
    let today = Utc::now().date_naive();
    let feed =
        service::bulletin::news_feed(&state.db, query.requester.as_deref(), today).await?;

    Ok((StatusCode::OK, Json(feed)))
}

/// Printable weekly bulletin as a PDF download
#[utoipa::path(
    get,
    path = "/api/public/bulletin.pdf",
    tag = BULLETIN_TAG,
    params(BulletinQuery),
    responses(
        (status = 200, description = "PDF bytes", content_type = "application/pdf"),
        (status = 500, description = "Renderer failure", body = ErrorDto)
    ),
)]
pub async fn bulletin_pdf(
    State(state): State<AppState>,
    Query(query): Query<BulletinQuery>,
) -> Result<impl IntoResponse, Error> {
    let language =
        service::bulletin::reader_language(&state.db, query.requester.as_deref()).await?;
    let today = Utc::now().date_naive();

    let data = service::bulletin::bulletin_data(&state.db, language, today).await?;
    let html = service::pdf::render_html(&data);
    let bytes = state.renderer.render_pdf(&html).await?;

    let filename = service::pdf::bulletin_filename(&data);

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{filename}\""),
            ),
        ],
        bytes,
    ))
}

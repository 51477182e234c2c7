use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::Error,
    model::{
        api::ErrorDto,
        app::AppState,
        storage::{StorageKeyDto, StorageKeyRequest},
    },
    util::storage,
};

pub static STORAGE_TAG: &str = "storage";

/// Mint a bucket key for a client-side upload
#[utoipa::path(
    post,
    path = "/api/storage/key",
    tag = STORAGE_TAG,
    request_body = StorageKeyRequest,
    responses(
        (status = 200, description = "Key and resulting public URL", body = StorageKeyDto),
        (status = 400, description = "Missing filename", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_key(
    State(state): State<AppState>,
    Json(request): Json<StorageKeyRequest>,
) -> Result<impl IntoResponse, Error> {
    if request.filename.is_empty() {
        return Err(Error::Validation("filename is required".to_string()));
    }

    let key = storage::object_key(&request.filename);
    let public_url = storage::public_url(&state.storage_bucket_url, &key);

    Ok((StatusCode::OK, Json(StorageKeyDto { key, public_url })))
}

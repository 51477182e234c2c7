use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::model::api::ErrorDto;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum AuthError {
    #[error("Request is missing a requester identity")]
    MissingRequester,
    #[error("Requester {0:?} not found in user table")]
    RequesterNotFound(String),
    #[error("{0}")]
    Forbidden(String),
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::MissingRequester => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Unauthorized".to_string(),
                }),
            )
                .into_response(),
            Self::RequesterNotFound(uid) => {
                tracing::debug!(requester = %uid, "requester not found");

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "Requester not found".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::Forbidden(message) => {
                (StatusCode::FORBIDDEN, Json(ErrorDto { error: message })).into_response()
            }
        }
    }
}

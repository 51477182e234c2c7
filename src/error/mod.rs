//! Error types for the parish server.
//!
//! All errors implement `IntoResponse` for axum and use `thiserror` for
//! ergonomic definitions. Internal failures are logged and mapped to a
//! generic 500 body so implementation detail never reaches clients.

pub mod auth;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::{error::auth::AuthError, model::api::ErrorDto};

#[derive(Error, Debug)]
pub enum Error {
    /// Authorization failure (missing/unknown requester, denied action).
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Request validation failure (missing or malformed fields).
    #[error("{0}")]
    Validation(String),
    /// Referenced record does not exist.
    #[error("{0}")]
    NotFound(String),
    /// Attempt to overwrite existing data without the overwrite flag.
    #[error("{0}")]
    Conflict(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Headless renderer service failure.
    #[error("PDF renderer error: {0}")]
    Renderer(String),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Renderer(err.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::AuthError(err) => err.into_response(),
            Self::Validation(message) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            Self::NotFound(message) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            Self::Conflict(message) => (
                StatusCode::CONFLICT,
                Json(ErrorDto { error: message }),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

#[cfg(test)]
impl From<Error> for parish_test_utils::TestError {
    fn from(err: Error) -> Self {
        parish_test_utils::TestError::App(err.to_string())
    }
}

/// Wrapper type for converting any displayable error into a 500 response.
///
/// Logs the full error message for debugging but returns a generic body,
/// so internal detail is never exposed to API consumers.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

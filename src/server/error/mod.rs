//! Error types and their HTTP responses.
//!
//! `AppError` is what every handler, service and startup step returns. Client
//! errors carry a message that is sent back as `{"error": "..."}`; everything that
//! points at a server side problem is logged and answered with a generic 500 body.

pub mod config;
pub mod internal;
pub mod upload;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::SqlErr;
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{config::ConfigError, internal::InternalError, upload::UploadError},
};

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

#[derive(Error, Debug)]
pub enum AppError {
    /// Environment could not be turned into a `Config`.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Multipart upload rejected; renders its own 415/400 response.
    #[error(transparent)]
    UploadErr(#[from] UploadError),

    /// Database and image directory disagree, e.g. a record whose file is gone.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Image directory, listener or other file system failure.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// 404 with the given message.
    #[error("{0}")]
    NotFound(String),

    /// 400 with the given message, e.g. a body id that differs from the route id.
    #[error("{0}")]
    BadRequest(String),

    /// 409 with the given message, e.g. creating a person with an id that is taken.
    #[error("{0}")]
    Conflict(String),

    /// 500; the message is logged and never sent to the client.
    #[error("{0}")]
    InternalError(String),
}

impl AppError {
    /// Turns a unique constraint violation from an insert into `Conflict`.
    ///
    /// Other database errors are kept as `DbErr`.
    pub fn conflict_on_duplicate(err: sea_orm::DbErr, message: impl FnOnce() -> String) -> Self {
        match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => Self::Conflict(message()),
            _ => Self::DbErr(err),
        }
    }
}

/// Maps errors to status codes.
///
/// # Returns
/// - 400 Bad Request - `BadRequest`
/// - 404 Not Found - `NotFound`
/// - 409 Conflict - `Conflict`
/// - Delegated - `UploadErr`, see `UploadError::into_response()`
/// - 500 Internal Server Error - everything else, logged with details
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::UploadErr(err) => err.into_response(),
            Self::NotFound(msg) => error_response(StatusCode::NOT_FOUND, msg),
            Self::BadRequest(msg) => error_response(StatusCode::BAD_REQUEST, msg),
            Self::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
            err => InternalServerError(err).into_response(),
        }
    }
}

fn error_response(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorDto { error })).into_response()
}

/// Logs the wrapped error and answers with the generic 500 body.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("Internal error: {}", self.0);

        error_response(
            StatusCode::INTERNAL_SERVER_ERROR,
            INTERNAL_SERVER_ERROR_MESSAGE.to_string(),
        )
    }
}

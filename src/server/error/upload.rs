use axum::{
    extract::multipart::MultipartError,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum UploadError {
    /// Request body is not `multipart/form-data`.
    ///
    /// Results in a 415 Unsupported Media Type response.
    #[error("Unsupported media type, expected multipart/form-data")]
    UnsupportedMediaType,

    /// First part of the upload does not carry an `image/*` content type.
    ///
    /// Results in a 400 Bad Request response.
    #[error("Invalid file type.")]
    InvalidFileType,

    /// Multipart body contains no part with a file name.
    ///
    /// Results in a 400 Bad Request response.
    #[error("No file data in the request.")]
    NoFileData,

    /// Multipart body could not be read, e.g. truncated or over the body limit.
    ///
    /// Uses the status code axum assigns to the failure.
    #[error(transparent)]
    Multipart(#[from] MultipartError),
}

/// Converts upload errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For `InvalidFileType` and `NoFileData`
/// - 415 Unsupported Media Type - For `UnsupportedMediaType`
/// - Variable - For `Multipart`, taken from `MultipartError::status()`
impl IntoResponse for UploadError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Self::InvalidFileType | Self::NoFileData => StatusCode::BAD_REQUEST,
            Self::Multipart(err) => err.status(),
        };

        tracing::debug!("Rejected image upload: {}", self);

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

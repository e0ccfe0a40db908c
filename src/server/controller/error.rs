use axum::response::IntoResponse;

use crate::{model::api::ErrorDto, server::error::AppError};

/// Tag for grouping error endpoints in OpenAPI documentation
pub static ERRORS_TAG: &str = "errors";

/// Error endpoint.
///
/// Always answers with the generic internal server error body. Clients can use it
/// to check how failures are reported.
#[utoipa::path(
    get,
    path = "/error",
    tag = ERRORS_TAG,
    responses(
        (status = 500, description = "Generic internal server error", body = ErrorDto)
    ),
)]
pub async fn handle_error() -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Error endpoint requested");

    Err::<(), _>(AppError::InternalError(
        "Error endpoint requested".to_string(),
    ))
}

use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{address::AddressDto, api::ErrorDto},
    server::{
        error::AppError, model::address::AddressParams, router::API_PREFIX,
        service::address::AddressService, state::AppState,
    },
};

/// Tag for grouping address endpoints in OpenAPI documentation
pub static ADDRESSES_TAG: &str = "addresses";

/// Get all addresses, ordered by city and street.
#[utoipa::path(
    get,
    path = "/workmanagerapi/v1/addresses",
    tag = ADDRESSES_TAG,
    responses(
        (status = 200, description = "Successfully retrieved addresses", body = Vec<AddressDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_addresses(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Get all addresses");

    let service = AddressService::new(&state.db);

    let addresses = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(addresses.into_iter().map(|a| a.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get an address by id.
#[utoipa::path(
    get,
    path = "/workmanagerapi/v1/addresses/{id}",
    tag = ADDRESSES_TAG,
    params(
        ("id" = Uuid, Path, description = "Address id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved address", body = AddressDto),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Get address {}", id);

    let service = AddressService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(address) => Ok((StatusCode::OK, Json(address.into_dto()))),
        None => Err(AppError::NotFound(
            "Address with given id not found".to_string(),
        )),
    }
}

/// Create a new address.
///
/// # Returns
/// - `201 Created` - Created address, `Location` points to the new resource
/// - `409 Conflict` - An address with the given id already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/workmanagerapi/v1/addresses",
    tag = ADDRESSES_TAG,
    request_body = AddressDto,
    responses(
        (status = 201, description = "Successfully created address", body = AddressDto),
        (status = 409, description = "Address with given id already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_address(
    State(state): State<AppState>,
    Json(payload): Json<AddressDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Create address {} {}", payload.street, payload.number);

    let service = AddressService::new(&state.db);

    let address = service.create(AddressParams::from_dto(payload)).await?;
    let location = format!("{}/addresses/{}", API_PREFIX, address.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(address.into_dto()),
    ))
}

/// Update an address.
///
/// # Returns
/// - `200 OK` - Updated address
/// - `400 Bad Request` - Id in body does not match id in route
/// - `404 Not Found` - No address with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/workmanagerapi/v1/addresses/{id}",
    tag = ADDRESSES_TAG,
    params(
        ("id" = Uuid, Path, description = "Address id")
    ),
    request_body = AddressDto,
    responses(
        (status = 200, description = "Successfully updated address", body = AddressDto),
        (status = 400, description = "Invalid address data", body = ErrorDto),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddressDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Update address {}", id);

    let service = AddressService::new(&state.db);

    match service.update(id, AddressParams::from_dto(payload)).await? {
        Some(address) => Ok((StatusCode::OK, Json(address.into_dto()))),
        None => Err(AppError::NotFound(
            "Address with given id not found".to_string(),
        )),
    }
}

/// Delete an address.
///
/// People and work orders referencing the address keep existing without one.
#[utoipa::path(
    delete,
    path = "/workmanagerapi/v1/addresses/{id}",
    tag = ADDRESSES_TAG,
    params(
        ("id" = Uuid, Path, description = "Address id")
    ),
    responses(
        (status = 204, description = "Successfully deleted address"),
        (status = 404, description = "Address not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_address(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Delete address {}", id);

    let service = AddressService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "Address with given id not found".to_string(),
        ))
    }
}

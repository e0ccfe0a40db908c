use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, workorder::WorkorderDto},
    server::{
        error::AppError, model::workorder::WorkorderParams, router::API_PREFIX,
        service::workorder::WorkorderService, state::AppState, util::iso8601::eval_date,
    },
};

/// Tag for grouping work order endpoints in OpenAPI documentation
pub static WORKORDERS_TAG: &str = "workorders";

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkorderQuery {
    /// `YYYY-MM-DD`, only work orders created on or after this day are listed
    pub created_from: Option<String>,
}

/// Get all work orders.
///
/// Returns work orders ordered by creation time. With `createdFrom` only work
/// orders created at or after midnight UTC of that day are returned.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `createdFrom` date filter
///
/// # Returns
/// - `200 OK` - List of work orders, possibly empty
/// - `400 Bad Request` - `createdFrom` is not a `YYYY-MM-DD` date
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/workmanagerapi/v1/workorders",
    tag = WORKORDERS_TAG,
    params(
        ("createdFrom" = Option<String>, Query, description = "Earliest creation date (YYYY-MM-DD)")
    ),
    responses(
        (status = 200, description = "Successfully retrieved work orders", body = Vec<WorkorderDto>),
        (status = 400, description = "Invalid date filter", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workorders(
    State(state): State<AppState>,
    Query(query): Query<WorkorderQuery>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Get all workorders, createdFrom {:?}", query.created_from);

    let created_from = eval_date(query.created_from.as_deref())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    let service = WorkorderService::new(&state.db);

    let workorders = service.get_all(created_from).await?;

    Ok((
        StatusCode::OK,
        Json(workorders.into_iter().map(|w| w.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a work order by id.
///
/// # Returns
/// - `200 OK` - Work order details
/// - `404 Not Found` - No work order with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/workmanagerapi/v1/workorders/{id}",
    tag = WORKORDERS_TAG,
    params(
        ("id" = Uuid, Path, description = "Work order id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved work order", body = WorkorderDto),
        (status = 404, description = "Work order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workorder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Get workorder {}", id);

    let service = WorkorderService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(workorder) => Ok((StatusCode::OK, Json(workorder.into_dto()))),
        None => Err(AppError::NotFound(
            "Workorder with given id not found".to_string(),
        )),
    }
}

/// Get the work orders assigned to a person.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `person_id` - Person id
///
/// # Returns
/// - `200 OK` - Work orders of the person, possibly empty
/// - `400 Bad Request` - Person does not exist
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/workmanagerapi/v1/people/{person_id}/workorders",
    tag = WORKORDERS_TAG,
    params(
        ("person_id" = Uuid, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved work orders", body = Vec<WorkorderDto>),
        (status = 400, description = "Person does not exist", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_workorders_of_person(
    State(state): State<AppState>,
    Path(person_id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Get workorders of person {}", person_id);

    let service = WorkorderService::new(&state.db);

    match service.get_by_person_id(person_id).await? {
        Some(workorders) => Ok((
            StatusCode::OK,
            Json(workorders.into_iter().map(|w| w.into_dto()).collect::<Vec<_>>()),
        )),
        None => Err(AppError::BadRequest(
            "Person with given id does not exist".to_string(),
        )),
    }
}

/// Create a new work order.
///
/// A nil or missing id is replaced by a generated one.
///
/// # Returns
/// - `201 Created` - Created work order, `Location` points to the new resource
/// - `400 Bad Request` - Referenced person or address does not exist
/// - `409 Conflict` - A work order with the given id already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/workmanagerapi/v1/workorders",
    tag = WORKORDERS_TAG,
    request_body = WorkorderDto,
    responses(
        (status = 201, description = "Successfully created work order", body = WorkorderDto),
        (status = 400, description = "Invalid work order data", body = ErrorDto),
        (status = 409, description = "Work order with given id already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_workorder(
    State(state): State<AppState>,
    Json(payload): Json<WorkorderDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Create workorder {}", payload.title);

    let service = WorkorderService::new(&state.db);

    let workorder = service.create(WorkorderParams::from_dto(payload)).await?;
    let location = format!("{}/workorders/{}", API_PREFIX, workorder.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(workorder.into_dto()),
    ))
}

/// Update a work order.
///
/// Overwrites all fields including the owner. The id in the body must either be
/// nil or match the id in the route.
///
/// # Returns
/// - `200 OK` - Updated work order
/// - `400 Bad Request` - Id mismatch or unknown reference
/// - `404 Not Found` - No work order with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/workmanagerapi/v1/workorders/{id}",
    tag = WORKORDERS_TAG,
    params(
        ("id" = Uuid, Path, description = "Work order id")
    ),
    request_body = WorkorderDto,
    responses(
        (status = 200, description = "Successfully updated work order", body = WorkorderDto),
        (status = 400, description = "Invalid work order data", body = ErrorDto),
        (status = 404, description = "Work order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_workorder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<WorkorderDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Update workorder {}", id);

    let service = WorkorderService::new(&state.db);

    match service.update(id, WorkorderParams::from_dto(payload)).await? {
        Some(workorder) => Ok((StatusCode::OK, Json(workorder.into_dto()))),
        None => Err(AppError::NotFound(
            "Workorder with given id not found".to_string(),
        )),
    }
}

/// Delete a work order.
///
/// # Returns
/// - `204 No Content` - Work order deleted
/// - `404 Not Found` - No work order with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/workmanagerapi/v1/workorders/{id}",
    tag = WORKORDERS_TAG,
    params(
        ("id" = Uuid, Path, description = "Work order id")
    ),
    responses(
        (status = 204, description = "Successfully deleted work order"),
        (status = 404, description = "Work order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_workorder(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Delete workorder {}", id);

    let service = WorkorderService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "Workorder with given id not found".to_string(),
        ))
    }
}

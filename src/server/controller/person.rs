use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{api::ErrorDto, person::PersonDto, workorder::WorkorderDto},
    server::{
        error::AppError, model::person::PersonParams, router::API_PREFIX,
        service::person::PersonService, state::AppState,
    },
};

/// Tag for grouping person endpoints in OpenAPI documentation
pub static PEOPLE_TAG: &str = "people";

/// Get all people.
///
/// Returns every person ordered by last name, then first name.
///
/// # Arguments
/// - `state` - Application state containing the database connection
///
/// # Returns
/// - `200 OK` - List of people, possibly empty
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/workmanagerapi/v1/people",
    tag = PEOPLE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved people", body = Vec<PersonDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_people(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Get all people");

    let service = PersonService::new(&state.db);

    let people = service.get_all().await?;

    Ok((
        StatusCode::OK,
        Json(people.into_iter().map(|p| p.into_dto()).collect::<Vec<_>>()),
    ))
}

/// Get a person by id.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Person id
///
/// # Returns
/// - `200 OK` - Person details
/// - `404 Not Found` - No person with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/workmanagerapi/v1/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = Uuid, Path, description = "Person id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved person", body = PersonDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Get person {}", id);

    let service = PersonService::new(&state.db);

    match service.get_by_id(id).await? {
        Some(person) => Ok((StatusCode::OK, Json(person.into_dto()))),
        None => Err(AppError::NotFound(
            "Person with given id not found".to_string(),
        )),
    }
}

/// Create a new person.
///
/// A nil or missing id is replaced by a generated one. Work orders listed in the
/// body are ignored; use the assignment endpoints instead.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `payload` - Person data
///
/// # Returns
/// - `201 Created` - Created person, `Location` points to the new resource
/// - `400 Bad Request` - Referenced image or address does not exist
/// - `409 Conflict` - A person with the given id already exists
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    post,
    path = "/workmanagerapi/v1/people",
    tag = PEOPLE_TAG,
    request_body = PersonDto,
    responses(
        (status = 201, description = "Successfully created person", body = PersonDto),
        (status = 400, description = "Invalid person data", body = ErrorDto),
        (status = 409, description = "Person with given id already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<PersonDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Create person {} {}", payload.first_name, payload.last_name);

    let service = PersonService::new(&state.db);

    let person = service.create(PersonParams::from_dto(payload)).await?;
    let location = format!("{}/people/{}", API_PREFIX, person.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(person.into_dto()),
    ))
}

/// Update a person.
///
/// Overwrites all fields of the person. The id in the body must either be nil or
/// match the id in the route.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `id` - Person id
/// - `payload` - New person data
///
/// # Returns
/// - `200 OK` - Updated person
/// - `400 Bad Request` - Id mismatch or unknown reference
/// - `404 Not Found` - No person with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/workmanagerapi/v1/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = Uuid, Path, description = "Person id")
    ),
    request_body = PersonDto,
    responses(
        (status = 200, description = "Successfully updated person", body = PersonDto),
        (status = 400, description = "Invalid person data", body = ErrorDto),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PersonDto>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Update person {}", id);

    let service = PersonService::new(&state.db);

    match service.update(id, PersonParams::from_dto(payload)).await? {
        Some(person) => Ok((StatusCode::OK, Json(person.into_dto()))),
        None => Err(AppError::NotFound(
            "Person with given id not found".to_string(),
        )),
    }
}

/// Delete a person.
///
/// Work orders of the person stay in place without an owner.
///
/// # Returns
/// - `204 No Content` - Person deleted
/// - `404 Not Found` - No person with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/workmanagerapi/v1/people/{id}",
    tag = PEOPLE_TAG,
    params(
        ("id" = Uuid, Path, description = "Person id")
    ),
    responses(
        (status = 204, description = "Successfully deleted person"),
        (status = 404, description = "Person not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Delete person {}", id);

    let service = PersonService::new(&state.db);

    if service.delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(
            "Person with given id not found".to_string(),
        ))
    }
}

/// Assign a work order to a person.
///
/// Assigning a work order the person already owns succeeds without changes.
///
/// # Returns
/// - `200 OK` - The assigned work order
/// - `404 Not Found` - Person or work order not found
/// - `409 Conflict` - Work order is assigned to another person
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    put,
    path = "/workmanagerapi/v1/people/{person_id}/workorders/{workorder_id}",
    tag = PEOPLE_TAG,
    params(
        ("person_id" = Uuid, Path, description = "Person id"),
        ("workorder_id" = Uuid, Path, description = "Work order id")
    ),
    responses(
        (status = 200, description = "Successfully assigned work order", body = WorkorderDto),
        (status = 404, description = "Person or work order not found", body = ErrorDto),
        (status = 409, description = "Work order is assigned to another person", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn assign_workorder(
    State(state): State<AppState>,
    Path((person_id, workorder_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Assign workorder {} to person {}", workorder_id, person_id);

    let service = PersonService::new(&state.db);

    let workorder = service.assign_workorder(person_id, workorder_id).await?;

    Ok((StatusCode::OK, Json(workorder.into_dto())))
}

/// Release a work order from a person.
///
/// # Returns
/// - `204 No Content` - Work order no longer has an owner
/// - `400 Bad Request` - Work order is not assigned to this person
/// - `404 Not Found` - Person or work order not found
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    delete,
    path = "/workmanagerapi/v1/people/{person_id}/workorders/{workorder_id}",
    tag = PEOPLE_TAG,
    params(
        ("person_id" = Uuid, Path, description = "Person id"),
        ("workorder_id" = Uuid, Path, description = "Work order id")
    ),
    responses(
        (status = 204, description = "Successfully unassigned work order"),
        (status = 400, description = "Work order is not assigned to this person", body = ErrorDto),
        (status = 404, description = "Person or work order not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn unassign_workorder(
    State(state): State<AppState>,
    Path((person_id, workorder_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!(
        "Unassign workorder {} from person {}",
        workorder_id,
        person_id
    );

    let service = PersonService::new(&state.db);

    service.unassign_workorder(person_id, workorder_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

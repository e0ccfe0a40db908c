use axum::{extract::DefaultBodyLimit, Router};
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    controller::{address, error, image, person, workorder},
    state::AppState,
};

/// Prefix of every versioned API route.
pub const API_PREFIX: &str = "/workmanagerapi/v1";

/// Largest accepted request body, sized for image uploads.
const MAX_BODY_BYTES: usize = 256 * 1024 * 1024;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Workmanager API",
        version = "1.0",
        description = "Manage people, their work orders, addresses and images"
    ),
    tags(
        (name = "people", description = "People and their work order assignments"),
        (name = "workorders", description = "Work orders"),
        (name = "addresses", description = "Addresses of people and work orders"),
        (name = "images", description = "Image metadata and image files"),
        (name = "errors", description = "Error reporting")
    )
)]
struct ApiDoc;

/// Builds the OpenAPI documented routes.
///
/// Routes sharing a path are registered together, the path and method of each
/// handler come from its `#[utoipa::path]` annotation.
fn api_router() -> OpenApiRouter<AppState> {
    OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(person::get_people, person::create_person))
        .routes(routes!(
            person::get_person,
            person::update_person,
            person::delete_person
        ))
        .routes(routes!(workorder::get_workorders_of_person))
        .routes(routes!(
            person::assign_workorder,
            person::unassign_workorder
        ))
        .routes(routes!(
            workorder::get_workorders,
            workorder::create_workorder
        ))
        .routes(routes!(
            workorder::get_workorder,
            workorder::update_workorder,
            workorder::delete_workorder
        ))
        .routes(routes!(address::get_addresses, address::create_address))
        .routes(routes!(
            address::get_address,
            address::update_address,
            address::delete_address
        ))
        .routes(routes!(image::get_image))
        .routes(routes!(image::upload_image_file))
        .routes(routes!(image::upload_image_files))
        .routes(routes!(
            image::download_image_file,
            image::replace_image_file,
            image::delete_image_file
        ))
        .routes(routes!(error::handle_error))
}

/// Builds the application router.
///
/// Serves the API, Swagger UI at `/swagger-ui` and the OpenAPI document at
/// `/api-docs/openapi.json`. CORS is layered on by the caller since it depends
/// on configuration.
pub fn router(state: AppState) -> Router {
    let (router, api) = api_router().split_for_parts();

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

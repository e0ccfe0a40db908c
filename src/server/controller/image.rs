use axum::{
    extract::{multipart::MultipartRejection, Multipart, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use uuid::Uuid;

use crate::{
    model::{
        api::ErrorDto,
        image::{ImageDto, ImageUploadFormDto},
    },
    server::{
        error::{upload::UploadError, AppError},
        model::image::ImageUpload,
        router::API_PREFIX,
        service::image::ImageService,
        state::AppState,
    },
};

/// Tag for grouping image endpoints in OpenAPI documentation
pub static IMAGES_TAG: &str = "images";

fn image_service(state: &AppState) -> ImageService<'_> {
    ImageService::new(&state.db, state.image_dir.as_path(), state.image_base_uri())
}

/// Reads the first part of a multipart body as an image upload.
///
/// # Returns
/// - `Ok(ImageUpload)` - Content type and bytes of the first part
/// - `Err(UploadError::NoFileData)` - Body is empty or the first part has no file name
/// - `Err(UploadError::InvalidFileType)` - First part is not `image/*`
/// - `Err(UploadError::Multipart)` - Body could not be read
async fn read_image_upload(multipart: &mut Multipart) -> Result<ImageUpload, UploadError> {
    let field = multipart
        .next_field()
        .await?
        .ok_or(UploadError::NoFileData)?;

    let content_type = match field.content_type() {
        Some(content_type) if content_type.starts_with("image/") => content_type.to_string(),
        _ => return Err(UploadError::InvalidFileType),
    };
    if field.file_name().is_none_or(str::is_empty) {
        return Err(UploadError::NoFileData);
    }

    let bytes = field.bytes().await?;

    Ok(ImageUpload {
        content_type,
        bytes: bytes.to_vec(),
    })
}

/// Get image metadata by id.
///
/// # Returns
/// - `200 OK` - Image metadata
/// - `404 Not Found` - No image with this id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/workmanagerapi/v1/images/{id}",
    tag = IMAGES_TAG,
    params(
        ("id" = Uuid, Path, description = "Image id")
    ),
    responses(
        (status = 200, description = "Successfully retrieved image", body = ImageDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_image(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Get image {}", id);

    match image_service(&state).get_by_id(id).await? {
        Some(image) => Ok((StatusCode::OK, Json(image.into_dto()))),
        None => Err(AppError::NotFound(
            "Image with given id not found.".to_string(),
        )),
    }
}

/// Download an image file.
///
/// Responds with the stored bytes as an attachment, using the content type
/// recorded at upload.
///
/// # Arguments
/// - `state` - Application state containing the database connection and image directory
/// - `file_name` - Name of the stored file
///
/// # Returns
/// - `200 OK` - File content
/// - `404 Not Found` - No image record for this file, or the file is missing
/// - `500 Internal Server Error` - Database or file system error
#[utoipa::path(
    get,
    path = "/workmanagerapi/v1/imageFiles/{file_name}",
    tag = IMAGES_TAG,
    params(
        ("file_name" = String, Path, description = "Stored file name")
    ),
    responses(
        (status = 200, description = "Image file content", body = Vec<u8>, content_type = "application/octet-stream"),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn download_image_file(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Download image file {}", file_name);

    let Some((image, bytes)) = image_service(&state).download(&file_name).await? else {
        return Err(AppError::NotFound(
            "Image with given uri path not found.".to_string(),
        ));
    };

    let disposition = format!("attachment; filename=\"{}\"", image.file_name());

    Ok((
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, image.content_type),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        bytes,
    ))
}

/// Upload an image file.
///
/// Only the first part of the multipart body is read. It must carry a file name
/// and an `image/*` content type. The file is stored under a generated name.
///
/// # Returns
/// - `201 Created` - Metadata of the stored image, `Location` is the file URI
/// - `400 Bad Request` - Not an image or no file in the request
/// - `415 Unsupported Media Type` - Body is not `multipart/form-data`
/// - `500 Internal Server Error` - Database or file system error
#[utoipa::path(
    post,
    path = "/workmanagerapi/v1/imageFiles",
    tag = IMAGES_TAG,
    request_body(content = ImageUploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully uploaded image", body = ImageDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 415, description = "Body is not multipart/form-data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image_file(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Upload image file");

    let mut multipart = multipart.map_err(|_| UploadError::UnsupportedMediaType)?;
    let upload = read_image_upload(&mut multipart).await?;

    let image = image_service(&state).upload(upload).await?;
    let location = image.remote_uri_path.clone();

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(image.into_dto()),
    ))
}

/// Replace an image file.
///
/// The old file is removed and the upload is stored under a new name. The image
/// keeps its id, its `remoteUriPath` changes.
///
/// # Returns
/// - `201 Created` - Updated image metadata
/// - `400 Bad Request` - Not an image or no file in the request
/// - `404 Not Found` - No image record for this file
/// - `415 Unsupported Media Type` - Body is not `multipart/form-data`
/// - `500 Internal Server Error` - Database or file system error
#[utoipa::path(
    put,
    path = "/workmanagerapi/v1/imageFiles/{file_name}",
    tag = IMAGES_TAG,
    params(
        ("file_name" = String, Path, description = "Stored file name")
    ),
    request_body(content = ImageUploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully replaced image", body = ImageDto),
        (status = 400, description = "Invalid upload", body = ErrorDto),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 415, description = "Body is not multipart/form-data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn replace_image_file(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Replace image file {}", file_name);

    let service = image_service(&state);

    if service.find_by_file_name(&file_name).await?.is_none() {
        return Err(AppError::NotFound("Image not found.".to_string()));
    }

    let mut multipart = multipart.map_err(|_| UploadError::UnsupportedMediaType)?;
    let upload = read_image_upload(&mut multipart).await?;

    match service.replace(&file_name, upload).await? {
        Some(image) => Ok((StatusCode::CREATED, Json(image.into_dto()))),
        None => Err(AppError::NotFound("Image not found.".to_string())),
    }
}

/// Delete an image file and its metadata.
///
/// # Returns
/// - `204 No Content` - File and metadata deleted
/// - `404 Not Found` - No image record for this file
/// - `500 Internal Server Error` - File missing on disk, database or file system error
#[utoipa::path(
    delete,
    path = "/workmanagerapi/v1/imageFiles/{file_name}",
    tag = IMAGES_TAG,
    params(
        ("file_name" = String, Path, description = "Stored file name")
    ),
    responses(
        (status = 204, description = "Successfully deleted image"),
        (status = 404, description = "Image not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_image_file(
    State(state): State<AppState>,
    Path(file_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Delete image file {}", file_name);

    if image_service(&state).delete(&file_name).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound("Image not found.".to_string()))
    }
}

/// Store a file without creating image metadata.
///
/// Stores the first part of the multipart body that carries a file name.
///
/// # Returns
/// - `201 Created` - Name of the stored file, `Location` is its path
/// - `400 Bad Request` - No file in the request
/// - `415 Unsupported Media Type` - Body is not `multipart/form-data`
/// - `500 Internal Server Error` - File system error
#[utoipa::path(
    post,
    path = "/workmanagerapi/v1/imageFiles/multiple",
    tag = IMAGES_TAG,
    request_body(content = ImageUploadFormDto, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Successfully stored file", body = String),
        (status = 400, description = "No file in the request", body = ErrorDto),
        (status = 415, description = "Body is not multipart/form-data", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn upload_image_files(
    State(state): State<AppState>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, AppError> {
    tracing::debug!("Upload raw image file");

    let mut multipart = multipart.map_err(|_| UploadError::UnsupportedMediaType)?;

    while let Some(field) = multipart.next_field().await.map_err(UploadError::from)? {
        if field.file_name().is_none_or(str::is_empty) {
            continue;
        }

        let bytes = field.bytes().await.map_err(UploadError::from)?;
        let file_name = image_service(&state).store_file(&bytes).await?;
        let location = format!("{}/imageFiles/{}", API_PREFIX, file_name);

        return Ok((
            StatusCode::CREATED,
            [(header::LOCATION, location)],
            Json(file_name),
        ));
    }

    Err(UploadError::NoFileData.into())
}

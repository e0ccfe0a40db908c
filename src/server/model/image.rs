//! Image metadata domain model and parameters.

use uuid::Uuid;

use crate::model::image::ImageDto;

/// Metadata of a stored image file.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    pub id: Uuid,
    pub content_type: String,
    pub remote_uri_path: String,
    pub user_id: Uuid,
}

impl Image {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::image::Model) -> Self {
        Self {
            id: entity.id,
            content_type: entity.content_type,
            remote_uri_path: entity.remote_uri_path,
            user_id: entity.user_id,
        }
    }

    /// Name of the file inside the image directory, the last segment of `remote_uri_path`.
    pub fn file_name(&self) -> &str {
        self.remote_uri_path
            .rsplit('/')
            .next()
            .unwrap_or(&self.remote_uri_path)
    }

    /// Converts the domain model to a DTO for API responses.
    pub fn into_dto(self) -> ImageDto {
        ImageDto {
            id: self.id,
            content_type: self.content_type,
            remote_uri_path: self.remote_uri_path,
            user_id: self.user_id,
        }
    }
}

/// Image record fields written after a file has been stored.
#[derive(Debug, Clone)]
pub struct ImageParams {
    pub content_type: String,
    pub remote_uri_path: String,
    pub user_id: Uuid,
}

/// An uploaded file taken from a multipart request.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub content_type: String,
    pub bytes: Vec<u8>,
}

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Metadata of an uploaded image file.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct ImageDto {
    pub id: Uuid,
    /// MIME type of the stored file, e.g. `image/png`.
    pub content_type: String,
    /// Absolute URI the file is served from.
    pub remote_uri_path: String,
    pub user_id: Uuid,
}

/// Multipart body of image uploads, used for API documentation only.
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageUploadFormDto {
    /// Image file, the part must carry a file name and an `image/*` content type.
    #[schema(format = Binary, content_media_type = "application/octet-stream")]
    pub file: String,
}

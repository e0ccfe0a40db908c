//! Image factory for creating test image metadata entities.
//!
//! Only the database row is created; no file is written to disk.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Base URI used for default remote URI paths.
pub const DEFAULT_BASE_URI: &str = "http://localhost:5010/workmanagerapi/v1/imageFiles";

/// Factory for creating test images with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let image = ImageFactory::new(&db)
///     .content_type("image/png")
///     .remote_uri_path("http://localhost/imageFiles/abc.png")
///     .build()
///     .await?;
/// ```
pub struct ImageFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    content_type: String,
    remote_uri_path: String,
    user_id: Uuid,
}

impl<'a> ImageFactory<'a> {
    /// Creates a new ImageFactory with default values.
    ///
    /// Defaults:
    /// - id: random v4 UUID
    /// - content_type: `"image/jpeg"`
    /// - remote_uri_path: `"{DEFAULT_BASE_URI}/image{n}.jpg"`
    /// - user_id: nil UUID
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            content_type: "image/jpeg".to_string(),
            remote_uri_path: format!("{}/image{}.jpg", DEFAULT_BASE_URI, n),
            user_id: Uuid::nil(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = content_type.into();
        self
    }

    pub fn remote_uri_path(mut self, remote_uri_path: impl Into<String>) -> Self {
        self.remote_uri_path = remote_uri_path.into();
        self
    }

    pub fn user_id(mut self, user_id: Uuid) -> Self {
        self.user_id = user_id;
        self
    }

    /// Builds and inserts the image entity into the database.
    pub async fn build(self) -> Result<entity::image::Model, DbErr> {
        entity::image::ActiveModel {
            id: ActiveValue::Set(self.id),
            content_type: ActiveValue::Set(self.content_type),
            remote_uri_path: ActiveValue::Set(self.remote_uri_path),
            user_id: ActiveValue::Set(self.user_id),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an image with default values.
pub async fn create_image(db: &DatabaseConnection) -> Result<entity::image::Model, DbErr> {
    ImageFactory::new(db).build().await
}

//! Image service for business logic.
//!
//! Keeps image records and image files in step. Every file is served from
//! `{base_uri}/{file_name}`, and that URI is what the record stores, so all
//! file name based operations start by rebuilding it.

use std::path::Path;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::server::{
    data::{image::ImageRepository, image_file::ImageFileRepository},
    error::{internal::InternalError, AppError},
    model::image::{Image, ImageParams, ImageUpload},
};

/// Service providing business logic for images and their files.
pub struct ImageService<'a> {
    db: &'a DatabaseConnection,
    files: ImageFileRepository<'a>,
    base_uri: String,
}

impl<'a> ImageService<'a> {
    /// Creates a new ImageService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `image_dir` - Directory image files are stored in
    /// - `base_uri` - URI image files are served from, without trailing slash
    ///
    /// # Returns
    /// - `ImageService` - New service instance
    pub fn new(db: &'a DatabaseConnection, image_dir: &'a Path, base_uri: String) -> Self {
        Self {
            db,
            files: ImageFileRepository::new(image_dir),
            base_uri,
        }
    }

    /// URI a file with the given name is served from.
    pub fn file_uri(&self, file_name: &str) -> String {
        format!("{}/{}", self.base_uri, file_name)
    }

    /// Gets image metadata by id.
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Image>, AppError> {
        Ok(ImageRepository::new(self.db).get_by_id(id).await?)
    }

    /// Loads an image record together with its file content.
    ///
    /// # Returns
    /// - `Ok(Some((Image, bytes)))` - Record and file found
    /// - `Ok(None)` - No record for this file name
    /// - `Err(AppError::NotFound)` - Record exists but the file is gone
    /// - `Err(AppError)` - Database or file system error
    pub async fn download(&self, file_name: &str) -> Result<Option<(Image, Vec<u8>)>, AppError> {
        let Some(image) = self.find_by_file_name(file_name).await? else {
            return Ok(None);
        };

        let bytes = self
            .files
            .load(image.file_name())
            .await?
            .ok_or_else(|| AppError::NotFound("Image file not found".to_string()))?;

        Ok(Some((image, bytes)))
    }

    /// Stores an uploaded file and creates its record.
    ///
    /// The stored file is removed again if the record cannot be written.
    ///
    /// # Returns
    /// - `Ok(Image)` - The new record
    /// - `Err(AppError)` - Database or file system error
    pub async fn upload(&self, upload: ImageUpload) -> Result<Image, AppError> {
        let file_name = self.files.store(&upload.bytes).await?;

        let params = ImageParams {
            content_type: upload.content_type,
            remote_uri_path: self.file_uri(&file_name),
            user_id: Uuid::nil(),
        };

        match ImageRepository::new(self.db).create(params).await {
            Ok(image) => {
                tracing::debug!("Stored image file {} for image {}", file_name, image.id);
                Ok(image)
            }
            Err(err) => {
                if let Err(cleanup) = self.files.delete(&file_name).await {
                    tracing::error!(
                        "Failed to remove image file {} after failed insert: {}",
                        file_name,
                        cleanup
                    );
                }
                Err(err.into())
            }
        }
    }

    /// Replaces the file behind an existing record.
    ///
    /// The old file is removed, the new one is stored under a fresh name, and
    /// the record is pointed at it. The record keeps its id and owner.
    ///
    /// # Returns
    /// - `Ok(Some(Image))` - The updated record
    /// - `Ok(None)` - No record for this file name
    /// - `Err(AppError)` - Database or file system error
    pub async fn replace(
        &self,
        file_name: &str,
        upload: ImageUpload,
    ) -> Result<Option<Image>, AppError> {
        let Some(image) = self.find_by_file_name(file_name).await? else {
            return Ok(None);
        };

        if !self.files.delete(image.file_name()).await? {
            tracing::warn!(
                "Image file {} of image {} was already missing before replacement",
                image.file_name(),
                image.id
            );
        }
        let new_file_name = self.files.store(&upload.bytes).await?;

        let params = ImageParams {
            content_type: upload.content_type,
            remote_uri_path: self.file_uri(&new_file_name),
            user_id: image.user_id,
        };
        let image = ImageRepository::new(self.db).update(image.id, params).await?;
        tracing::debug!("Replaced image file {} with {}", file_name, new_file_name);

        Ok(Some(image))
    }

    /// Deletes an image file and its record.
    ///
    /// # Returns
    /// - `Ok(true)` - File and record deleted
    /// - `Ok(false)` - No record for this file name
    /// - `Err(AppError::InternalErr)` - Record exists but the file is missing; the record is kept
    /// - `Err(AppError)` - Database or file system error
    pub async fn delete(&self, file_name: &str) -> Result<bool, AppError> {
        let Some(image) = self.find_by_file_name(file_name).await? else {
            return Ok(false);
        };

        if !self.files.delete(image.file_name()).await? {
            return Err(InternalError::ImageFileMissing {
                file_name: image.file_name().to_string(),
                image_id: image.id,
            }
            .into());
        }

        ImageRepository::new(self.db).delete(image.id).await?;
        tracing::debug!("Deleted image {} and file {}", image.id, file_name);

        Ok(true)
    }

    /// Stores a file without creating a record.
    ///
    /// # Returns
    /// - `Ok(String)` - Name of the stored file
    pub async fn store_file(&self, bytes: &[u8]) -> Result<String, AppError> {
        Ok(self.files.store(bytes).await?)
    }

    /// Gets the image record of a stored file.
    pub async fn find_by_file_name(&self, file_name: &str) -> Result<Option<Image>, AppError> {
        let repo = ImageRepository::new(self.db);

        Ok(repo.get_by_remote_uri_path(&self.file_uri(file_name)).await?)
    }
}

//! Image metadata repository.
//!
//! Image records are addressed by id for metadata lookups and by their
//! `remote_uri_path` for everything that starts from a file name.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::image::{Image, ImageParams};

pub struct ImageRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ImageRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Image>, DbErr> {
        let image = entity::prelude::Image::find_by_id(id).one(self.db).await?;

        Ok(image.map(Image::from_entity))
    }

    /// Finds the image record serving the given URI.
    ///
    /// # Arguments
    /// - `remote_uri_path` - Absolute URI, e.g. `http://localhost:5010/workmanagerapi/v1/imageFiles/ab12cd34.x1y`
    ///
    /// # Returns
    /// - `Ok(Some(Image))` - Record found
    /// - `Ok(None)` - No record serves this URI
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_remote_uri_path(
        &self,
        remote_uri_path: &str,
    ) -> Result<Option<Image>, DbErr> {
        let image = entity::prelude::Image::find()
            .filter(entity::image::Column::RemoteUriPath.eq(remote_uri_path))
            .one(self.db)
            .await?;

        Ok(image.map(Image::from_entity))
    }

    /// Inserts a new image record with a fresh id.
    pub async fn create(&self, params: ImageParams) -> Result<Image, DbErr> {
        let image = entity::image::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4()),
            content_type: ActiveValue::Set(params.content_type),
            remote_uri_path: ActiveValue::Set(params.remote_uri_path),
            user_id: ActiveValue::Set(params.user_id),
        }
        .insert(self.db)
        .await?;

        Ok(Image::from_entity(image))
    }

    /// Points an existing record at a new file.
    ///
    /// # Returns
    /// - `Ok(Image)` - The updated record
    /// - `Err(DbErr::RecordNotFound)` - No image with this id
    pub async fn update(&self, id: Uuid, params: ImageParams) -> Result<Image, DbErr> {
        let image = entity::prelude::Image::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!(
                "Image with id {} not found",
                id
            )))?;

        let mut active_model: entity::image::ActiveModel = image.into();
        active_model.content_type = ActiveValue::Set(params.content_type);
        active_model.remote_uri_path = ActiveValue::Set(params.remote_uri_path);
        active_model.user_id = ActiveValue::Set(params.user_id);

        let image = active_model.update(self.db).await?;

        Ok(Image::from_entity(image))
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DbErr> {
        entity::prelude::Image::delete_by_id(id).exec(self.db).await?;

        Ok(())
    }
}

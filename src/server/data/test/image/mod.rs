use crate::server::{data::image::ImageRepository, model::image::ImageParams};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory, factory::image::DEFAULT_BASE_URI};
use uuid::Uuid;

mod create;
mod delete;
mod get_by_remote_uri_path;
mod update;

fn params(file_name: &str) -> ImageParams {
    ImageParams {
        content_type: "image/png".to_string(),
        remote_uri_path: format!("{}/{}", DEFAULT_BASE_URI, file_name),
        user_id: Uuid::nil(),
    }
}
